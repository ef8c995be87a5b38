//! # Vector Value Type
//!
//! `Vector<T, N>` is an owned, copyable vector of `N` lanes of `T`.
//!
//! - Storage holds `N` lanes, or 4 when `N == 3`; the padding lane is never
//!   observable through the lane API.
//! - `byte_size() == size_of::<T>() * (N == 3 ? 4 : N)`, which is also the
//!   in-memory size of the type.
//! - Operators live in [`crate::ops`], views in [`crate::swizzle`],
//!   multi-argument construction in [`crate::concat`].

use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use log::debug;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::convert::convert_lanes;
use crate::element::Element;
use crate::error::VecError;
use crate::lanes::{Lanes, SupportedLanes};
use crate::platform::PLATFORM;
use crate::rounding::RoundingMode;
use crate::storage::{self, SizeClass, StorageLayout};

/// Widest vector in bytes: 16 lanes of 8 bytes.
const MAX_BYTES: usize = 16 * 8;

/// A fixed-width vector of `N` lanes of `T`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T: Element, const N: usize>
where
    Lanes<N>: SupportedLanes,
{
    pub(crate) data: <Lanes<N> as SupportedLanes>::Storage<T>,
}

impl<T: Element, const N: usize> Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    /// Logical lane count.
    pub const LANES: usize = N;

    /// Every lane set to `value`.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self {
            data: <Lanes<N> as SupportedLanes>::splat(value),
        }
    }

    /// Lanes taken from an array, in order.
    #[inline]
    pub fn from_array(lanes: [T; N]) -> Self {
        let mut out = Self::splat(T::ZERO);
        out.as_mut_slice().copy_from_slice(&lanes);
        out
    }

    /// The logical lanes as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        let mut out = [T::ZERO; N];
        out.copy_from_slice(self.as_slice());
        out
    }

    /// The logical lanes.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data.as_ref()[..N]
    }

    /// The logical lanes, mutably.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data.as_mut()[..N]
    }

    /// Logical lane count.
    #[inline(always)]
    pub const fn size() -> usize {
        N
    }

    /// Bytes occupied, padding lane included.
    #[inline(always)]
    pub const fn byte_size() -> usize {
        storage::byte_size(T::SIZE, N)
    }

    /// Storage layout of this vector type on the detected platform.
    pub fn layout() -> StorageLayout {
        StorageLayout {
            align: core::mem::align_of::<Self>(),
            ..storage::describe(&PLATFORM, T::CLASS, SizeClass::of::<T>(), N)
        }
    }

    /// Apply `f` to every lane.
    #[inline]
    pub fn map<R: Element>(&self, f: impl Fn(T) -> R) -> Vector<R, N> {
        let mut out = Vector::<R, N>::splat(R::ZERO);
        for (dst, &lane) in out.as_mut_slice().iter_mut().zip(self.as_slice()) {
            *dst = f(lane);
        }
        out
    }

    /// Read lanes `offset * N .. offset * N + N` of `src`.
    pub fn load(offset: usize, src: &[T]) -> Result<Self, VecError> {
        let lanes = offset
            .checked_mul(N)
            .and_then(|start| src.get(start..start.checked_add(N)?))
            .ok_or(VecError::BufferTooShort {
                offset,
                lanes: N,
                len: src.len(),
            })?;
        let mut out = Self::splat(T::ZERO);
        out.as_mut_slice().copy_from_slice(lanes);
        Ok(out)
    }

    /// Write the lanes to `dst[offset * N .. offset * N + N]`.
    pub fn store(&self, offset: usize, dst: &mut [T]) -> Result<(), VecError> {
        let len = dst.len();
        let lanes = offset
            .checked_mul(N)
            .and_then(|start| dst.get_mut(start..start.checked_add(N)?))
            .ok_or(VecError::BufferTooShort { offset, lanes: N, len })?;
        lanes.copy_from_slice(self.as_slice());
        Ok(())
    }

    /// Convert every lane to `R` under `mode`.
    ///
    /// Fails only when a nearest-even float-to-integer conversion cannot
    /// establish or restore the rounding mode; no vector is produced then.
    pub fn convert<R: Element>(&self, mode: RoundingMode) -> Result<Vector<R, N>, VecError> {
        let mut out = Vector::<R, N>::splat(R::ZERO);
        convert_lanes(self.as_slice(), out.as_mut_slice(), mode)?;
        Ok(out)
    }

    /// Reinterpret the bytes of this vector as another vector type.
    ///
    /// Both types must have the same byte size and must not be the same type.
    /// No numeric conversion happens; the padding lane of a 3-lane vector
    /// takes part like any other lane.
    pub fn try_as<U: Element, const M: usize>(&self) -> Result<Vector<U, M>, VecError>
    where
        Lanes<M>: SupportedLanes,
    {
        let from = Self::byte_size();
        let to = Vector::<U, M>::byte_size();
        if from != to {
            debug!("Rejected reinterpretation of {} bytes as {} bytes", from, to);
            return Err(VecError::SizeMismatch { from, to });
        }
        if TypeId::of::<T>() == TypeId::of::<U>() && N == M {
            return Err(VecError::SameType);
        }

        let mut bytes = [0u8; MAX_BYTES];
        for (i, lane) in self.data.as_ref().iter().enumerate() {
            lane.write_ne_bytes(&mut bytes[i * T::SIZE..]);
        }
        let mut out = Vector::<U, M>::splat(U::ZERO);
        for (i, lane) in out.data.as_mut().iter_mut().enumerate() {
            *lane = U::read_ne_bytes(&bytes[i * U::SIZE..]);
        }
        Ok(out)
    }

    /// Reinterpret the bytes of this vector as another vector type.
    ///
    /// A byte size mismatch fails to compile.
    ///
    /// # Panics
    /// Panics if `U` and `M` name this very vector type.
    pub fn as_vec<U: Element, const M: usize>(&self) -> Vector<U, M>
    where
        Lanes<M>: SupportedLanes,
    {
        let () = AssertSameBytes::<T, U, N, M>::OK;
        match self.try_as() {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}

struct AssertSameBytes<T, U, const N: usize, const M: usize>(PhantomData<(T, U)>);

impl<T: Element, U: Element, const N: usize, const M: usize> AssertSameBytes<T, U, N, M> {
    const OK: () = assert!(
        storage::byte_size(T::SIZE, N) == storage::byte_size(U::SIZE, M),
        "as_vec requires vectors of identical byte size"
    );
}

impl<T: Element> Vector<T, 1> {
    /// The only lane of a single-lane vector.
    #[inline(always)]
    pub fn value(&self) -> T {
        self.as_slice()[0]
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    /// All lanes zero.
    fn default() -> Self {
        Self::splat(T::ZERO)
    }
}

impl<T: Element, const N: usize> PartialEq for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    /// Lane-wise equality over the logical lanes.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element, const N: usize> fmt::Debug for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{:?}", self.as_slice())
    }
}

impl<T: Element, const N: usize> Index<usize> for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    type Output = T;

    /// # Panics
    /// Panics if `index >= N`.
    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Element, const N: usize> IndexMut<usize> for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    fn from(lanes: [T; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for [T; N]
where
    Lanes<N>: SupportedLanes,
{
    fn from(vector: Vector<T, N>) -> Self {
        vector.to_array()
    }
}

// ============================================================================
// Serde: a vector is a tuple of its logical lanes.
// ============================================================================

impl<T: Element + Serialize, const N: usize> Serialize for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for lane in self.as_slice() {
            tuple.serialize_element(lane)?;
        }
        tuple.end()
    }
}

impl<'de, T: Element + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
    }
}

struct VectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Element + Deserialize<'de>, const N: usize> Visitor<'de> for VectorVisitor<T, N>
where
    Lanes<N>: SupportedLanes,
{
    type Value = Vector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of exactly {} lanes", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vector::<T, N>::splat(T::ZERO);
        for i in 0..N {
            out[i] = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<T>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::Bool;

    #[test]
    fn test_padding_lane_is_hidden() {
        let v = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v.as_slice().len(), 3);
        assert_eq!(v.data.as_ref().len(), 4);
        assert_eq!(Vector::<f32, 3>::byte_size(), 16);
        assert_eq!(core::mem::size_of::<Vector<f32, 3>>(), 16);
    }

    #[test]
    fn test_byte_size_matches_memory_size() {
        assert_eq!(Vector::<u8, 16>::byte_size(), core::mem::size_of::<Vector<u8, 16>>());
        assert_eq!(Vector::<Bool, 4>::byte_size(), 4);
        assert_eq!(Vector::<f64, 8>::byte_size(), 64);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v = Vector::<i32, 3>::splat(1);
        let _ = v[3];
    }

    #[test]
    fn test_load_store_offsets() {
        let src = [0, 1, 2, 3, 4, 5, 6, 7];
        let v = Vector::<i32, 4>::load(1, &src).unwrap();
        assert_eq!(v.to_array(), [4, 5, 6, 7]);

        let mut dst = [0; 6];
        v.store(0, &mut dst).unwrap();
        assert_eq!(dst, [4, 5, 6, 7, 0, 0]);
        assert_eq!(
            v.store(1, &mut dst),
            Err(VecError::BufferTooShort { offset: 1, lanes: 4, len: 6 })
        );
    }

    #[test]
    fn test_as_rejects_same_type() {
        let v = Vector::<u32, 4>::splat(1);
        assert_eq!(v.try_as::<u32, 4>(), Err(VecError::SameType));
    }
}
