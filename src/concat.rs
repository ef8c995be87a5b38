//! # Multi-Argument Construction
//!
//! A vector can be built from a list of scalars and smaller vectors whose lane
//! counts add up to exactly `N`. Lanes are taken in argument order.
//!
//! ```text
//! Vector::<f32, 4>::concat((1.0, xy, 4.0))    // xy: Vector<f32, 2>
//!   -> [1.0, xy[0], xy[1], 4.0]
//! ```
//!
//! [`Vector::concat`] takes a tuple and checks the lane count sum when the
//! program is compiled. [`Vector::try_concat`] takes a slice of [`Part`]s and
//! checks the sum at run time, before writing any lane.

use core::marker::PhantomData;

use log::debug;

use crate::boolean::Bool;
use crate::element::Element;
use crate::error::VecError;
use crate::half::Half;
use crate::lanes::{Lanes, SupportedLanes};
use crate::swizzle::ConstSwizzle;
use crate::vector::Vector;

/// A constructor argument contributing a fixed number of lanes of `T`.
pub trait LaneArgs<T: Element> {
    /// Lanes contributed.
    const LANES: usize;

    /// Write the contributed lanes to `out[..LANES]`.
    fn write_lanes(&self, out: &mut [T]);
}

macro_rules! impl_scalar_args {
    ($($t:ty),*) => {$(
        impl LaneArgs<$t> for $t {
            const LANES: usize = 1;

            #[inline(always)]
            fn write_lanes(&self, out: &mut [$t]) {
                out[0] = *self;
            }
        }
    )*};
}

impl_scalar_args!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, Bool, Half);

impl<T: Element, const M: usize> LaneArgs<T> for Vector<T, M>
where
    Lanes<M>: SupportedLanes,
{
    const LANES: usize = M;

    #[inline]
    fn write_lanes(&self, out: &mut [T]) {
        out[..M].copy_from_slice(self.as_slice());
    }
}

impl<T: Element, const K: usize> LaneArgs<T> for ConstSwizzle<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    const LANES: usize = K;

    #[inline]
    fn write_lanes(&self, out: &mut [T]) {
        for (i, lane) in out[..K].iter_mut().enumerate() {
            *lane = self.get(i);
        }
    }
}

macro_rules! impl_tuple_args {
    ($($arg:ident),+) => {
        impl<T: Element, $($arg: LaneArgs<T>),+> LaneArgs<T> for ($($arg,)+) {
            const LANES: usize = 0 $(+ <$arg as LaneArgs<T>>::LANES)+;

            #[allow(non_snake_case)]
            fn write_lanes(&self, out: &mut [T]) {
                let ($($arg,)+) = self;
                let mut at = 0;
                $(
                    $arg.write_lanes(&mut out[at..]);
                    at += <$arg as LaneArgs<T>>::LANES;
                )+
                debug_assert_eq!(at, Self::LANES);
            }
        }
    };
}

macro_rules! impl_tuple_args_all {
    () => {};
    ($first:ident $(, $rest:ident)*) => {
        impl_tuple_args!($first $(, $rest)*);
        impl_tuple_args_all!($($rest),*);
    };
}

impl_tuple_args_all!(A, B, C, D, E, F, G, H, I, J, K, L, M, O, P, Q);

struct LaneCountCheck<T, A, const N: usize>(PhantomData<(T, A)>);

impl<T: Element, A: LaneArgs<T>, const N: usize> LaneCountCheck<T, A, N> {
    const OK: () = assert!(
        A::LANES == N,
        "constructor arguments must contribute exactly as many lanes as the vector has"
    );
}

/// One runtime constructor argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Part<'a, T: Element> {
    Scalar(T),
    Lanes(&'a [T]),
}

impl<T: Element> Part<'_, T> {
    /// Lanes contributed.
    pub fn lanes(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Lanes(lanes) => lanes.len(),
        }
    }
}

impl<'a, T: Element, const M: usize> From<&'a Vector<T, M>> for Part<'a, T>
where
    Lanes<M>: SupportedLanes,
{
    fn from(vector: &'a Vector<T, M>) -> Self {
        Self::Lanes(vector.as_slice())
    }
}

impl<T: Element, const N: usize> Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    /// Build a vector from a tuple of scalars, vectors and read-only views.
    ///
    /// A tuple whose lane counts do not sum to `N` fails to compile.
    pub fn concat<A: LaneArgs<T>>(args: A) -> Self {
        let () = LaneCountCheck::<T, A, N>::OK;
        let mut out = Self::splat(T::ZERO);
        args.write_lanes(out.as_mut_slice());
        out
    }

    /// Build a vector from a runtime list of parts.
    ///
    /// The lane count sum is checked before any lane is written.
    pub fn try_concat(parts: &[Part<'_, T>]) -> Result<Self, VecError> {
        let found: usize = parts.iter().map(Part::lanes).sum();
        if found != N {
            debug!("Rejected {} constructor lanes for a {}-lane vector", found, N);
            return Err(VecError::LaneCountMismatch { expected: N, found });
        }

        let mut out = Self::splat(T::ZERO);
        let mut at = 0;
        for part in parts {
            match part {
                Part::Scalar(value) => out[at] = *value,
                Part::Lanes(lanes) => out.as_mut_slice()[at..at + lanes.len()].copy_from_slice(lanes),
            }
            at += part.lanes();
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_flattens_in_argument_order() {
        let xy = Vector::<f32, 2>::from_array([2.0, 3.0]);
        let v = Vector::<f32, 4>::concat((1.0f32, xy, 4.0f32));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_concat_accepts_views() {
        let src = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        let v = Vector::<i32, 3>::concat((src.swizzle([3, 0]), 7i32));
        assert_eq!(v.to_array(), [4, 1, 7]);
    }

    #[test]
    fn test_try_concat_checks_before_writing() {
        let pair = Vector::<u8, 2>::splat(9);
        let parts = [Part::Scalar(1u8), Part::from(&pair)];
        assert_eq!(
            Vector::<u8, 4>::try_concat(&parts),
            Err(VecError::LaneCountMismatch { expected: 4, found: 3 })
        );
        assert_eq!(Vector::<u8, 3>::try_concat(&parts).unwrap().to_array(), [1, 9, 9]);
    }
}
