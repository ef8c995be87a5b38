//! # Swizzle Views
//!
//! A swizzle is a borrowed view of a vector through a fixed list of `K` lane
//! indices. Indices may repeat, so `K` can exceed the owner's lane count.
//!
//! - [`ConstSwizzle`] borrows the owner immutably and can only be read.
//! - [`Swizzle`] borrows it mutably and writes through to the owner.
//!
//! Arithmetic on views builds an [`Expr`] tree without evaluating anything.
//! Lanes are computed only when the expression is materialized, assigned,
//! converted, or read as a scalar.
//!
//! ```text
//! v = (1, 2, 3, 4)
//! v.swizzle([3, 1])            -> (4, 2)
//! v.swizzle_mut([3, 1]).assign([9, 8])
//! v                            -> (1, 8, 3, 9)
//! ```
//!
//! A view's lifetime is tied to its owner by the borrow. An expression over a
//! vector borrows it immutably, so it has to be materialized before it can be
//! written back into the same vector.

mod expr;
mod named;

pub use expr::{Expr, IntoExpr};

use core::ops::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, Index, IndexMut, MulAssign,
    Neg, Not, RemAssign, ShlAssign, ShrAssign, SubAssign,
};

use log::debug;

use crate::element::{Arith, Bitwise, Element, IntElement};
use crate::error::VecError;
use crate::lanes::{Lanes, SupportedLanes};
use crate::ops::LaneSource;
use crate::rounding::RoundingMode;
use crate::storage;
use crate::vector::Vector;

fn check_indices(indices: &[usize], lanes: usize) -> Result<(), VecError> {
    match indices.iter().find(|&&index| index >= lanes) {
        Some(&index) => {
            debug!("Rejected swizzle index {} on a {}-lane vector", index, lanes);
            Err(VecError::IndexOutOfRange { index, lanes })
        }
        None => Ok(()),
    }
}

impl<T: Element, const N: usize> Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    /// Read-only view through `indices`.
    ///
    /// # Panics
    /// Panics if any index is `>= N`.
    pub fn swizzle<const K: usize>(&self, indices: [usize; K]) -> ConstSwizzle<'_, T, K>
    where
        Lanes<K>: SupportedLanes,
    {
        match self.try_swizzle(indices) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    /// Writable view through `indices`.
    ///
    /// # Panics
    /// Panics if any index is `>= N`.
    pub fn swizzle_mut<const K: usize>(&mut self, indices: [usize; K]) -> Swizzle<'_, T, K>
    where
        Lanes<K>: SupportedLanes,
    {
        match self.try_swizzle_mut(indices) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_swizzle<const K: usize>(
        &self,
        indices: [usize; K],
    ) -> Result<ConstSwizzle<'_, T, K>, VecError>
    where
        Lanes<K>: SupportedLanes,
    {
        check_indices(&indices, N)?;
        Ok(ConstSwizzle {
            lanes: self.as_slice(),
            indices,
        })
    }

    pub fn try_swizzle_mut<const K: usize>(
        &mut self,
        indices: [usize; K],
    ) -> Result<Swizzle<'_, T, K>, VecError>
    where
        Lanes<K>: SupportedLanes,
    {
        check_indices(&indices, N)?;
        Ok(Swizzle {
            lanes: self.as_mut_slice(),
            indices,
        })
    }
}

// ============================================================================
// ConstSwizzle
// ============================================================================

/// Read-only view of `K` lanes of a vector.
#[derive(Debug, Clone, Copy)]
pub struct ConstSwizzle<'a, T: Element, const K: usize> {
    lanes: &'a [T],
    indices: [usize; K],
}

impl<'a, T: Element, const K: usize> ConstSwizzle<'a, T, K>
where
    Lanes<K>: SupportedLanes,
{
    #[inline(always)]
    pub fn size(&self) -> usize {
        K
    }

    /// Bytes a vector materialized from this view occupies.
    #[inline(always)]
    pub fn byte_size(&self) -> usize {
        storage::byte_size(T::SIZE, K)
    }

    /// Owner lane indices, in view order.
    #[inline(always)]
    pub fn indices(&self) -> &[usize; K] {
        &self.indices
    }

    /// Lane `i` of the view.
    ///
    /// # Panics
    /// Panics if `i >= K`.
    #[inline(always)]
    pub fn get(&self, i: usize) -> T {
        self.lanes[self.indices[i]]
    }

    /// Evaluate into an owned vector.
    pub fn to_vector(&self) -> Vector<T, K> {
        let mut out = Vector::<T, K>::splat(T::ZERO);
        for (i, lane) in out.as_mut_slice().iter_mut().enumerate() {
            *lane = self.get(i);
        }
        out
    }

    /// The view as a lazy expression leaf.
    #[inline]
    pub fn expr(&self) -> Expr<'a, T, K> {
        Expr::Leaf {
            lanes: self.lanes,
            indices: self.indices,
        }
    }

    pub fn convert<R: Element>(&self, mode: RoundingMode) -> Result<Vector<R, K>, VecError> {
        self.to_vector().convert(mode)
    }

    pub fn try_as<U: Element, const M: usize>(&self) -> Result<Vector<U, M>, VecError>
    where
        Lanes<M>: SupportedLanes,
    {
        self.to_vector().try_as()
    }

    pub fn as_vec<U: Element, const M: usize>(&self) -> Vector<U, M>
    where
        Lanes<M>: SupportedLanes,
    {
        self.to_vector().as_vec()
    }

    /// Lane-wise `==` against the materialized lanes; the other comparisons
    /// and `lanes_and`/`lanes_or` follow the same pattern.
    pub fn lanes_eq(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.to_vector().lanes_eq(rhs)
    }

    pub fn lanes_ne(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.to_vector().lanes_ne(rhs)
    }

    pub fn lanes_gt(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.to_vector().lanes_gt(rhs)
    }

    pub fn lanes_lt(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.to_vector().lanes_lt(rhs)
    }

    pub fn lanes_ge(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.to_vector().lanes_ge(rhs)
    }

    pub fn lanes_le(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.to_vector().lanes_le(rhs)
    }

    pub fn lanes_and(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.to_vector().lanes_and(rhs)
    }

    pub fn lanes_or(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.to_vector().lanes_or(rhs)
    }

    /// Lane-wise `!`: true where the lane is zero.
    pub fn logical_not(&self) -> Vector<T::Rel, K> {
        self.to_vector().logical_not()
    }
}

impl<T: Element> ConstSwizzle<'_, T, 1> {
    /// The only lane of a single-index view.
    #[inline(always)]
    pub fn value(&self) -> T {
        self.get(0)
    }
}

impl<T: Element, const K: usize> Index<usize> for ConstSwizzle<'_, T, K> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.lanes[self.indices[i]]
    }
}

impl<T: Element, const K: usize> LaneSource<T, K> for ConstSwizzle<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    #[inline(always)]
    fn lane(&self, i: usize) -> T {
        self.get(i)
    }
}

impl<T: Element, const K: usize> From<ConstSwizzle<'_, T, K>> for Vector<T, K>
where
    Lanes<K>: SupportedLanes,
{
    fn from(view: ConstSwizzle<'_, T, K>) -> Self {
        view.to_vector()
    }
}

impl<T: Arith, const K: usize> Neg for ConstSwizzle<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    type Output = Vector<T, K>;

    fn neg(self) -> Vector<T, K> {
        -self.to_vector()
    }
}

impl<T: IntElement, const K: usize> Not for ConstSwizzle<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    type Output = Vector<T, K>;

    fn not(self) -> Vector<T, K> {
        !self.to_vector()
    }
}

// ============================================================================
// Swizzle
// ============================================================================

/// Writable view of `K` lanes of a vector.
///
/// Writes go straight to the owner's lanes, one view lane at a time in index
/// order. When an index repeats, the write for the later position wins.
#[derive(Debug)]
pub struct Swizzle<'a, T: Element, const K: usize> {
    lanes: &'a mut [T],
    indices: [usize; K],
}

impl<'a, T: Element, const K: usize> Swizzle<'a, T, K>
where
    Lanes<K>: SupportedLanes,
{
    /// Read-only reborrow of this view.
    #[inline(always)]
    pub fn as_const(&self) -> ConstSwizzle<'_, T, K> {
        ConstSwizzle {
            lanes: &*self.lanes,
            indices: self.indices,
        }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        K
    }

    #[inline(always)]
    pub fn byte_size(&self) -> usize {
        storage::byte_size(T::SIZE, K)
    }

    #[inline(always)]
    pub fn indices(&self) -> &[usize; K] {
        &self.indices
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> T {
        self.lanes[self.indices[i]]
    }

    /// Write `value` to the owner lane behind view lane `i`.
    #[inline(always)]
    pub fn set(&mut self, i: usize, value: T) {
        self.lanes[self.indices[i]] = value;
    }

    pub fn to_vector(&self) -> Vector<T, K> {
        self.as_const().to_vector()
    }

    pub fn expr(&self) -> Expr<'_, T, K> {
        self.as_const().expr()
    }

    /// Write `rhs` into the owner lanes named by the index list, in order.
    ///
    /// A scalar is written to every named lane.
    pub fn assign(&mut self, rhs: impl LaneSource<T, K>) {
        for i in 0..K {
            let value = rhs.lane(i);
            self.set(i, value);
        }
    }

    #[inline]
    fn update(&mut self, rhs: &impl LaneSource<T, K>, f: impl Fn(T, T) -> T) {
        for (i, &index) in self.indices.iter().enumerate() {
            self.lanes[index] = f(self.lanes[index], rhs.lane(i));
        }
    }

    pub fn convert<R: Element>(&self, mode: RoundingMode) -> Result<Vector<R, K>, VecError> {
        self.as_const().convert(mode)
    }

    pub fn try_as<U: Element, const M: usize>(&self) -> Result<Vector<U, M>, VecError>
    where
        Lanes<M>: SupportedLanes,
    {
        self.as_const().try_as()
    }

    pub fn as_vec<U: Element, const M: usize>(&self) -> Vector<U, M>
    where
        Lanes<M>: SupportedLanes,
    {
        self.as_const().as_vec()
    }

    /// Lane-wise `==` against the materialized lanes; the other comparisons
    /// and `lanes_and`/`lanes_or` follow the same pattern.
    pub fn lanes_eq(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.as_const().lanes_eq(rhs)
    }

    pub fn lanes_ne(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.as_const().lanes_ne(rhs)
    }

    pub fn lanes_gt(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.as_const().lanes_gt(rhs)
    }

    pub fn lanes_lt(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.as_const().lanes_lt(rhs)
    }

    pub fn lanes_ge(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.as_const().lanes_ge(rhs)
    }

    pub fn lanes_le(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.as_const().lanes_le(rhs)
    }

    pub fn lanes_and(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.as_const().lanes_and(rhs)
    }

    pub fn lanes_or(&self, rhs: impl LaneSource<T, K>) -> Vector<T::Rel, K> {
        self.as_const().lanes_or(rhs)
    }

    /// Lane-wise `!`: true where the lane is zero.
    pub fn logical_not(&self) -> Vector<T::Rel, K> {
        self.as_const().logical_not()
    }
}

impl<T: Arith, const K: usize> Swizzle<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    /// Add one through the view and return the new lanes.
    pub fn increment(&mut self) -> Vector<T, K> {
        *self += T::ONE;
        self.to_vector()
    }

    pub fn decrement(&mut self) -> Vector<T, K> {
        *self -= T::ONE;
        self.to_vector()
    }

    /// Add one through the view and return the lanes as they were before.
    pub fn post_increment(&mut self) -> Vector<T, K> {
        let old = self.to_vector();
        *self += T::ONE;
        old
    }

    pub fn post_decrement(&mut self) -> Vector<T, K> {
        let old = self.to_vector();
        *self -= T::ONE;
        old
    }
}

impl<T: Element> Swizzle<'_, T, 1> {
    #[inline(always)]
    pub fn value(&self) -> T {
        self.get(0)
    }
}

impl<T: Element, const K: usize> Index<usize> for Swizzle<'_, T, K> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.lanes[self.indices[i]]
    }
}

impl<T: Element, const K: usize> IndexMut<usize> for Swizzle<'_, T, K> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.lanes[self.indices[i]]
    }
}

impl<T: Element, const K: usize> LaneSource<T, K> for &Swizzle<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    #[inline(always)]
    fn lane(&self, i: usize) -> T {
        self.get(i)
    }
}

impl<T: Element, const K: usize> From<&Swizzle<'_, T, K>> for Vector<T, K>
where
    Lanes<K>: SupportedLanes,
{
    fn from(view: &Swizzle<'_, T, K>) -> Self {
        view.to_vector()
    }
}

impl<T: Arith, const K: usize> Neg for &Swizzle<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    type Output = Vector<T, K>;

    fn neg(self) -> Vector<T, K> {
        -self.to_vector()
    }
}

impl<T: IntElement, const K: usize> Not for &Swizzle<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    type Output = Vector<T, K>;

    fn not(self) -> Vector<T, K> {
        !self.to_vector()
    }
}

macro_rules! impl_compound_assign {
    ($bound:ident, $OpAssign:ident::$op_assign:ident, $lane_fn:ident) => {
        /// Reads each named owner lane, combines it with the matching rhs
        /// lane and writes it back before moving to the next index.
        impl<T: $bound, const K: usize, R: LaneSource<T, K>> $OpAssign<R> for Swizzle<'_, T, K>
        where
            Lanes<K>: SupportedLanes,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: R) {
                self.update(&rhs, T::$lane_fn);
            }
        }
    };
}

impl_compound_assign!(Arith, AddAssign::add_assign, lane_add);
impl_compound_assign!(Arith, SubAssign::sub_assign, lane_sub);
impl_compound_assign!(Arith, MulAssign::mul_assign, lane_mul);
impl_compound_assign!(Arith, DivAssign::div_assign, lane_div);
impl_compound_assign!(Arith, RemAssign::rem_assign, lane_rem);
impl_compound_assign!(Bitwise, BitAndAssign::bitand_assign, lane_and);
impl_compound_assign!(Bitwise, BitOrAssign::bitor_assign, lane_or);
impl_compound_assign!(Bitwise, BitXorAssign::bitxor_assign, lane_xor);
impl_compound_assign!(IntElement, ShlAssign::shl_assign, lane_shl);
impl_compound_assign!(IntElement, ShrAssign::shr_assign, lane_shr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_reads_through_indices() {
        let v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        let view = v.swizzle([3, 1]);
        assert_eq!(view.to_vector().to_array(), [4, 2]);
        assert_eq!(view[0], 4);
        assert_eq!(view.size(), 2);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut v = Vector::<i32, 2>::splat(0);
        assert_eq!(
            v.try_swizzle([0, 2]).map(|view| view.to_vector()),
            Err(VecError::IndexOutOfRange { index: 2, lanes: 2 })
        );
        assert!(v.try_swizzle_mut([5]).is_err());
        assert_eq!(v.to_array(), [0, 0]);
    }

    #[test]
    fn test_compound_assign_with_repeated_index_accumulates() {
        let mut v = Vector::<i32, 2>::from_array([1, 10]);
        v.swizzle_mut([0, 0]).add_assign(Vector::<i32, 2>::from_array([2, 3]));
        assert_eq!(v.to_array(), [6, 10]);
    }

    #[test]
    fn test_three_lane_view_byte_size_is_padded() {
        let v = Vector::<f32, 4>::splat(0.0);
        assert_eq!(v.swizzle([0, 1, 2]).byte_size(), 16);
        assert_eq!(v.swizzle([0, 1]).byte_size(), 8);
    }
}
