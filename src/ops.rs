//! # Elementwise Operators
//!
//! Operator overloads for [`Vector`]. Every lane is computed independently.
//!
//! The right-hand side of a binary operator is any [`LaneSource`] with the
//! same lane count: a scalar (broadcast), another vector, a swizzle view or a
//! lazy swizzle expression. Using a view or expression here evaluates it.
//!
//! ## Relational results
//!
//! Comparisons return a vector of the element's relational type
//! ([`Element::Rel`]). False is zero. True is all bits set (`-1`), except on
//! single-lane vectors where true is `1`.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use serde::{Deserialize, Serialize};

use crate::boolean::Bool;
use crate::element::{Arith, Bitwise, Element, IntElement, RelElement};
use crate::half::Half;
use crate::lanes::{Lanes, SupportedLanes};
use crate::vector::Vector;

/// Opcode of a binary lane operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }
}

/// Something that yields `K` lanes of `T` on demand.
pub trait LaneSource<T: Element, const K: usize> {
    /// Lane `i`, for `i < K`.
    fn lane(&self, i: usize) -> T;
}

/// A scalar broadcasts to every lane.
impl<T: Element, const K: usize> LaneSource<T, K> for T {
    #[inline(always)]
    fn lane(&self, _i: usize) -> T {
        *self
    }
}

impl<T: Element, const K: usize> LaneSource<T, K> for [T; K] {
    #[inline(always)]
    fn lane(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Element, const N: usize> LaneSource<T, N> for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    #[inline(always)]
    fn lane(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Element, const N: usize> LaneSource<T, N> for &Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    #[inline(always)]
    fn lane(&self, i: usize) -> T {
        self[i]
    }
}

#[inline]
fn zip_lanes<T: Element, const N: usize>(
    lhs: &Vector<T, N>,
    rhs: &impl LaneSource<T, N>,
    f: impl Fn(T, T) -> T,
) -> Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    let mut out = *lhs;
    for (i, lane) in out.as_mut_slice().iter_mut().enumerate() {
        *lane = f(*lane, rhs.lane(i));
    }
    out
}

macro_rules! impl_binary_op {
    ($bound:ident, $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $lane_fn:ident) => {
        impl<T: $bound, const N: usize, R: LaneSource<T, N>> $Op<R> for Vector<T, N>
        where
            Lanes<N>: SupportedLanes,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: R) -> Self {
                zip_lanes(&self, &rhs, T::$lane_fn)
            }
        }

        impl<T: $bound, const N: usize, R: LaneSource<T, N>> $OpAssign<R> for Vector<T, N>
        where
            Lanes<N>: SupportedLanes,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: R) {
                *self = zip_lanes(self, &rhs, T::$lane_fn);
            }
        }
    };
}

impl_binary_op!(Arith, Add::add, AddAssign::add_assign, lane_add);
impl_binary_op!(Arith, Sub::sub, SubAssign::sub_assign, lane_sub);
impl_binary_op!(Arith, Mul::mul, MulAssign::mul_assign, lane_mul);
impl_binary_op!(Arith, Div::div, DivAssign::div_assign, lane_div);
impl_binary_op!(Arith, Rem::rem, RemAssign::rem_assign, lane_rem);
impl_binary_op!(Bitwise, BitAnd::bitand, BitAndAssign::bitand_assign, lane_and);
impl_binary_op!(Bitwise, BitOr::bitor, BitOrAssign::bitor_assign, lane_or);
impl_binary_op!(Bitwise, BitXor::bitxor, BitXorAssign::bitxor_assign, lane_xor);
impl_binary_op!(IntElement, Shl::shl, ShlAssign::shl_assign, lane_shl);
impl_binary_op!(IntElement, Shr::shr, ShrAssign::shr_assign, lane_shr);

impl<T: Arith, const N: usize> Neg for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(T::lane_neg)
    }
}

/// Bitwise complement.
impl<T: IntElement, const N: usize> Not for Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(T::lane_not)
    }
}

// ============================================================================
// Increments
// ============================================================================

impl<T: Arith, const N: usize> Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    /// Unary plus.
    #[inline(always)]
    pub fn pos(self) -> Self {
        self
    }

    /// Add one to every lane and return the new value.
    pub fn increment(&mut self) -> Self {
        *self += T::ONE;
        *self
    }

    /// Subtract one from every lane and return the new value.
    pub fn decrement(&mut self) -> Self {
        *self -= T::ONE;
        *self
    }

    /// Add one to every lane and return the old value.
    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        *self += T::ONE;
        old
    }

    /// Subtract one from every lane and return the old value.
    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        *self -= T::ONE;
        old
    }
}

// ============================================================================
// Relational and logical
// ============================================================================

impl<T: Element, const N: usize> Vector<T, N>
where
    Lanes<N>: SupportedLanes,
{
    #[inline]
    fn compare(&self, rhs: &impl LaneSource<T, N>, f: impl Fn(T, T) -> bool) -> Vector<T::Rel, N> {
        let mut out = Vector::<T::Rel, N>::splat(<T::Rel as Element>::ZERO);
        for (i, lane) in out.as_mut_slice().iter_mut().enumerate() {
            *lane = <T::Rel as RelElement>::truth(f(self[i], rhs.lane(i)), N);
        }
        out
    }

    /// Lane-wise `==`.
    pub fn lanes_eq(&self, rhs: impl LaneSource<T, N>) -> Vector<T::Rel, N> {
        self.compare(&rhs, |a, b| a == b)
    }

    /// Lane-wise `!=`.
    pub fn lanes_ne(&self, rhs: impl LaneSource<T, N>) -> Vector<T::Rel, N> {
        self.compare(&rhs, |a, b| a != b)
    }

    /// Lane-wise `>`.
    pub fn lanes_gt(&self, rhs: impl LaneSource<T, N>) -> Vector<T::Rel, N> {
        self.compare(&rhs, |a, b| a > b)
    }

    /// Lane-wise `<`.
    pub fn lanes_lt(&self, rhs: impl LaneSource<T, N>) -> Vector<T::Rel, N> {
        self.compare(&rhs, |a, b| a < b)
    }

    /// Lane-wise `>=`.
    pub fn lanes_ge(&self, rhs: impl LaneSource<T, N>) -> Vector<T::Rel, N> {
        self.compare(&rhs, |a, b| a >= b)
    }

    /// Lane-wise `<=`.
    pub fn lanes_le(&self, rhs: impl LaneSource<T, N>) -> Vector<T::Rel, N> {
        self.compare(&rhs, |a, b| a <= b)
    }

    /// Lane-wise `&&`: both lanes non-zero.
    pub fn lanes_and(&self, rhs: impl LaneSource<T, N>) -> Vector<T::Rel, N> {
        self.compare(&rhs, |a, b| a.is_truthy() && b.is_truthy())
    }

    /// Lane-wise `||`: either lane non-zero.
    pub fn lanes_or(&self, rhs: impl LaneSource<T, N>) -> Vector<T::Rel, N> {
        self.compare(&rhs, |a, b| a.is_truthy() || b.is_truthy())
    }

    /// Lane-wise `!`: true where the lane is zero.
    pub fn logical_not(&self) -> Vector<T::Rel, N> {
        self.map(|a| <T::Rel as RelElement>::truth(!a.is_truthy(), N))
    }
}

// ============================================================================
// Scalar on the left
// ============================================================================

macro_rules! impl_scalar_lhs {
    ($t:ty: $($Op:ident::$op:ident),+) => {$(
        impl<const N: usize> $Op<Vector<$t, N>> for $t
        where
            Lanes<N>: SupportedLanes,
        {
            type Output = Vector<$t, N>;

            #[inline]
            fn $op(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                Vector::splat(self).$op(rhs)
            }
        }
    )+};
}

macro_rules! impl_scalar_lhs_int {
    ($($t:ty),*) => {$(
        impl_scalar_lhs!($t: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem,
            BitAnd::bitand, BitOr::bitor, BitXor::bitxor, Shl::shl, Shr::shr);
    )*};
}

impl_scalar_lhs_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_scalar_lhs!(f32: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
impl_scalar_lhs!(f64: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
impl_scalar_lhs!(Half: Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);
impl_scalar_lhs!(Bool: BitAnd::bitand, BitOr::bitor, BitXor::bitxor);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_rhs_broadcasts() {
        let v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        assert_eq!((v * 2i32).to_array(), [2, 4, 6, 8]);
        assert_eq!((10i32 - v).to_array(), [9, 8, 7, 6]);
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        let v = Vector::<u8, 2>::from_array([250, 1]);
        assert_eq!((v + 10u8).to_array(), [4, 11]);
        assert_eq!((-Vector::<i8, 1>::splat(i8::MIN)).value(), i8::MIN);
    }

    #[test]
    fn test_shift_amount_is_masked() {
        let v = Vector::<u32, 2>::from_array([1, 1]);
        let amounts = Vector::<u32, 2>::from_array([3, 35]);
        assert_eq!((v << amounts).to_array(), [8, 8]);
    }

    #[test]
    fn test_compare_uses_all_ones_truth() {
        let v = Vector::<f32, 3>::from_array([1.0, f32::NAN, 3.0]);
        assert_eq!(v.lanes_eq(v).to_array(), [-1, 0, -1]);
        assert_eq!(v.lanes_ne(3.0f32).to_array(), [-1, -1, 0]);
    }

    #[test]
    fn test_logical_not() {
        let v = Vector::<u16, 2>::from_array([0, 5]);
        assert_eq!(v.logical_not().to_array(), [-1, 0]);
        assert_eq!(Vector::<u16, 1>::splat(0).logical_not().value(), 1);
    }

    #[test]
    fn test_post_increment_returns_old_value() {
        let mut v = Vector::<i64, 2>::from_array([1, 2]);
        assert_eq!(v.post_increment().to_array(), [1, 2]);
        assert_eq!(v.to_array(), [2, 3]);
        assert_eq!(v.decrement().to_array(), [1, 2]);
    }

    #[test]
    fn test_binop_symbols() {
        assert_eq!(BinOp::Shl.symbol(), "<<");
        assert_eq!(BinOp::Rem.symbol(), "%");
    }
}
