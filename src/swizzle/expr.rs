//! Lazy swizzle expressions.
//!
//! Every binary operator applied to a view returns an [`Expr`] node holding
//! its operands and the lane function. Nothing is computed until
//! [`Expr::lane`] is called, which happens when the expression is turned into
//! a vector, assigned into a view, used on the right of a vector operator, or
//! read as a scalar.

use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use crate::boolean::Bool;
use crate::element::{Arith, Bitwise, Element, IntElement};
use crate::error::VecError;
use crate::half::Half;
use crate::lanes::{Lanes, SupportedLanes};
use crate::ops::{BinOp, LaneSource};
use crate::rounding::RoundingMode;
use crate::vector::Vector;

use super::{ConstSwizzle, Swizzle};

/// A deferred `K`-lane computation over swizzle views.
#[derive(Clone)]
pub enum Expr<'a, T: Element, const K: usize> {
    /// Owner lanes read through an index list.
    Leaf { lanes: &'a [T], indices: [usize; K] },
    /// A scalar broadcast to every lane.
    Splat(T),
    /// Lanes of an owned vector.
    Owned([T; K]),
    /// `lhs op rhs`, lane by lane.
    Node {
        op: BinOp,
        eval: fn(T, T) -> T,
        lhs: Box<Expr<'a, T, K>>,
        rhs: Box<Expr<'a, T, K>>,
    },
}

impl<'a, T: Element, const K: usize> Expr<'a, T, K> {
    pub fn node(op: BinOp, eval: fn(T, T) -> T, lhs: Self, rhs: Self) -> Self {
        Self::Node {
            op,
            eval,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluate lane `i`.
    pub fn lane(&self, i: usize) -> T {
        match self {
            Self::Leaf { lanes, indices } => lanes[indices[i]],
            Self::Splat(value) => *value,
            Self::Owned(lanes) => lanes[i],
            Self::Node { eval, lhs, rhs, .. } => eval(lhs.lane(i), rhs.lane(i)),
        }
    }

    /// Whether an operation is still waiting to be evaluated.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Node { .. })
    }

    /// Pending opcode of an internal node.
    pub fn op(&self) -> Option<BinOp> {
        match self {
            Self::Node { op, .. } => Some(*op),
            _ => None,
        }
    }
}

impl<'a, T: Element, const K: usize> Expr<'a, T, K>
where
    Lanes<K>: SupportedLanes,
{
    /// Evaluate every lane into an owned vector.
    pub fn to_vector(&self) -> Vector<T, K> {
        let mut out = Vector::<T, K>::splat(T::ZERO);
        for (i, lane) in out.as_mut_slice().iter_mut().enumerate() {
            *lane = self.lane(i);
        }
        out
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

impl<T: Element, const K: usize> fmt::Debug for Expr<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf { indices, .. } => write!(f, "swizzle{indices:?}"),
            Self::Splat(value) => write!(f, "{value:?}"),
            Self::Owned(lanes) => write!(f, "{lanes:?}"),
            Self::Node { op, lhs, rhs, .. } => write!(f, "({lhs:?} {} {rhs:?})", op.symbol()),
        }
    }
}

impl<T: Element> Expr<'_, T, 1> {
    /// Evaluate a single-lane expression to its scalar.
    pub fn value(&self) -> T {
        self.lane(0)
    }
}

impl<T: Element, const K: usize> LaneSource<T, K> for Expr<'_, T, K> {
    #[inline]
    fn lane(&self, i: usize) -> T {
        Expr::lane(self, i)
    }
}

impl<T: Element, const K: usize> LaneSource<T, K> for &Expr<'_, T, K> {
    #[inline]
    fn lane(&self, i: usize) -> T {
        Expr::lane(self, i)
    }
}

impl<T: Element, const K: usize> From<Expr<'_, T, K>> for Vector<T, K>
where
    Lanes<K>: SupportedLanes,
{
    fn from(expr: Expr<'_, T, K>) -> Self {
        expr.to_vector()
    }
}

// ============================================================================
// Operands
// ============================================================================

/// Values usable as an operand of a lazy expression.
pub trait IntoExpr<'a, T: Element, const K: usize> {
    fn into_expr(self) -> Expr<'a, T, K>;
}

impl<'a, T: Element, const K: usize> IntoExpr<'a, T, K> for T {
    #[inline]
    fn into_expr(self) -> Expr<'a, T, K> {
        Expr::Splat(self)
    }
}

impl<'a, T: Element, const K: usize> IntoExpr<'a, T, K> for Vector<T, K>
where
    Lanes<K>: SupportedLanes,
{
    #[inline]
    fn into_expr(self) -> Expr<'a, T, K> {
        Expr::Owned(self.to_array())
    }
}

impl<'a, 'b: 'a, T: Element, const K: usize> IntoExpr<'a, T, K> for ConstSwizzle<'b, T, K> {
    #[inline]
    fn into_expr(self) -> Expr<'a, T, K> {
        Expr::Leaf {
            lanes: self.lanes,
            indices: self.indices,
        }
    }
}

impl<'a, 'b: 'a, T: Element, const K: usize> IntoExpr<'a, T, K> for &'a Swizzle<'b, T, K> {
    #[inline]
    fn into_expr(self) -> Expr<'a, T, K> {
        Expr::Leaf {
            lanes: &*self.lanes,
            indices: self.indices,
        }
    }
}

impl<'a, 'b: 'a, T: Element, const K: usize> IntoExpr<'a, T, K> for Expr<'b, T, K> {
    #[inline]
    fn into_expr(self) -> Expr<'a, T, K> {
        self
    }
}

// ============================================================================
// Operators: every one builds a node, none evaluates.
// ============================================================================

macro_rules! impl_lazy_op {
    ($bound:ident, $Op:ident::$op:ident, $code:ident, $lane_fn:ident) => {
        impl<'a, T: $bound, const K: usize, R: IntoExpr<'a, T, K>> $Op<R> for Expr<'a, T, K> {
            type Output = Expr<'a, T, K>;

            #[inline]
            fn $op(self, rhs: R) -> Expr<'a, T, K> {
                Expr::node(BinOp::$code, T::$lane_fn, self, rhs.into_expr())
            }
        }

        impl<'a, T: $bound, const K: usize, R: IntoExpr<'a, T, K>> $Op<R>
            for ConstSwizzle<'a, T, K>
        {
            type Output = Expr<'a, T, K>;

            #[inline]
            fn $op(self, rhs: R) -> Expr<'a, T, K> {
                Expr::node(BinOp::$code, T::$lane_fn, self.into_expr(), rhs.into_expr())
            }
        }

        impl<'a, 'b: 'a, T: $bound, const K: usize, R: IntoExpr<'a, T, K>> $Op<R>
            for &'a Swizzle<'b, T, K>
        {
            type Output = Expr<'a, T, K>;

            #[inline]
            fn $op(self, rhs: R) -> Expr<'a, T, K> {
                Expr::node(BinOp::$code, T::$lane_fn, self.into_expr(), rhs.into_expr())
            }
        }
    };
}

impl_lazy_op!(Arith, Add::add, Add, lane_add);
impl_lazy_op!(Arith, Sub::sub, Sub, lane_sub);
impl_lazy_op!(Arith, Mul::mul, Mul, lane_mul);
impl_lazy_op!(Arith, Div::div, Div, lane_div);
impl_lazy_op!(Arith, Rem::rem, Rem, lane_rem);
impl_lazy_op!(Bitwise, BitAnd::bitand, And, lane_and);
impl_lazy_op!(Bitwise, BitOr::bitor, Or, lane_or);
impl_lazy_op!(Bitwise, BitXor::bitxor, Xor, lane_xor);
impl_lazy_op!(IntElement, Shl::shl, Shl, lane_shl);
impl_lazy_op!(IntElement, Shr::shr, Shr, lane_shr);

impl<T: Arith, const K: usize> Neg for Expr<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    type Output = Vector<T, K>;

    fn neg(self) -> Vector<T, K> {
        -self.to_vector()
    }
}

impl<T: IntElement, const K: usize> Not for Expr<'_, T, K>
where
    Lanes<K>: SupportedLanes,
{
    type Output = Vector<T, K>;

    fn not(self) -> Vector<T, K> {
        !self.to_vector()
    }
}

macro_rules! impl_scalar_lhs_lazy {
    ($t:ty: $($Op:ident::$op:ident => $code:ident, $lane_fn:ident),+) => {$(
        impl<'a, const K: usize> $Op<Expr<'a, $t, K>> for $t {
            type Output = Expr<'a, $t, K>;

            #[inline]
            fn $op(self, rhs: Expr<'a, $t, K>) -> Expr<'a, $t, K> {
                Expr::node(BinOp::$code, <$t>::$lane_fn, Expr::Splat(self), rhs)
            }
        }

        impl<'a, const K: usize> $Op<ConstSwizzle<'a, $t, K>> for $t {
            type Output = Expr<'a, $t, K>;

            #[inline]
            fn $op(self, rhs: ConstSwizzle<'a, $t, K>) -> Expr<'a, $t, K> {
                Expr::node(BinOp::$code, <$t>::$lane_fn, Expr::Splat(self), rhs.into_expr())
            }
        }

        impl<'a, 'b: 'a, const K: usize> $Op<&'a Swizzle<'b, $t, K>> for $t {
            type Output = Expr<'a, $t, K>;

            #[inline]
            fn $op(self, rhs: &'a Swizzle<'b, $t, K>) -> Expr<'a, $t, K> {
                Expr::node(BinOp::$code, <$t>::$lane_fn, Expr::Splat(self), rhs.into_expr())
            }
        }
    )+};
}

macro_rules! impl_scalar_lhs_lazy_arith {
    ($($t:ty),*) => {$(
        impl_scalar_lhs_lazy!($t:
            Add::add => Add, lane_add,
            Sub::sub => Sub, lane_sub,
            Mul::mul => Mul, lane_mul,
            Div::div => Div, lane_div,
            Rem::rem => Rem, lane_rem);
    )*};
}

macro_rules! impl_scalar_lhs_lazy_bits {
    ($($t:ty),*) => {$(
        impl_scalar_lhs_lazy!($t:
            BitAnd::bitand => And, lane_and,
            BitOr::bitor => Or, lane_or,
            BitXor::bitxor => Xor, lane_xor);
    )*};
}

macro_rules! impl_scalar_lhs_lazy_shift {
    ($($t:ty),*) => {$(
        impl_scalar_lhs_lazy!($t:
            Shl::shl => Shl, lane_shl,
            Shr::shr => Shr, lane_shr);
    )*};
}

impl_scalar_lhs_lazy_arith!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, Half);
impl_scalar_lhs_lazy_bits!(i8, i16, i32, i64, u8, u16, u32, u64, Bool);
impl_scalar_lhs_lazy_shift!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition_does_not_evaluate() {
        let v = Vector::<i32, 2>::from_array([4, 0]);
        // Integer division by the zero lane would panic if evaluated.
        let expr = v.swizzle([0, 0]) / v.swizzle([1, 1]);
        assert_eq!(expr.op(), Some(BinOp::Div));
        assert!(expr.is_pending());
        assert!(!v.swizzle([0, 1]).expr().is_pending());
    }

    #[test]
    fn test_nested_expression_evaluates_per_lane() {
        let v = Vector::<f32, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
        let expr = (v.swizzle([0, 1]) + v.swizzle([2, 3])) * 2.0f32;
        assert_eq!(expr.to_vector().to_array(), [8.0, 12.0]);
        assert_eq!(expr.lane(1), 12.0);
    }

    #[test]
    fn test_scalar_on_left_of_view() {
        let v = Vector::<u8, 2>::from_array([1, 200]);
        let expr = 100u8 + v.swizzle([1, 0]);
        assert_eq!(Vector::from(expr).to_array(), [44, 101]);
    }

    #[test]
    fn test_scalar_on_left_of_mutable_view_and_shifts() {
        let mut v = Vector::<u32, 4>::from_array([1, 2, 3, 4]);
        let view = v.swizzle_mut([3, 0]);
        let shifted: Vector<u32, 2> = (1u32 << &view).into();
        assert_eq!(shifted.to_array(), [16, 2]);
        let diff: Vector<u32, 2> = (10u32 - &view).into();
        assert_eq!(diff.to_array(), [6, 9]);
        let halved: Vector<u32, 2> = (64u32 >> v.swizzle([0, 1])).into();
        assert_eq!(halved.to_array(), [32, 16]);
    }

    #[test]
    fn test_debug_prints_pending_tree() {
        let v = Vector::<i32, 2>::from_array([1, 2]);
        let expr = (v.swizzle([1, 0]) + 3i32) << 1i32;
        assert_eq!(format!("{expr:?}"), "((swizzle[1, 0] + 3) << 1)");
    }

    #[test]
    fn test_single_lane_expression_reads_as_scalar() {
        let v = Vector::<i16, 3>::from_array([5, 6, 7]);
        let expr = v.swizzle([2]) - v.swizzle([0]);
        assert_eq!(expr.value(), 2);
    }
}
