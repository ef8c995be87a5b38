//! # Element Types
//!
//! The scalar types a [`Vector`](crate::Vector) can hold, and the
//! classification facts the storage and conversion rules are keyed on.
//!
//! | Element | Class | Relational result |
//! |---------|-------|-------------------|
//! | `i8` `u8` `Bool` | integral (`Bool` also boolean) | `i8` |
//! | `i16` `u16` `Half` | integral / floating + half | `i16` |
//! | `i32` `u32` `f32` | integral / floating | `i32` |
//! | `i64` `u64` `f64` | integral / floating | `i64` |
//!
//! Capabilities are layered as traits so that operators only exist where the
//! element's numeric domain defines them:
//!
//! - [`Arith`]: `+ - * / %`, negation, increments. Everything but `Bool`.
//! - [`Bitwise`]: `& | ^`. Integers and `Bool`.
//! - [`IntElement`]: shifts and bitwise complement. Integers only.

use core::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::boolean::Bool;
use crate::half::Half;

bitflags! {
    /// Classification of an element type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ElementClass: u8 {
        const INTEGRAL = 1 << 0;
        const FLOATING = 1 << 1;
        const SIGNED   = 1 << 2;
        const BOOLEAN  = 1 << 3;
        const HALF     = 1 << 4;
    }
}

impl ElementClass {
    /// Integral types, `Bool` included.
    #[inline]
    pub fn is_integral(self) -> bool {
        self.contains(Self::INTEGRAL)
    }

    /// Floating-point types, `Half` included.
    #[inline]
    pub fn is_floating(self) -> bool {
        self.contains(Self::FLOATING)
    }

    #[inline]
    pub fn is_signed(self) -> bool {
        self.contains(Self::SIGNED)
    }

    #[inline]
    pub fn is_boolean(self) -> bool {
        self.contains(Self::BOOLEAN)
    }

    #[inline]
    pub fn is_half(self) -> bool {
        self.contains(Self::HALF)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A scalar type that can occupy a vector lane.
///
/// This trait is sealed; the set of element types is closed.
pub trait Element:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static + sealed::Sealed
{
    /// Same-size signed integer used for relational results.
    type Rel: RelElement;

    /// Classification used to pick storage and conversion rules.
    const CLASS: ElementClass;

    /// Size of one lane in bytes.
    const SIZE: usize;

    const ZERO: Self;
    const ONE: Self;

    /// Integer value of this lane (floats truncate, saturating).
    fn to_i128(self) -> i128;

    /// Floating value of this lane.
    fn to_f64(self) -> f64;

    /// Cast from an integer, wrapping to the lane width like a C cast.
    fn from_i128(value: i128) -> Self;

    /// Cast from a floating value. Integers saturate, NaN becomes zero.
    fn from_f64(value: f64) -> Self;

    /// Write the native-endian bytes of this lane into `out[..SIZE]`.
    fn write_ne_bytes(self, out: &mut [u8]);

    /// Read a lane from the native-endian bytes in `bytes[..SIZE]`.
    fn read_ne_bytes(bytes: &[u8]) -> Self;

    /// C truthiness: anything but zero.
    #[inline(always)]
    fn is_truthy(self) -> bool {
        self != Self::ZERO
    }
}

/// Element types with arithmetic.
pub trait Arith: Element {
    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    /// Integer division by zero panics.
    fn lane_div(self, rhs: Self) -> Self;
    /// Integer remainder by zero panics.
    fn lane_rem(self, rhs: Self) -> Self;
    fn lane_neg(self) -> Self;
}

/// Element types with `& | ^`.
pub trait Bitwise: Element {
    fn lane_and(self, rhs: Self) -> Self;
    fn lane_or(self, rhs: Self) -> Self;
    fn lane_xor(self, rhs: Self) -> Self;
}

/// Integer element types: shifts and complement on top of arithmetic.
pub trait IntElement: Arith + Bitwise {
    /// Shift left; the amount is masked to the lane width.
    fn lane_shl(self, rhs: Self) -> Self;
    /// Shift right (arithmetic for signed lanes); the amount is masked.
    fn lane_shr(self, rhs: Self) -> Self;
    fn lane_not(self) -> Self;
}

/// Signed integers that carry relational results.
pub trait RelElement: IntElement {
    /// Every bit set, numerically `-1`.
    const ALL_ONES: Self;

    /// Encode a comparison outcome for a vector of `lanes` lanes.
    ///
    /// True is all bits set, except for single-lane vectors where the sign is
    /// inverted once more and true is `1`. Existing consumers depend on that
    /// single-lane encoding.
    #[inline(always)]
    fn truth(value: bool, lanes: usize) -> Self {
        match (value, lanes) {
            (false, _) => Self::ZERO,
            (true, 1) => Self::ONE,
            (true, _) => Self::ALL_ONES,
        }
    }
}

// ============================================================================
// Integer implementations
// ============================================================================

macro_rules! impl_int_element {
    ($($t:ty => $rel:ty, $class:expr;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Element for $t {
            type Rel = $rel;
            const CLASS: ElementClass = $class;
            const SIZE: usize = core::mem::size_of::<$t>();
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_i128(value: i128) -> Self {
                value as $t
            }

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn write_ne_bytes(self, out: &mut [u8]) {
                out[..Self::SIZE].copy_from_slice(&self.to_ne_bytes());
            }

            #[inline(always)]
            fn read_ne_bytes(bytes: &[u8]) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$t>()];
                buf.copy_from_slice(&bytes[..Self::SIZE]);
                <$t>::from_ne_bytes(buf)
            }
        }

        impl Arith for $t {
            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self.wrapping_rem(rhs)
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }
        }

        impl Bitwise for $t {
            #[inline(always)]
            fn lane_and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline(always)]
            fn lane_or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline(always)]
            fn lane_xor(self, rhs: Self) -> Self {
                self ^ rhs
            }
        }

        impl IntElement for $t {
            #[inline(always)]
            fn lane_shl(self, rhs: Self) -> Self {
                self.wrapping_shl(rhs as u32)
            }

            #[inline(always)]
            fn lane_shr(self, rhs: Self) -> Self {
                self.wrapping_shr(rhs as u32)
            }

            #[inline(always)]
            fn lane_not(self) -> Self {
                !self
            }
        }
    )*};
}

impl_int_element! {
    i8 => i8, ElementClass::INTEGRAL.union(ElementClass::SIGNED);
    i16 => i16, ElementClass::INTEGRAL.union(ElementClass::SIGNED);
    i32 => i32, ElementClass::INTEGRAL.union(ElementClass::SIGNED);
    i64 => i64, ElementClass::INTEGRAL.union(ElementClass::SIGNED);
    u8 => i8, ElementClass::INTEGRAL;
    u16 => i16, ElementClass::INTEGRAL;
    u32 => i32, ElementClass::INTEGRAL;
    u64 => i64, ElementClass::INTEGRAL;
}

impl RelElement for i8 {
    const ALL_ONES: Self = -1;
}

impl RelElement for i16 {
    const ALL_ONES: Self = -1;
}

impl RelElement for i32 {
    const ALL_ONES: Self = -1;
}

impl RelElement for i64 {
    const ALL_ONES: Self = -1;
}

// ============================================================================
// Floating-point implementations
// ============================================================================

macro_rules! impl_float_element {
    ($($t:ty => $rel:ty;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Element for $t {
            type Rel = $rel;
            const CLASS: ElementClass = ElementClass::FLOATING.union(ElementClass::SIGNED);
            const SIZE: usize = core::mem::size_of::<$t>();
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline(always)]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_i128(value: i128) -> Self {
                value as $t
            }

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn write_ne_bytes(self, out: &mut [u8]) {
                out[..Self::SIZE].copy_from_slice(&self.to_ne_bytes());
            }

            #[inline(always)]
            fn read_ne_bytes(bytes: &[u8]) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$t>()];
                buf.copy_from_slice(&bytes[..Self::SIZE]);
                <$t>::from_ne_bytes(buf)
            }
        }

        impl Arith for $t {
            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self % rhs
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                -self
            }
        }
    )*};
}

impl_float_element! {
    f32 => i32;
    f64 => i64;
}

// ============================================================================
// Half
// ============================================================================

impl sealed::Sealed for Half {}

impl Element for Half {
    type Rel = i16;
    const CLASS: ElementClass = ElementClass::FLOATING
        .union(ElementClass::SIGNED)
        .union(ElementClass::HALF);
    const SIZE: usize = 2;
    const ZERO: Self = Half::ZERO;
    const ONE: Self = Half::ONE;

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self.to_f32() as i128
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        Half::to_f64(self)
    }

    #[inline(always)]
    fn from_i128(value: i128) -> Self {
        Half::from_f32(value as f32)
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        Half::from_f64(value)
    }

    #[inline(always)]
    fn write_ne_bytes(self, out: &mut [u8]) {
        out[..2].copy_from_slice(&self.to_bits().to_ne_bytes());
    }

    #[inline(always)]
    fn read_ne_bytes(bytes: &[u8]) -> Self {
        Half::from_bits(u16::from_ne_bytes([bytes[0], bytes[1]]))
    }
}

impl Arith for Half {
    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        Half::from_f32(self.to_f32() + rhs.to_f32())
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        Half::from_f32(self.to_f32() - rhs.to_f32())
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        Half::from_f32(self.to_f32() * rhs.to_f32())
    }

    #[inline(always)]
    fn lane_div(self, rhs: Self) -> Self {
        Half::from_f32(self.to_f32() / rhs.to_f32())
    }

    #[inline(always)]
    fn lane_rem(self, rhs: Self) -> Self {
        Half::from_f32(self.to_f32() % rhs.to_f32())
    }

    #[inline(always)]
    fn lane_neg(self) -> Self {
        // Flip the sign bit; no upcast needed.
        Half::from_bits(self.to_bits() ^ 0x8000)
    }
}

// ============================================================================
// Bool
//
// One signed byte, kept bit for bit. Conversions and logical operators read
// it as a truth value and write back 0 or 1.
// ============================================================================

impl sealed::Sealed for Bool {}

impl Element for Bool {
    type Rel = i8;
    const CLASS: ElementClass = ElementClass::INTEGRAL.union(ElementClass::BOOLEAN);
    const SIZE: usize = 1;
    const ZERO: Self = Bool::FALSE;
    const ONE: Self = Bool::TRUE;

    #[inline(always)]
    fn to_i128(self) -> i128 {
        self.get() as i128
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        if self.get() {
            1.0
        } else {
            0.0
        }
    }

    #[inline(always)]
    fn from_i128(value: i128) -> Self {
        Bool::new(value != 0)
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        Bool::new(value != 0.0)
    }

    #[inline(always)]
    fn write_ne_bytes(self, out: &mut [u8]) {
        out[0] = self.to_bits() as u8;
    }

    #[inline(always)]
    fn read_ne_bytes(bytes: &[u8]) -> Self {
        Bool::from_bits(bytes[0] as i8)
    }
}

impl Bitwise for Bool {
    #[inline(always)]
    fn lane_and(self, rhs: Self) -> Self {
        Bool::new(self.get() & rhs.get())
    }

    #[inline(always)]
    fn lane_or(self, rhs: Self) -> Self {
        Bool::new(self.get() | rhs.get())
    }

    #[inline(always)]
    fn lane_xor(self, rhs: Self) -> Self {
        Bool::new(self.get() ^ rhs.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(i32::CLASS.is_integral() && i32::CLASS.is_signed());
        assert!(u16::CLASS.is_integral() && !u16::CLASS.is_signed());
        assert!(f64::CLASS.is_floating() && !f64::CLASS.is_half());
        assert!(Half::CLASS.is_floating() && Half::CLASS.is_half());
        assert!(Bool::CLASS.is_integral() && Bool::CLASS.is_boolean());
    }

    #[test]
    fn test_relational_type_matches_element_size() {
        assert_eq!(core::mem::size_of::<<u8 as Element>::Rel>(), 1);
        assert_eq!(core::mem::size_of::<<Bool as Element>::Rel>(), 1);
        assert_eq!(core::mem::size_of::<<Half as Element>::Rel>(), 2);
        assert_eq!(core::mem::size_of::<<f32 as Element>::Rel>(), 4);
        assert_eq!(core::mem::size_of::<<u64 as Element>::Rel>(), 8);
    }

    #[test]
    fn test_truth_encoding() {
        assert_eq!(i32::truth(true, 4), -1);
        assert_eq!(i32::truth(false, 4), 0);
        assert_eq!(i32::truth(true, 1), 1);
        assert_eq!(i8::truth(false, 1), 0);
    }

    #[test]
    fn test_integer_lane_ops_wrap() {
        assert_eq!(250u8.lane_add(10), 4);
        assert_eq!(i8::MIN.lane_neg(), i8::MIN);
        assert_eq!(1u32.lane_shl(33), 2);
        assert_eq!((-8i32).lane_shr(1), -4);
    }

    #[test]
    fn test_bytes_roundtrip_native_endian() {
        let mut buf = [0u8; 8];
        (-2i32).write_ne_bytes(&mut buf);
        assert_eq!(i32::read_ne_bytes(&buf), -2);
        Bool::TRUE.write_ne_bytes(&mut buf);
        assert_eq!(buf[0], 1);
        assert_eq!(Bool::read_ne_bytes(&[0xFE]).to_bits(), -2);
        assert_eq!(Bool::from_bits(7).to_i128(), 1);
    }
}
