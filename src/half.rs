//! Half-precision scalar type for use as a vector element.
//!
//! `Half` is an IEEE 754 binary16 value:
//! - 1 sign bit
//! - 5 exponent bits (bias 15)
//! - 10 mantissa bits
//!
//! # Layout
//!
//! ```text
//! f32:  SEEEEEEE EMMMMMMM MMMMMMMM MMMMMMMM
//! f16:  SEEEEEMM MMMMMMMM
//! ```
//!
//! Conversion from `f32` rounds to nearest, ties to even, and handles
//! subnormals, overflow to infinity and NaN payloads. Conversion to `f32`
//! is exact.
//!
//! Arithmetic upcasts to `f32`, computes, and rounds back. Whether the
//! platform has native half arithmetic only changes the storage layout
//! reported by [`crate::storage`], never the values computed here.

use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Half-precision floating-point scalar.
///
/// The raw bits are stored as a `u16`.
#[derive(Copy, Clone, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Half(u16);

impl Half {
    /// `0.0`
    pub const ZERO: Self = Self(0x0000);
    /// `1.0`
    pub const ONE: Self = Self(0x3C00);
    /// `-1.0`
    pub const NEG_ONE: Self = Self(0xBC00);
    /// Largest finite value, `65504.0`.
    pub const MAX: Self = Self(0x7BFF);
    /// Positive infinity.
    pub const INFINITY: Self = Self(0x7C00);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(0xFC00);
    /// Quiet NaN.
    pub const NAN: Self = Self(0x7E00);

    /// Construct from raw binary16 bits.
    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Return the raw binary16 bits.
    #[inline(always)]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if this value is NaN.
    #[inline(always)]
    pub const fn is_nan(self) -> bool {
        (self.0 & 0x7C00) == 0x7C00 && (self.0 & 0x03FF) != 0
    }

    /// Convert `f32` to half precision, rounding to nearest even.
    pub fn from_f32(value: f32) -> Self {
        let x = value.to_bits();
        let sign = (x >> 16) & 0x8000;
        let exp = ((x >> 23) & 0xFF) as i32;
        let man = x & 0x007F_FFFF;

        if exp == 0xFF {
            // Keep NaNs quiet so a payload truncated to zero stays NaN.
            let nan = if man != 0 { 0x0200 | (man >> 13) } else { 0 };
            return Self((sign | 0x7C00 | nan) as u16);
        }

        let unbiased = exp - 127;
        if unbiased > 15 {
            return Self((sign | 0x7C00) as u16);
        }

        if unbiased >= -14 {
            let half_exp = ((unbiased + 15) as u32) << 10;
            let half_man = man >> 13;
            let round_bit = 0x0000_1000;
            let mut bits = sign | half_exp | half_man;
            // Round bit set, and either sticky bits or an odd result bit.
            if (man & round_bit) != 0 && (man & (3 * round_bit - 1)) != 0 {
                bits += 1;
            }
            return Self(bits as u16);
        }

        if unbiased < -25 {
            return Self(sign as u16);
        }

        // Subnormal result: value = m * 2^-24.
        let full = man | 0x0080_0000;
        let shift = (-(unbiased + 1)) as u32;
        let mut half_man = full >> shift;
        let round_bit = 1u32 << (shift - 1);
        let rest = full & ((round_bit << 1) - 1);
        if rest > round_bit || (rest == round_bit && (half_man & 1) == 1) {
            half_man += 1;
        }
        Self((sign | half_man) as u16)
    }

    /// Convert `f64` to half precision by way of `f32`.
    #[inline(always)]
    pub fn from_f64(value: f64) -> Self {
        Self::from_f32(value as f32)
    }

    /// Convert to `f32`. This is exact.
    pub fn to_f32(self) -> f32 {
        let h = self.0 as u32;
        let sign = (h & 0x8000) << 16;
        let exp = (h >> 10) & 0x1F;
        let man = h & 0x03FF;

        if exp == 0x1F {
            return f32::from_bits(sign | 0x7F80_0000 | (man << 13));
        }
        if exp == 0 {
            if man == 0 {
                return f32::from_bits(sign);
            }
            let mut e: i32 = -14;
            let mut m = man;
            while m & 0x0400 == 0 {
                m <<= 1;
                e -= 1;
            }
            m &= 0x03FF;
            return f32::from_bits(sign | (((e + 127) as u32) << 23) | (m << 13));
        }
        f32::from_bits(sign | ((exp + 127 - 15) << 23) | (man << 13))
    }

    /// Convert to `f64`. This is exact.
    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }
}

impl PartialEq for Half {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_f32())
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

impl From<Half> for f32 {
    #[inline(always)]
    fn from(value: Half) -> Self {
        value.to_f32()
    }
}

impl From<f32> for Half {
    #[inline(always)]
    fn from(value: f32) -> Self {
        Half::from_f32(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
