//! # Conversion Dispatcher
//!
//! Picks the per-lane conversion routine for a (source, destination) element
//! pair, in priority order:
//!
//! 1. same type: identity
//! 2. integer to integer, integer to float, float to float: plain numeric cast
//! 3. float to integer: rounding per [`RoundingMode`]
//! 4. anything else: plain numeric cast without a rounding guarantee
//!
//! Conversion never changes the lane count. A nearest-even conversion of a
//! whole slice switches the floating-point environment once and restores it
//! before returning, also on error.

use core::any::{Any, TypeId};

use crate::element::{Element, ElementClass};
use crate::error::VecError;
use crate::rounding::{self, RoundingGuard, RoundingMode};

/// Conversion routine selected for an element pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPath {
    Identity,
    IntToInt,
    IntToFloat,
    FloatToFloat,
    FloatToInt,
    Fallback,
}

impl ConversionPath {
    /// Select the path for converting `src` lanes into `dst` lanes.
    pub fn select(same_type: bool, src: ElementClass, dst: ElementClass) -> Self {
        if same_type {
            return Self::Identity;
        }
        match (
            src.is_integral(),
            src.is_floating(),
            dst.is_integral(),
            dst.is_floating(),
        ) {
            (true, _, true, _) => Self::IntToInt,
            (true, _, _, true) => Self::IntToFloat,
            (_, true, _, true) => Self::FloatToFloat,
            (_, true, true, _) => Self::FloatToInt,
            _ => Self::Fallback,
        }
    }

    /// Path for a concrete element pair.
    pub fn of<T: Element, R: Element>() -> Self {
        Self::select(TypeId::of::<T>() == TypeId::of::<R>(), T::CLASS, R::CLASS)
    }
}

/// Convert one lane.
pub fn convert_scalar<T: Element, R: Element>(value: T, mode: RoundingMode) -> Result<R, VecError> {
    let mut out = [R::ZERO];
    convert_lanes(&[value], &mut out, mode)?;
    Ok(out[0])
}

/// Convert `src` lane by lane into `dst`.
///
/// Both slices must have the same length. On error `dst` may be partially
/// written; callers discard it.
pub fn convert_lanes<T: Element, R: Element>(
    src: &[T],
    dst: &mut [R],
    mode: RoundingMode,
) -> Result<(), VecError> {
    debug_assert_eq!(src.len(), dst.len());

    match ConversionPath::of::<T, R>() {
        ConversionPath::Identity => {
            for (out, lane) in dst.iter_mut().zip(src) {
                if let Some(same) = (lane as &dyn Any).downcast_ref::<R>() {
                    *out = *same;
                }
            }
        }
        ConversionPath::IntToInt | ConversionPath::IntToFloat => {
            for (out, lane) in dst.iter_mut().zip(src) {
                *out = R::from_i128(lane.to_i128());
            }
        }
        ConversionPath::FloatToFloat | ConversionPath::Fallback => {
            for (out, lane) in dst.iter_mut().zip(src) {
                *out = R::from_f64(lane.to_f64());
            }
        }
        ConversionPath::FloatToInt if mode.is_nearest_even() => {
            let guard = RoundingGuard::nearest_even()?;
            for (out, lane) in dst.iter_mut().zip(src) {
                *out = R::from_f64(guard.rint(lane.to_f64()));
            }
            guard.restore()?;
        }
        ConversionPath::FloatToInt => {
            for (out, lane) in dst.iter_mut().zip(src) {
                *out = R::from_f64(rounding::round(lane.to_f64(), mode)?);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::Bool;
    use crate::half::Half;

    #[test]
    fn test_path_selection() {
        assert_eq!(ConversionPath::of::<i32, i32>(), ConversionPath::Identity);
        assert_eq!(ConversionPath::of::<i32, u8>(), ConversionPath::IntToInt);
        assert_eq!(ConversionPath::of::<Bool, i32>(), ConversionPath::IntToInt);
        assert_eq!(ConversionPath::of::<u16, f32>(), ConversionPath::IntToFloat);
        assert_eq!(ConversionPath::of::<f64, Half>(), ConversionPath::FloatToFloat);
        assert_eq!(ConversionPath::of::<f32, i64>(), ConversionPath::FloatToInt);
        assert_eq!(
            ConversionPath::select(false, ElementClass::empty(), ElementClass::empty()),
            ConversionPath::Fallback
        );
    }

    #[test]
    fn test_identity_keeps_nan_bits() {
        let nan = f32::from_bits(0x7FC0_1234);
        let out: f32 = convert_scalar(nan, RoundingMode::TowardZero).unwrap();
        assert_eq!(out.to_bits(), 0x7FC0_1234);
    }

    #[test]
    fn test_float_to_int_modes() {
        let rtz: i32 = convert_scalar(2.7f32, RoundingMode::TowardZero).unwrap();
        let rtz_neg: i32 = convert_scalar(-2.7f32, RoundingMode::TowardZero).unwrap();
        let rtp: i32 = convert_scalar(2.1f64, RoundingMode::TowardPositiveInfinity).unwrap();
        let rtn: i32 = convert_scalar(2.9f64, RoundingMode::TowardNegativeInfinity).unwrap();
        let rte_down: i32 = convert_scalar(2.5f32, RoundingMode::NearestEven).unwrap();
        let rte_up: i32 = convert_scalar(3.5f32, RoundingMode::Automatic).unwrap();
        assert_eq!((rtz, rtz_neg, rtp, rtn, rte_down, rte_up), (2, -2, 3, 2, 2, 4));
    }

    #[test]
    fn test_integer_narrowing_wraps() {
        let out: u8 = convert_scalar(300i32, RoundingMode::Automatic).unwrap();
        assert_eq!(out, 44);
        let out: i8 = convert_scalar(255u8, RoundingMode::Automatic).unwrap();
        assert_eq!(out, -1);
    }

    #[test]
    fn test_bool_conversions() {
        let out: Bool = convert_scalar(7i32, RoundingMode::Automatic).unwrap();
        assert_eq!(out, Bool::TRUE);
        let out: f32 = convert_scalar(Bool::from_bits(-3), RoundingMode::Automatic).unwrap();
        assert_eq!(out, 1.0);
    }

    #[test]
    fn test_half_conversions() {
        let out: Half = convert_scalar(1.5f32, RoundingMode::Automatic).unwrap();
        assert_eq!(out.to_f32(), 1.5);
        let out: i16 = convert_scalar(Half::from_f32(-3.5), RoundingMode::NearestEven).unwrap();
        assert_eq!(out, -4);
    }
}
