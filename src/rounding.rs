//! Rounding modes for float-to-integer conversion, and scoped control of the
//! floating-point environment's rounding direction.

use libc::c_int;
use log::{error, trace};
use serde::{Deserialize, Serialize};

use crate::error::VecError;

/// How a floating value is mapped to an integer during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Same as [`RoundingMode::NearestEven`].
    #[default]
    Automatic,
    /// Round half to even.
    NearestEven,
    /// Truncate.
    TowardZero,
    /// Ceiling.
    TowardPositiveInfinity,
    /// Floor.
    TowardNegativeInfinity,
}

impl RoundingMode {
    /// Whether this mode is computed under the nearest-even environment.
    #[inline]
    pub fn is_nearest_even(self) -> bool {
        matches!(self, Self::Automatic | Self::NearestEven)
    }
}

mod fenv {
    use libc::c_int;

    // FE_TONEAREST is zero on every libc this crate targets.
    pub const FE_TONEAREST: c_int = 0;

    extern "C" {
        pub fn fegetround() -> c_int;
        pub fn fesetround(round: c_int) -> c_int;
        pub fn rint(x: f64) -> f64;
    }
}

/// Holds the environment at round-to-nearest-even until restored or dropped.
///
/// The previous rounding direction is put back by [`RoundingGuard::restore`],
/// or by `Drop` if the guarded computation unwinds first.
pub struct RoundingGuard {
    previous: c_int,
    restored: bool,
}

impl RoundingGuard {
    /// Switch the environment to round-to-nearest-even.
    pub fn nearest_even() -> Result<Self, VecError> {
        // SAFETY: fegetround has no preconditions.
        let previous = unsafe { fenv::fegetround() };
        if previous < 0 {
            return Err(VecError::RoundingModeQuery(previous));
        }
        // SAFETY: FE_TONEAREST is a valid rounding direction.
        let status = unsafe { fenv::fesetround(fenv::FE_TONEAREST) };
        if status != 0 {
            return Err(VecError::RoundingModeSet(status));
        }
        trace!("rounding mode {:#x} -> nearest-even", previous);
        Ok(Self {
            previous,
            restored: false,
        })
    }

    /// Round to an integral value using the current (nearest-even) direction.
    #[inline]
    pub fn rint(&self, value: f64) -> f64 {
        // SAFETY: rint is a pure libm function.
        unsafe { fenv::rint(value) }
    }

    /// Put the previous rounding direction back.
    pub fn restore(mut self) -> Result<(), VecError> {
        self.restored = true;
        // SAFETY: `previous` was returned by fegetround.
        let status = unsafe { fenv::fesetround(self.previous) };
        if status != 0 {
            return Err(VecError::RoundingModeRestore(status));
        }
        trace!("rounding mode restored to {:#x}", self.previous);
        Ok(())
    }
}

impl Drop for RoundingGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // SAFETY: `previous` was returned by fegetround.
        let status = unsafe { fenv::fesetround(self.previous) };
        if status != 0 {
            error!("Unable to restore rounding mode {:#x} (status {})", self.previous, status);
        }
    }
}

/// Round `value` to an integral value according to `mode`.
pub fn round(value: f64, mode: RoundingMode) -> Result<f64, VecError> {
    match mode {
        RoundingMode::Automatic | RoundingMode::NearestEven => {
            let guard = RoundingGuard::nearest_even()?;
            let rounded = guard.rint(value);
            guard.restore()?;
            Ok(rounded)
        }
        RoundingMode::TowardZero => Ok(value.trunc()),
        RoundingMode::TowardPositiveInfinity => Ok(value.ceil()),
        RoundingMode::TowardNegativeInfinity => Ok(value.floor()),
    }
}
