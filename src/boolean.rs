//! Boolean scalar type for use as a vector element.
//!
//! `Bool` is one signed byte. `0` is false and any other bit pattern is
//! true. The byte is kept as written, so reinterpreting a vector of bytes as
//! `Bool` lanes and back returns the same bytes.
//!
//! Comparison, logical operators and conversions read the lane as a truth
//! value. Results are always the canonical `0` or `1`.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Boolean lane stored as a signed byte.
#[derive(Copy, Clone, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(from = "bool", into = "bool")]
pub struct Bool(i8);

impl Bool {
    pub const FALSE: Self = Self(0);
    pub const TRUE: Self = Self(1);

    #[inline(always)]
    pub const fn new(value: bool) -> Self {
        Self(value as i8)
    }

    /// Construct from the raw byte, keeping every bit.
    #[inline(always)]
    pub const fn from_bits(bits: i8) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> i8 {
        self.0
    }

    /// Truth value: anything but zero.
    #[inline(always)]
    pub const fn get(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool {
    #[inline(always)]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl From<Bool> for bool {
    #[inline(always)]
    fn from(value: Bool) -> Self {
        value.get()
    }
}

impl PartialEq for Bool {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for Bool {}

impl PartialOrd for Bool {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bool {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl Hash for Bool {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl fmt::Debug for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("false"),
            1 => f.write_str("true"),
            bits => write!(f, "true({bits:#04x})"),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}
