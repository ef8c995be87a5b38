//! # Storage Layout Table
//!
//! Maps an element classification and lane count to the representation a
//! vector is stored in and the representation used when the whole vector takes
//! part in one wide operation.
//!
//! ## Mapping
//!
//! | Element | Lanes stored as | Wide access |
//! |---------|-----------------|-------------|
//! | signed / unsigned integers | same | when the vector fits a register |
//! | `Bool` | signed integer of the same size | when the vector fits a register |
//! | `f32` / `f64` | same | when the vector fits a register |
//! | `Half` | binary16 | only with native half support, otherwise array |
//!
//! A 3-lane vector stores 4 lanes, so `byte_size = size * (N == 3 ? 4 : N)`.
//! The table is keyed by size class rather than by concrete type: every
//! element of the same class and size shares one layout. The reported
//! alignment is the lane's natural alignment; [`Vector::layout`] reports
//! the alignment of the Rust type itself.
//!
//! [`Vector::layout`]: crate::Vector::layout

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementClass};
use crate::error::VecError;
use crate::lanes::{adjusted_lanes, is_supported};
use crate::platform::{PlatformCaps, PLATFORM};

/// Element size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Bytes1,
    Bytes2,
    Bytes4,
    Bytes8,
}

impl SizeClass {
    /// Size class of an element type.
    pub fn of<T: Element>() -> Self {
        // Element sizes are always 1, 2, 4 or 8.
        match T::SIZE {
            1 => Self::Bytes1,
            2 => Self::Bytes2,
            4 => Self::Bytes4,
            _ => Self::Bytes8,
        }
    }

    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Bytes1 => 1,
            Self::Bytes2 => 2,
            Self::Bytes4 => 4,
            Self::Bytes8 => 8,
        }
    }
}

/// How lanes are physically represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneRepr {
    SignedInt,
    UnsignedInt,
    Float,
    Half,
}

/// Representation used when a whole vector takes part in one operation.
///
/// This is an optimisation hint only; results never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLayout {
    /// One native register of the given width holds the vector.
    Wide { register_bytes: usize },
    /// Lanes are processed one at a time.
    Array,
}

/// Layout descriptor for one (element class, size, lane count) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageLayout {
    pub repr: LaneRepr,
    pub size_class: SizeClass,
    /// Logical lane count.
    pub lanes: usize,
    /// Lanes physically stored.
    pub data_lanes: usize,
    pub byte_size: usize,
    /// Alignment of the backing storage: that of one lane. Vectors are
    /// arrays of lanes and never ask for more.
    pub align: usize,
    pub access: AccessLayout,
}

/// Bytes occupied by `lanes` lanes of `elem_bytes` bytes each.
#[inline]
pub const fn byte_size(elem_bytes: usize, lanes: usize) -> usize {
    elem_bytes * adjusted_lanes(lanes)
}

/// Look up a layout for the detected platform.
pub fn layout_of(
    class: ElementClass,
    size_class: SizeClass,
    lanes: usize,
) -> Result<StorageLayout, VecError> {
    layout_with(&PLATFORM, class, size_class, lanes)
}

/// Look up the layout of `lanes` lanes of `T` for the detected platform.
pub fn layout_for<T: Element>(lanes: usize) -> Result<StorageLayout, VecError> {
    layout_of(T::CLASS, SizeClass::of::<T>(), lanes)
}

/// Look up a layout for an explicit set of platform capabilities.
pub fn layout_with(
    caps: &PlatformCaps,
    class: ElementClass,
    size_class: SizeClass,
    lanes: usize,
) -> Result<StorageLayout, VecError> {
    if !is_supported(lanes) {
        return Err(VecError::UnsupportedLanes(lanes));
    }
    Ok(describe(caps, class, size_class, lanes))
}

/// Layout of a lane count already known to be supported.
pub(crate) fn describe(
    caps: &PlatformCaps,
    class: ElementClass,
    size_class: SizeClass,
    lanes: usize,
) -> StorageLayout {
    let repr = if class.is_half() {
        LaneRepr::Half
    } else if class.is_floating() {
        LaneRepr::Float
    } else if class.is_signed() || class.is_boolean() {
        LaneRepr::SignedInt
    } else {
        LaneRepr::UnsignedInt
    };

    let data_lanes = adjusted_lanes(lanes);
    let bytes = byte_size(size_class.bytes(), lanes);

    let narrow_float_fallback = repr == LaneRepr::Half && !caps.native_half;
    let access = if lanes > 1
        && caps.register_bytes > 0
        && bytes <= caps.register_bytes
        && !narrow_float_fallback
    {
        AccessLayout::Wide {
            register_bytes: caps.register_bytes,
        }
    } else {
        AccessLayout::Array
    };

    StorageLayout {
        repr,
        size_class,
        lanes,
        data_lanes,
        byte_size: bytes,
        align: size_class.bytes(),
        access,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::Bool;
    use crate::half::Half;

    #[test]
    fn test_three_lanes_pad_to_four() {
        let layout = layout_with(&PlatformCaps::default(), f32::CLASS, SizeClass::Bytes4, 3).unwrap();
        assert_eq!(layout.lanes, 3);
        assert_eq!(layout.data_lanes, 4);
        assert_eq!(layout.byte_size, 16);
        assert_eq!(layout.align, 4);
    }

    #[test]
    fn test_bool_is_stored_as_signed_integer() {
        let layout = layout_for::<Bool>(4).unwrap();
        assert_eq!(layout.repr, LaneRepr::SignedInt);
        assert_eq!(layout.size_class, SizeClass::Bytes1);
    }

    #[test]
    fn test_half_without_native_support_uses_array() {
        let caps = PlatformCaps::default().with_native_half(false);
        let layout = layout_with(&caps, Half::CLASS, SizeClass::Bytes2, 4).unwrap();
        assert_eq!(layout.access, AccessLayout::Array);

        let caps = caps.with_native_half(true);
        let layout = layout_with(&caps, Half::CLASS, SizeClass::Bytes2, 4).unwrap();
        assert_eq!(layout.access, AccessLayout::Wide { register_bytes: 16 });
    }

    #[test]
    fn test_oversized_vectors_use_array() {
        let caps = PlatformCaps::default();
        let layout = layout_with(&caps, f64::CLASS, SizeClass::Bytes8, 16).unwrap();
        assert_eq!(layout.byte_size, 128);
        assert_eq!(layout.align, 8);
        assert_eq!(layout.access, AccessLayout::Array);
    }

    #[test]
    fn test_unsupported_lane_count() {
        assert_eq!(layout_for::<i32>(5), Err(VecError::UnsupportedLanes(5)));
    }
}
