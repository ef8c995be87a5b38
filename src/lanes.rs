//! Lane counts a vector may have, and the backing array each one uses.

use core::fmt::Debug;

use crate::element::Element;

/// Type-level lane count.
pub struct Lanes<const N: usize>;

/// Implemented for the lane counts the vector type supports: 1, 2, 3, 4, 8
/// and 16.
///
/// A 3-lane vector is backed by a 4-lane array. The extra lane exists only
/// for size and alignment; it is never read through the logical API.
pub trait SupportedLanes: sealed::Sealed {
    /// Logical lane count.
    const LANES: usize;

    /// Lanes physically stored.
    const ADJUSTED: usize;

    /// Backing array for elements of type `T`.
    type Storage<T: Element>: Copy + Debug + AsRef<[T]> + AsMut<[T]>;

    /// Storage with every physical lane set to `value`.
    fn splat<T: Element>(value: T) -> Self::Storage<T>;
}

mod sealed {
    pub trait Sealed {}
}

/// Physical lane count for a logical lane count.
#[inline]
pub const fn adjusted_lanes(lanes: usize) -> usize {
    if lanes == 3 {
        4
    } else {
        lanes
    }
}

/// Whether `lanes` is a supported lane count.
#[inline]
pub const fn is_supported(lanes: usize) -> bool {
    matches!(lanes, 1 | 2 | 3 | 4 | 8 | 16)
}

macro_rules! impl_lanes {
    ($($n:literal => $adjusted:literal),* $(,)?) => {$(
        impl sealed::Sealed for Lanes<$n> {}

        impl SupportedLanes for Lanes<$n> {
            const LANES: usize = $n;
            const ADJUSTED: usize = $adjusted;
            type Storage<T: Element> = [T; $adjusted];

            #[inline(always)]
            fn splat<T: Element>(value: T) -> Self::Storage<T> {
                [value; $adjusted]
            }
        }
    )*};
}

impl_lanes! {
    1 => 1,
    2 => 2,
    3 => 4,
    4 => 4,
    8 => 8,
    16 => 16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjusted_lanes_pads_three() {
        assert_eq!(adjusted_lanes(3), 4);
        assert_eq!(<Lanes<3> as SupportedLanes>::ADJUSTED, 4);
        assert_eq!(<Lanes<3> as SupportedLanes>::LANES, 3);
        assert_eq!(<Lanes<8> as SupportedLanes>::ADJUSTED, 8);
    }

    #[test]
    fn test_supported_counts() {
        for n in [1, 2, 3, 4, 8, 16] {
            assert!(is_supported(n));
        }
        for n in [0, 5, 6, 7, 32] {
            assert!(!is_supported(n));
        }
    }
}
