//! Named lane accessors.
//!
//! Each accessor exists only on the lane counts it is meaningful for, so
//! `.w()` on a 2-lane vector is a compile error rather than a bad index.
//!
//! | Lanes | Letters | Groups |
//! |-------|---------|--------|
//! | 1 | `x r s0` | |
//! | 2 | `x y`, `r g`, `s0 s1` | `lo hi even odd`, `xy yx` |
//! | 3 | `x y z`, `r g b`, `s0..s2` | `lo=[0,1] hi=[2] even=[0,2] odd=[1]`, `xy yx xyz zyx` |
//! | 4 | `x y z w`, `r g b a`, `s0..s3` | `lo hi even odd`, `xy yx zw xyz zyx xyzw wzyx rgb rgba bgra` |
//! | 8 | `s0..s7` | `lo hi even odd` |
//! | 16 | `s0..s9 sa..sf` | `lo hi even odd` |

use crate::element::Element;
use crate::vector::Vector;

use super::{ConstSwizzle, Swizzle};

macro_rules! named_accessors {
    ($n:literal { $($name:ident / $name_mut:ident => [$($index:literal),+; $k:literal]),* $(,)? }) => {
        impl<T: Element> Vector<T, $n> {
            $(
                #[doc = concat!("View of lanes `", stringify!([$($index),+]), "`.")]
                #[inline]
                pub fn $name(&self) -> ConstSwizzle<'_, T, $k> {
                    self.swizzle([$($index),+])
                }

                #[doc = concat!("Writable view of lanes `", stringify!([$($index),+]), "`.")]
                #[inline]
                pub fn $name_mut(&mut self) -> Swizzle<'_, T, $k> {
                    self.swizzle_mut([$($index),+])
                }
            )*
        }
    };
}

named_accessors!(1 {
    x / x_mut => [0; 1],
    r / r_mut => [0; 1],
    s0 / s0_mut => [0; 1],
});

named_accessors!(2 {
    x / x_mut => [0; 1],
    y / y_mut => [1; 1],
    r / r_mut => [0; 1],
    g / g_mut => [1; 1],
    s0 / s0_mut => [0; 1],
    s1 / s1_mut => [1; 1],
    lo / lo_mut => [0; 1],
    hi / hi_mut => [1; 1],
    even / even_mut => [0; 1],
    odd / odd_mut => [1; 1],
    xy / xy_mut => [0, 1; 2],
    yx / yx_mut => [1, 0; 2],
});

named_accessors!(3 {
    x / x_mut => [0; 1],
    y / y_mut => [1; 1],
    z / z_mut => [2; 1],
    r / r_mut => [0; 1],
    g / g_mut => [1; 1],
    b / b_mut => [2; 1],
    s0 / s0_mut => [0; 1],
    s1 / s1_mut => [1; 1],
    s2 / s2_mut => [2; 1],
    lo / lo_mut => [0, 1; 2],
    hi / hi_mut => [2; 1],
    even / even_mut => [0, 2; 2],
    odd / odd_mut => [1; 1],
    xy / xy_mut => [0, 1; 2],
    yx / yx_mut => [1, 0; 2],
    xyz / xyz_mut => [0, 1, 2; 3],
    zyx / zyx_mut => [2, 1, 0; 3],
});

named_accessors!(4 {
    x / x_mut => [0; 1],
    y / y_mut => [1; 1],
    z / z_mut => [2; 1],
    w / w_mut => [3; 1],
    r / r_mut => [0; 1],
    g / g_mut => [1; 1],
    b / b_mut => [2; 1],
    a / a_mut => [3; 1],
    s0 / s0_mut => [0; 1],
    s1 / s1_mut => [1; 1],
    s2 / s2_mut => [2; 1],
    s3 / s3_mut => [3; 1],
    lo / lo_mut => [0, 1; 2],
    hi / hi_mut => [2, 3; 2],
    even / even_mut => [0, 2; 2],
    odd / odd_mut => [1, 3; 2],
    xy / xy_mut => [0, 1; 2],
    yx / yx_mut => [1, 0; 2],
    zw / zw_mut => [2, 3; 2],
    xyz / xyz_mut => [0, 1, 2; 3],
    zyx / zyx_mut => [2, 1, 0; 3],
    xyzw / xyzw_mut => [0, 1, 2, 3; 4],
    wzyx / wzyx_mut => [3, 2, 1, 0; 4],
    rgb / rgb_mut => [0, 1, 2; 3],
    rgba / rgba_mut => [0, 1, 2, 3; 4],
    bgra / bgra_mut => [2, 1, 0, 3; 4],
});

named_accessors!(8 {
    s0 / s0_mut => [0; 1],
    s1 / s1_mut => [1; 1],
    s2 / s2_mut => [2; 1],
    s3 / s3_mut => [3; 1],
    s4 / s4_mut => [4; 1],
    s5 / s5_mut => [5; 1],
    s6 / s6_mut => [6; 1],
    s7 / s7_mut => [7; 1],
    lo / lo_mut => [0, 1, 2, 3; 4],
    hi / hi_mut => [4, 5, 6, 7; 4],
    even / even_mut => [0, 2, 4, 6; 4],
    odd / odd_mut => [1, 3, 5, 7; 4],
});

named_accessors!(16 {
    s0 / s0_mut => [0; 1],
    s1 / s1_mut => [1; 1],
    s2 / s2_mut => [2; 1],
    s3 / s3_mut => [3; 1],
    s4 / s4_mut => [4; 1],
    s5 / s5_mut => [5; 1],
    s6 / s6_mut => [6; 1],
    s7 / s7_mut => [7; 1],
    s8 / s8_mut => [8; 1],
    s9 / s9_mut => [9; 1],
    sa / sa_mut => [10; 1],
    sb / sb_mut => [11; 1],
    sc / sc_mut => [12; 1],
    sd / sd_mut => [13; 1],
    se / se_mut => [14; 1],
    sf / sf_mut => [15; 1],
    lo / lo_mut => [0, 1, 2, 3, 4, 5, 6, 7; 8],
    hi / hi_mut => [8, 9, 10, 11, 12, 13, 14, 15; 8],
    even / even_mut => [0, 2, 4, 6, 8, 10, 12, 14; 8],
    odd / odd_mut => [1, 3, 5, 7, 9, 11, 13, 15; 8],
});
