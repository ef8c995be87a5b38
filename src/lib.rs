//! # Swizzle Vec
//!
//! Fixed-width numeric vectors with borrowed, lazily composed swizzle views.
//!
//! ## Design Philosophy
//!
//! **The lane count is part of the type.**
//!
//! - `Vector<f32, 4>`: four `f32` lanes, 16 bytes
//! - `Vector<f32, 3>`: three logical lanes stored in four, also 16 bytes
//! - `Vector<u8, 16>`: sixteen bytes
//!
//! Only 1, 2, 3, 4, 8 and 16 lanes exist. Constructor lane sums, byte sizes
//! for reinterpretation and named accessors are checked when the program is
//! compiled; the `try_*` spellings check at run time and return
//! [`VecError`] instead.
//!
//! ## Example
//!
//! ```
//! use swizzle_vec::{RoundingMode, Vector};
//!
//! let mut v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
//! let picked = v.swizzle([3, 1]).to_vector();
//! assert_eq!(picked.to_array(), [4, 2]);
//!
//! v.swizzle_mut([3, 1]).assign([9, 8]);
//! assert_eq!(v.to_array(), [1, 8, 3, 9]);
//!
//! let f = Vector::<f32, 2>::from_array([2.5, 3.5]);
//! let rounded = f.convert::<i32>(RoundingMode::NearestEven).unwrap();
//! assert_eq!(rounded.to_array(), [2, 4]);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]

pub mod boolean;
/// Multi-argument construction.
pub mod concat;
/// Element-wise conversion between element types.
pub mod convert;
pub mod element;
pub mod error;
pub mod half;
pub mod lanes;
/// Operators and relational methods.
pub mod ops;
pub mod platform;
pub mod rounding;
/// Storage layout descriptors.
pub mod storage;
/// Swizzle views and lazy expressions.
pub mod swizzle;
pub mod vector;

pub use boolean::Bool;
pub use concat::{LaneArgs, Part};
pub use convert::{convert_lanes, convert_scalar, ConversionPath};
pub use element::{Arith, Bitwise, Element, ElementClass, IntElement, RelElement};
pub use error::VecError;
pub use half::Half;
pub use lanes::{Lanes, SupportedLanes};
pub use ops::{BinOp, LaneSource};
pub use platform::{PlatformCaps, PLATFORM};
pub use rounding::RoundingMode;
pub use storage::{layout_for, layout_of, layout_with, AccessLayout, LaneRepr, SizeClass, StorageLayout};
pub use swizzle::{ConstSwizzle, Expr, IntoExpr, Swizzle};
pub use vector::Vector;
