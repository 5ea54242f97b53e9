//! Image dimension handling for formats.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Target box** | [`target_dimensions`], pure arithmetic over the flip rule |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Identify**: Reading source dimensions from image files
//!
//! No pixels are resized or written here; consumers take the target box and
//! the format's upload directory and do the work themselves.

mod calculations;
mod identify;

pub use calculations::{Dimensions, target_dimensions};
pub use identify::{ImagingError, identify};
