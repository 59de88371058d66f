//! Paint model and fill painters.
//!
//! Scope:
//! - color representation (straight-alpha 8-bit RGBA)
//! - the vertical black-to-color gradient
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Rgba8;
pub use gradient::{draw_gradient, gradient_row_color};
