//! Demo animations.
//!
//! Purely cosmetic; nothing here affects the rest of the frame.

mod iris;

pub use iris::{IrisAnimation, IrisStep};
