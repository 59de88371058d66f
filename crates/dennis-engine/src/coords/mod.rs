//! Coordinate and geometry types shared across painters and the runtime.
//!
//! Canonical CPU space:
//! - Physical pixels (one unit = one backbuffer pixel)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod viewport;

pub use rect::Rect;
pub use viewport::Viewport;
