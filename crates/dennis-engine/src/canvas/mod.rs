//! CPU backbuffer and the drawing seam painters write through.
//!
//! Painters are generic over [`DrawTarget`]; the runtime hands them a
//! [`Canvas`], tests may hand them a recorder.

mod buffer;
mod target;

pub use buffer::Canvas;
pub use target::DrawTarget;
