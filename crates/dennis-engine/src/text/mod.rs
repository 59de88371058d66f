//! Bitmap text.
//!
//! A [`GlyphAtlas`] is one image holding the printable ASCII range in
//! fixed-width cells; [`draw_text`] blits one cell per character.

mod atlas;
mod painter;

pub use atlas::{AtlasError, GlyphAtlas, CELL_WIDTH, FIRST_GLYPH, LAST_GLYPH};
pub use painter::draw_text;
