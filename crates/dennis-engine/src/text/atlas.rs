use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::coords::Rect;

/// Width of every glyph cell, in atlas pixels.
pub const CELL_WIDTH: u32 = 12;

/// First character stored in the atlas (column 0).
pub const FIRST_GLYPH: char = ' ';

/// Last character stored in the atlas.
pub const LAST_GLYPH: char = '~';

/// Error returned by [`GlyphAtlas::load`].
#[derive(Debug)]
pub struct AtlasError {
    pub path: PathBuf,
    pub source: image::ImageError,
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load glyph atlas {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Immutable glyph atlas.
///
/// Layout: a single row of `CELL_WIDTH`-wide cells, the cell for character
/// `c` starting at `x = (c - ' ') * CELL_WIDTH`. Cells span the full image
/// height. The image is decoded once and kept in RGBA8 for blitting.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    image: RgbaImage,
}

impl GlyphAtlas {
    /// Decodes an atlas image from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| AtlasError { path: path.to_path_buf(), source })?
            .to_rgba8();

        let atlas = Self::from_image(image);
        log::info!(
            "glyph atlas loaded from {}: {}x{} px, {} cells",
            path.display(),
            atlas.image.width(),
            atlas.image.height(),
            atlas.cell_count(),
        );
        if atlas.cell_count() < glyph_count() {
            log::warn!(
                "glyph atlas {} holds {} of {} printable cells; the rest will not draw",
                path.display(),
                atlas.cell_count(),
                glyph_count(),
            );
        }
        Ok(atlas)
    }

    /// Wraps an already decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Height of every cell (the image height).
    #[inline]
    pub fn cell_height(&self) -> u32 {
        self.image.height()
    }

    /// Number of complete cells present in the image.
    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.image.width() / CELL_WIDTH
    }

    /// Source rectangle for `ch`.
    ///
    /// `None` for characters outside `' '..='~'` and for characters whose
    /// cell lies past the right edge of the image.
    pub fn glyph_rect(&self, ch: char) -> Option<Rect> {
        if !(FIRST_GLYPH..=LAST_GLYPH).contains(&ch) {
            return None;
        }

        let column = ch as u32 - FIRST_GLYPH as u32;
        if column >= self.cell_count() || self.cell_height() == 0 {
            return None;
        }

        Some(Rect::new(
            (column * CELL_WIDTH) as i32,
            0,
            CELL_WIDTH as i32,
            self.cell_height() as i32,
        ))
    }
}

#[inline]
fn glyph_count() -> u32 {
    LAST_GLYPH as u32 - FIRST_GLYPH as u32 + 1
}
