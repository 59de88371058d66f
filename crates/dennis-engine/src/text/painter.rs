use crate::canvas::DrawTarget;
use crate::coords::Rect;

use super::{GlyphAtlas, CELL_WIDTH};

/// Draws `text` on a single row starting at `(x, y)`, each cell scaled by
/// `scale`.
///
/// Character `i` lands at `x + i * CELL_WIDTH * scale`. Characters the atlas
/// has no cell for are skipped but still take up their slot. Drawing stops
/// where the pen would leave the `i32` range, and a `scale` whose cell size
/// does not fit in it draws nothing. Returns the number of glyphs blitted.
pub fn draw_text<T>(target: &mut T, atlas: &GlyphAtlas, text: &str, x: i32, y: i32, scale: u32) -> usize
where
    T: DrawTarget + ?Sized,
{
    if scale == 0 {
        return 0;
    }

    let (Some(advance), Some(dst_h)) = (scaled(CELL_WIDTH, scale), scaled(atlas.cell_height(), scale))
    else {
        log::debug!("draw_text: scale {scale} does not fit in pixel coordinates");
        return 0;
    };
    let mut drawn = 0;

    for (i, ch) in text.chars().enumerate() {
        // Past i32::MAX nothing further can be on screen.
        let Some(pen_x) = i32::try_from(i)
            .ok()
            .and_then(|i| i.checked_mul(advance))
            .and_then(|offset| x.checked_add(offset))
        else {
            break;
        };

        let Some(src) = atlas.glyph_rect(ch) else {
            log::debug!("draw_text: no glyph for {ch:?} at index {i}, skipped");
            continue;
        };

        let dst = Rect::new(pen_x, y, advance, dst_h);
        target.blit(atlas.image(), src, dst);
        drawn += 1;
    }

    drawn
}

/// `len * scale` as a pixel extent, if it fits in `i32`.
fn scaled(len: u32, scale: u32) -> Option<i32> {
    len.checked_mul(scale).and_then(|v| i32::try_from(v).ok())
}
