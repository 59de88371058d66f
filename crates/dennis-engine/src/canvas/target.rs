use image::RgbaImage;

use crate::coords::Rect;
use crate::paint::Rgba8;

/// Primitive drawing operations available to painters.
///
/// Implementations clip every operation to their own bounds; callers may pass
/// rectangles that lie partly or wholly outside.
pub trait DrawTarget {
    /// Writes a horizontal span covering `[x, x + w)` on row `y`.
    fn draw_hline(&mut self, x: i32, y: i32, w: i32, color: Rgba8);

    /// Overwrites every pixel of `rect` with `color` (no blending).
    fn fill_rect(&mut self, rect: Rect, color: Rgba8);

    /// Nearest-neighbour stretch of `src_rect` from `src` into `dst_rect`,
    /// composited source-over.
    fn blit(&mut self, src: &RgbaImage, src_rect: Rect, dst_rect: Rect);
}
