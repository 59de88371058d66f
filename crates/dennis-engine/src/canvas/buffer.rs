use image::RgbaImage;

use crate::coords::Rect;
use crate::paint::Rgba8;

use super::DrawTarget;

/// RGBA8 pixel buffer the frame is painted into before presentation.
///
/// Rows are tightly packed, top row first. A freshly created or resized
/// canvas is opaque black.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![Rgba8::BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Reallocates for a new size and clears to black.
    ///
    /// Zero dimensions are clamped to 1. A same-size resize only clears.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            self.clear(Rgba8::BLACK);
            return;
        }

        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, Rgba8::BLACK);
    }

    pub fn clear(&mut self, color: Rgba8) {
        self.pixels.fill(color);
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x as i32, y as i32)).copied()
    }

    /// Raw RGBA bytes, row-major, `4 * width` bytes per row.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn row_span_mut(&mut self, y: i32, x0: i32, x1: i32) -> &mut [Rgba8] {
        let start = self.index(x0, y);
        let end = self.index(x1, y);
        &mut self.pixels[start..end]
    }
}

impl DrawTarget for Canvas {
    fn draw_hline(&mut self, x: i32, y: i32, w: i32, color: Rgba8) {
        self.fill_rect(Rect::new(x, y, w, 1), color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        let Some(r) = rect.intersect(self.bounds()) else { return };

        for y in r.y..r.bottom() {
            self.row_span_mut(y, r.x, r.right()).fill(color);
        }
    }

    fn blit(&mut self, src: &RgbaImage, src_rect: Rect, dst_rect: Rect) {
        let (src_w, src_h) = src.dimensions();
        let src_bounds = Rect::new(0, 0, src_w as i32, src_h as i32);

        // The source rect must lie inside the image; a partial cell would
        // sample outside it.
        if src_rect.intersect(src_bounds) != Some(src_rect) || dst_rect.is_empty() {
            return;
        }
        let Some(visible) = dst_rect.intersect(self.bounds()) else { return };

        let (sw, sh) = (src_rect.w as i64, src_rect.h as i64);
        let (dw, dh) = (dst_rect.w as i64, dst_rect.h as i64);

        for y in visible.y..visible.bottom() {
            let sy = src_rect.y as i64 + (y - dst_rect.y) as i64 * sh / dh;
            for x in visible.x..visible.right() {
                let sx = src_rect.x as i64 + (x - dst_rect.x) as i64 * sw / dw;
                let texel = Rgba8::from(src.get_pixel(sx as u32, sy as u32).0);
                let idx = self.index(x, y);
                self.pixels[idx] = texel.over(self.pixels[idx]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba8 = Rgba8::opaque(255, 0, 0);

    #[test]
    fn new_canvas_is_opaque_black() {
        let c = Canvas::new(3, 2);
        assert_eq!(c.as_bytes().len(), 3 * 2 * 4);
        assert_eq!(c.pixel(2, 1), Some(Rgba8::BLACK));
        assert_eq!(c.pixel(3, 0), None);
    }

    #[test]
    fn resize_clears_and_clamps() {
        let mut c = Canvas::new(4, 4);
        c.clear(RED);
        c.resize(0, 2);
        assert_eq!((c.width(), c.height()), (1, 2));
        assert_eq!(c.pixel(0, 1), Some(Rgba8::BLACK));
    }

    #[test]
    fn same_size_resize_still_clears() {
        let mut c = Canvas::new(2, 2);
        c.clear(RED);
        c.resize(2, 2);
        assert_eq!(c.pixel(1, 1), Some(Rgba8::BLACK));
    }

    #[test]
    fn hline_is_clipped() {
        let mut c = Canvas::new(4, 2);
        c.draw_hline(-3, 1, 5, RED);
        assert_eq!(c.pixel(0, 1), Some(RED));
        assert_eq!(c.pixel(1, 1), Some(RED));
        assert_eq!(c.pixel(2, 1), Some(Rgba8::BLACK));
        assert_eq!(c.pixel(0, 0), Some(Rgba8::BLACK));
    }

    #[test]
    fn fill_rect_writes_alpha_verbatim() {
        let mut c = Canvas::new(4, 4);
        let tinted = Rgba8::new(10, 20, 30, 40);
        c.fill_rect(Rect::new(1, 1, 2, 2), tinted);
        assert_eq!(c.pixel(1, 1), Some(tinted));
        assert_eq!(c.pixel(2, 2), Some(tinted));
        assert_eq!(c.pixel(3, 3), Some(Rgba8::BLACK));
    }

    #[test]
    fn fill_rect_ignores_empty_and_offscreen() {
        let mut c = Canvas::new(4, 4);
        c.fill_rect(Rect::new(1, 1, -2, 2), RED);
        c.fill_rect(Rect::new(10, 10, 2, 2), RED);
        assert!(c.as_bytes().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn blit_scales_with_nearest_neighbour() {
        // 2x1 source: left red, right green.
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        src.put_pixel(1, 0, Rgba([0, 255, 0, 255]));

        let mut c = Canvas::new(4, 2);
        c.blit(&src, Rect::new(0, 0, 2, 1), Rect::new(0, 0, 4, 2));

        assert_eq!(c.pixel(0, 0), Some(RED));
        assert_eq!(c.pixel(1, 1), Some(RED));
        assert_eq!(c.pixel(2, 0), Some(Rgba8::opaque(0, 255, 0)));
        assert_eq!(c.pixel(3, 1), Some(Rgba8::opaque(0, 255, 0)));
    }

    #[test]
    fn blit_blends_transparent_texels() {
        let src = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0]));
        let mut c = Canvas::new(1, 1);
        c.clear(RED);
        c.blit(&src, Rect::new(0, 0, 1, 1), Rect::new(0, 0, 1, 1));
        assert_eq!(c.pixel(0, 0), Some(RED));
    }

    #[test]
    fn blit_rejects_source_outside_image() {
        let src = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        let mut c = Canvas::new(2, 2);
        c.blit(&src, Rect::new(1, 0, 2, 2), Rect::new(0, 0, 2, 2));
        assert_eq!(c.pixel(0, 0), Some(Rgba8::BLACK));
    }
}
