//! Vertical black-to-color gradient.

use crate::canvas::DrawTarget;
use crate::coords::Rect;

use super::Rgba8;

/// Color of row `row` in a gradient of `height` rows ending at `target`.
///
/// Each channel is `target * row / height` with integer truncation; alpha is
/// always 255. Callers guarantee `height > 0`.
#[inline]
pub fn gradient_row_color(row: i32, height: i32, target: Rgba8) -> Rgba8 {
    debug_assert!(height > 0);
    let lerp = |c: u8| (c as i64 * row as i64 / height as i64) as u8;
    Rgba8::opaque(lerp(target.r), lerp(target.g), lerp(target.b))
}

/// Fills `rect` with a vertical fade from black (top row) to `target`
/// (bottom row), one horizontal span per row.
///
/// Empty rectangles (`w <= 0` or `h <= 0`) draw nothing.
pub fn draw_gradient<T>(target: &mut T, rect: Rect, color: Rgba8)
where
    T: DrawTarget + ?Sized,
{
    if rect.is_empty() {
        return;
    }

    for i in 0..rect.h {
        let Some(y) = rect.y.checked_add(i) else { break };
        let row_color = gradient_row_color(i, rect.h, color);
        target.draw_hline(rect.x, y, rect.w, row_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn first_row_is_black() {
        assert_eq!(gradient_row_color(0, 480, Rgba8::opaque(255, 128, 7)), Rgba8::BLACK);
    }

    #[test]
    fn rows_truncate_toward_zero() {
        let target = Rgba8::opaque(0, 0, 255);
        assert_eq!(gradient_row_color(1, 3, target), Rgba8::opaque(0, 0, 85));
        // 255 * 2 / 3 = 170
        assert_eq!(gradient_row_color(2, 3, target), Rgba8::opaque(0, 0, 170));
    }

    #[test]
    fn last_row_approaches_target() {
        let c = gradient_row_color(99, 100, Rgba8::opaque(200, 100, 50));
        assert_eq!(c, Rgba8::opaque(198, 99, 49));
    }

    #[test]
    fn every_row_matches_formula() {
        let target = Rgba8::opaque(17, 230, 99);
        let mut canvas = Canvas::new(8, 37);
        draw_gradient(&mut canvas, Rect::new(0, 0, 8, 37), target);

        for i in 0..37u32 {
            let expect = Rgba8::opaque(
                (17 * i / 37) as u8,
                (230 * i / 37) as u8,
                (99 * i / 37) as u8,
            );
            assert_eq!(canvas.pixel(0, i), Some(expect), "row {i}");
            assert_eq!(canvas.pixel(7, i), Some(expect), "row {i}");
        }
    }

    #[test]
    fn span_is_half_open() {
        let mut canvas = Canvas::new(10, 4);
        draw_gradient(&mut canvas, Rect::new(2, 0, 3, 4), Rgba8::opaque(0, 255, 0));

        assert_eq!(canvas.pixel(1, 3), Some(Rgba8::BLACK));
        assert_eq!(canvas.pixel(4, 3), Some(Rgba8::opaque(0, 191, 0)));
        assert_eq!(canvas.pixel(5, 3), Some(Rgba8::BLACK));
    }

    #[test]
    fn zero_height_is_a_no_op() {
        let mut canvas = Canvas::new(4, 4);
        canvas.clear(Rgba8::opaque(9, 9, 9));
        draw_gradient(&mut canvas, Rect::new(0, 0, 4, 0), Rgba8::opaque(255, 255, 255));
        draw_gradient(&mut canvas, Rect::new(0, 0, 0, 4), Rgba8::opaque(255, 255, 255));
        assert_eq!(canvas.pixel(0, 0), Some(Rgba8::opaque(9, 9, 9)));
    }

    #[test]
    fn offset_rect_is_clipped_to_canvas() {
        let mut canvas = Canvas::new(4, 4);
        draw_gradient(&mut canvas, Rect::new(-2, 2, 10, 10), Rgba8::opaque(100, 0, 0));
        // Row index 1 of the gradient lands on canvas row 3.
        assert_eq!(canvas.pixel(0, 3), Some(Rgba8::opaque(10, 0, 0)));
        assert_eq!(canvas.pixel(0, 1), Some(Rgba8::BLACK));
    }

    #[derive(Default)]
    struct Rows(Vec<(i32, Rgba8)>);

    impl DrawTarget for Rows {
        fn draw_hline(&mut self, _x: i32, y: i32, _w: i32, color: Rgba8) {
            self.0.push((y, color));
        }
        fn fill_rect(&mut self, _rect: Rect, _color: Rgba8) {}
        fn blit(&mut self, _src: &image::RgbaImage, _src_rect: Rect, _dst_rect: Rect) {}
    }

    #[test]
    fn rows_past_the_coordinate_limit_are_dropped() {
        let mut rows = Rows::default();
        draw_gradient(&mut rows, Rect::new(0, i32::MAX - 1, 4, 4), Rgba8::opaque(0, 0, 200));

        assert_eq!(
            rows.0,
            vec![(i32::MAX - 1, Rgba8::BLACK), (i32::MAX, Rgba8::opaque(0, 0, 50))]
        );

        let mut canvas = Canvas::new(4, 4);
        draw_gradient(&mut canvas, Rect::new(i32::MAX - 2, i32::MAX - 1, 4, 4), Rgba8::opaque(0, 0, 200));
        assert_eq!(canvas.pixel(0, 0), Some(Rgba8::BLACK));
    }
}
