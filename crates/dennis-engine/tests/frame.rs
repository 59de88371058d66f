//! Whole-frame drawing against a real backbuffer, without a window.

use dennis_engine::anim::IrisAnimation;
use dennis_engine::canvas::Canvas;
use dennis_engine::coords::{Rect, Viewport};
use dennis_engine::paint::{draw_gradient, Rgba8};
use dennis_engine::text::{draw_text, GlyphAtlas, CELL_WIDTH};
use image::{Rgba, RgbaImage};

#[test]
fn full_window_blue_gradient_midpoint() {
    let viewport = Viewport::new(640, 480);
    let mut canvas = Canvas::new(viewport.width(), viewport.height());

    draw_gradient(&mut canvas, Rect::new(0, 0, 640, 480), Rgba8::opaque(0, 0, 255));

    assert_eq!(canvas.pixel(0, 0), Some(Rgba8::BLACK));
    assert_eq!(canvas.pixel(320, 240), Some(Rgba8::new(0, 0, 127, 255)));
    assert_eq!(canvas.pixel(639, 479), Some(Rgba8::opaque(0, 0, 254)));
}

#[test]
fn text_over_gradient_keeps_transparent_background() {
    // '#' is a solid white cell, everything else fully transparent.
    let mut image = RgbaImage::new(CELL_WIDTH * 95, 8);
    let col = '#' as u32 - ' ' as u32;
    for y in 0..8 {
        for x in col * CELL_WIDTH..(col + 1) * CELL_WIDTH {
            image.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    let atlas = GlyphAtlas::from_image(image);

    let mut canvas = Canvas::new(100, 100);
    let bounds = canvas.bounds();
    draw_gradient(&mut canvas, bounds, Rgba8::opaque(0, 0, 200));
    let drawn = draw_text(&mut canvas, &atlas, " #", 10, 50, 2);

    assert_eq!(drawn, 2);
    // Space cell: gradient shows through.
    assert_eq!(canvas.pixel(15, 60), Some(Rgba8::opaque(0, 0, 120)));
    // '#' cell at x = 10 + 24.
    assert_eq!(canvas.pixel(34, 50), Some(Rgba8::opaque(255, 255, 255)));
    assert_eq!(canvas.pixel(57, 65), Some(Rgba8::opaque(255, 255, 255)));
    assert_eq!(canvas.pixel(58, 65), Some(Rgba8::opaque(0, 0, 130)));
}

#[test]
fn iris_restarts_with_new_cycle_after_collapse() {
    let viewport = Viewport::new(40, 20);
    let mut canvas = Canvas::new(40, 20);
    let mut iris = IrisAnimation::with_seed(2024);

    // 20 px tall: c = 0..=4 are drawable, c = 5 collapses.
    let resets: Vec<bool> = (0..7).map(|_| iris.step(&mut canvas, viewport).reset).collect();
    assert_eq!(resets, vec![false, false, false, false, false, true, false]);
    assert_eq!(iris.counter(), 1);
}
