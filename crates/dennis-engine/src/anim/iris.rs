use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::DrawTarget;
use crate::coords::{Rect, Viewport};
use crate::paint::Rgba8;
use crate::text::{draw_text, GlyphAtlas};

/// Channel offsets are drawn from `[0, OFFSET_RANGE)`.
const OFFSET_RANGE: u8 = 255;

/// Result of one [`IrisAnimation::step`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct IrisStep {
    /// Rectangle filled this step (may be empty on the collapsing step).
    pub rect: Rect,
    pub color: Rgba8,
    /// True when this step collapsed the iris and re-rolled the offsets.
    pub reset: bool,
}

/// "Closing iris": a filled rectangle that shrinks by 2 px per side each
/// frame while its color cycles, restarting with fresh random channel offsets
/// once it has collapsed.
///
/// For counter `c`:
/// - rect = `(2c, 2c, width - 4c, height - 4c)`
/// - channel = `(c - offset) mod 255`, alpha = `c` as a byte
#[derive(Debug, Clone)]
pub struct IrisAnimation<R = StdRng> {
    counter: i32,
    offsets: [u8; 3],
    rng: R,
}

impl IrisAnimation<StdRng> {
    /// Animation seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Animation with a reproducible offset sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for IrisAnimation<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> IrisAnimation<R> {
    pub fn from_rng(mut rng: R) -> Self {
        let offsets = roll_offsets(&mut rng);
        Self { counter: 0, offsets, rng }
    }

    #[inline]
    pub fn counter(&self) -> i32 {
        self.counter
    }

    /// Current `[r, g, b]` offsets.
    #[inline]
    pub fn offsets(&self) -> [u8; 3] {
        self.offsets
    }

    /// Rectangle and color for the current counter, without advancing.
    pub fn current(&self, viewport: Viewport) -> (Rect, Rgba8) {
        let c = self.counter;
        let rect = Rect::new(
            c * 2,
            c * 2,
            viewport.width() as i32 - c * 4,
            viewport.height() as i32 - c * 4,
        );
        let channel = |offset: u8| (c - offset as i32).rem_euclid(255) as u8;
        let [r, g, b] = self.offsets;
        let color = Rgba8::new(channel(r), channel(g), channel(b), c as u8);
        (rect, color)
    }

    /// Fills the current rectangle and advances one frame.
    pub fn step<T>(&mut self, target: &mut T, viewport: Viewport) -> IrisStep
    where
        T: DrawTarget + ?Sized,
    {
        let (rect, color) = self.current(viewport);
        target.fill_rect(rect, color);

        self.counter += 1;

        let reset = rect.is_empty();
        if reset {
            self.offsets = roll_offsets(&mut self.rng);
            self.counter = 0;
            log::debug!("iris collapsed; new offsets {:?}", self.offsets);
        }

        IrisStep { rect, color, reset }
    }

    /// Draws the three fixed smoke-test lines, positioned relative to the
    /// viewport.
    pub fn draw_captions<T>(&self, target: &mut T, atlas: &GlyphAtlas, viewport: Viewport)
    where
        T: DrawTarget + ?Sized,
    {
        let w = viewport.width() as i32;
        let h = viewport.height() as i32;

        draw_text(target, atlas, "HELLO WORLD !", w / 4, h / 3, 2);
        draw_text(target, atlas, "don't adjust your monitor", w / 4, h / 2 + 20, 1);
        draw_text(target, atlas, "this is just a test!", w / 4, h / 2 + 40, 1);
    }
}

fn roll_offsets<R: Rng>(rng: &mut R) -> [u8; 3] {
    [
        rng.random_range(0..OFFSET_RANGE),
        rng.random_range(0..OFFSET_RANGE),
        rng.random_range(0..OFFSET_RANGE),
    ]
}
