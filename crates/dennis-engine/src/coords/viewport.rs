/// Viewport size in physical pixels.
///
/// Invariant: both dimensions are `>= 1`. The runtime is the only writer and
/// updates it when the window reports a new size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Creates a viewport, clamping zero dimensions to 1.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Full-viewport rectangle anchored at the origin.
    #[inline]
    pub fn rect(self) -> super::Rect {
        super::Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Applies a resize notification. A minimised window reports 0x0; that is
    /// stored as 1x1.
    pub(crate) fn set(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_clamped() {
        let v = Viewport::new(0, 0);
        assert_eq!((v.width(), v.height()), (1, 1));
    }

    #[test]
    fn set_replaces_both_dimensions() {
        let mut v = Viewport::default();
        v.set(800, 0);
        assert_eq!((v.width(), v.height()), (800, 1));
    }

    #[test]
    fn rect_covers_whole_viewport() {
        let v = Viewport::new(640, 480);
        assert_eq!(v.rect(), super::super::Rect::new(0, 0, 640, 480));
    }
}
