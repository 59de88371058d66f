use crate::canvas::Canvas;
use crate::coords::Viewport;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    /// Backbuffer for this frame. Contents carry over from the previous frame
    /// unless a resize cleared them.
    pub canvas: &'a mut Canvas,

    /// Current window size in physical pixels.
    pub viewport: Viewport,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}
