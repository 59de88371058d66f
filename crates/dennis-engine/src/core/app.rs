use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once per frame, after pending window events have been handled.
    /// The backbuffer is presented when this returns.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once when the loop has terminated, before the window and GPU
    /// context are released.
    fn on_exit(&mut self) {}
}
