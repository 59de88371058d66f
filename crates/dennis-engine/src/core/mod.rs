//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application. Applications see the backbuffer and viewport, never
//! window or GPU handles.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
