//! Dennis engine crate.
//!
//! A small software-rendered frame loop: painters draw into a CPU
//! backbuffer, the runtime presents it through a vsynced wgpu surface.

pub mod device;
pub mod window;
pub mod core;
pub mod render;

pub mod logging;
pub mod coords;
pub mod canvas;
pub mod paint;
pub mod text;
pub mod anim;
