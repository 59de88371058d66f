//! GPU presentation of the CPU backbuffer.
//!
//! Painters never touch wgpu. Each frame the [`Presenter`] uploads the
//! [`Canvas`](crate::canvas::Canvas) into a texture and draws it over the
//! whole surface with a nearest-neighbour sampler.

mod present;

pub use present::Presenter;
