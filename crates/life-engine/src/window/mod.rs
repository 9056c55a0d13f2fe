//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the simulation window, wires them to the GPU
//! layer, and paces redraws with a `FrameClock`.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
pub use winit::dpi::LogicalSize;
