//! Generation engine.
//!
//! Owns the double-buffered board and advances it under B3/S23 with a bounded
//! (non-wrapping) topology. No GPU or windowing types appear here.

mod engine;
mod error;
mod grid;
mod rule;

pub use engine::Engine;
pub use error::SimError;
pub use grid::Grid;
pub use rule::{next_state, Rule};
