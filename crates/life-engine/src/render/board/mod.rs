//! Board geometry and render cache.
//!
//! `layout` is pure CPU math (grid position → NDC quad) and is fully testable
//! without a device. `cache` uploads that geometry once, one vertex buffer per
//! cell, and replays only the live cells each frame.

mod arena;
mod cache;
mod error;
mod layout;
mod style;

pub use arena::CellArena;
pub use cache::{BoardCache, CellHandle};
pub use error::BoardError;
pub use layout::{BoardLayout, CellQuad, CellVertex, QUAD_VERTEX_COUNT};
pub use style::BoardStyle;
