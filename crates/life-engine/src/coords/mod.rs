//! Coordinate types shared by the runtime and renderers.
//!
//! Board geometry lives directly in normalized device coordinates
//! (`[-1, 1]` on both axes, +Y up); the viewport only fixes the aspect.

mod viewport;

pub use viewport::Viewport;
