//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] supplied by the frame owner.
//!
//! Convention:
//! - geometry is built directly in NDC (`[-1, 1]`, +Y up); no viewport uniform.

mod ctx;
pub mod board;

pub use ctx::{RenderCtx, RenderTarget};
