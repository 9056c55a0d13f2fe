use anyhow::Result;
use winit::window::Window;

use crate::device::Gpu;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

/// Window handle and metadata for the current frame.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu:    &'a mut Gpu<'w>,
    pub time:   FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires a surface frame, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then submits and presents the frame.
    ///
    /// Fails only when the surface error is unrecoverable; transient errors
    /// skip the frame without calling `draw`.
    pub fn render<F>(&mut self, draw: F) -> Result<()>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => return self.gpu.handle_surface_error(&err).into_result(&err),
        };

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let rctx = self.gpu.render_ctx();
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        Ok(())
    }
}
