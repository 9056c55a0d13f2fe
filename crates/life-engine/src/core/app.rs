use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the binary.
pub trait App {
    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per paced frame. An error ends the run and is returned
    /// from `Runtime::run`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> anyhow::Result<AppControl>;

    /// Called once before the window and GPU context are torn down.
    fn on_exit(&mut self) {}
}
