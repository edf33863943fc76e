use anyhow::Result;

use crate::coords::Viewport;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo.
pub trait App {
    /// Returns the logical canvas size the app draws into, given the window's
    /// logical size. The canvas is stretched to fill the window.
    ///
    /// Defaults to the window size (no stretching).
    fn layout(&self, outside: Viewport) -> Viewport {
        outside
    }

    /// Called once per paced frame.
    ///
    /// Returning an error stops the runtime; `Runtime::run` hands it back to
    /// the caller.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;
}
