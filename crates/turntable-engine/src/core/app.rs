use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the viewers.
pub trait App {
    /// Called once after the window and GPU context exist, before the first frame.
    fn on_start(&mut self, ctx: &mut FrameCtx<'_, '_>) {
        let _ = ctx;
    }

    /// Called once per redraw. Input gathered since the previous frame is in
    /// `ctx.input_frame`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
