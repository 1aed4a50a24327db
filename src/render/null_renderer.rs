use crate::error::RouteCanvasResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content and keeps the last frame so callers can
/// inspect exactly what would have been drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub last_polyline_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RouteCanvasResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_circle_count = frame.circles().count();
        self.last_text_count = frame.texts().count();
        self.last_polyline_count = frame.polylines().count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
