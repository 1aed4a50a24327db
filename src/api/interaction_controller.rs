use tracing::trace;

use crate::error::RouteCanvasResult;
use crate::render::Renderer;

use super::{RouteCanvasEngine, build_route_frame};

impl<R: Renderer> RouteCanvasEngine<R> {
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.core.pan.on_pointer_down(x, y);
    }

    /// Pans by the pointer travel since the last event and redraws once.
    ///
    /// Returns `false` without redrawing when no drag is active.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> RouteCanvasResult<bool> {
        let Some(delta) = self.core.pan.on_pointer_move(x, y) else {
            return Ok(false);
        };

        let mut transform = self.core.transform;
        transform.pan(delta.dx, delta.dy);
        trace!(dx = delta.dx, dy = delta.dy, "pan viewport");
        let frame = build_route_frame(
            &self.core.store,
            &transform,
            self.core.displayed_route.as_deref(),
            &self.core.render_style,
        );
        self.present(&frame)?;
        self.core.transform = transform;
        Ok(true)
    }

    pub fn pointer_up(&mut self) {
        self.core.pan.on_pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.core.pan.on_pointer_leave();
    }
}
