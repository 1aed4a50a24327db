use serde::{Deserialize, Serialize};
use tracing::trace;

/// Pan gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PanGesture {
    #[default]
    Idle,
    /// A pointer is held down on the drawing surface.
    Dragging { last_x: f64, last_y: f64 },
}

/// Offset to apply to the viewport transform for one pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Translates pointer events into pan deltas.
///
/// The controller never touches the transform itself; callers apply the
/// returned `PanDelta` and redraw once per delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanController {
    gesture: PanGesture,
}

impl PanController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gesture(self) -> PanGesture {
        self.gesture
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self.gesture, PanGesture::Dragging { .. })
    }

    /// Starts a gesture. A second press while dragging re-anchors it.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        trace!(x, y, "pan gesture start");
        self.gesture = PanGesture::Dragging {
            last_x: x,
            last_y: y,
        };
    }

    /// Returns the delta since the last pointer position while dragging.
    ///
    /// Returns `None` when idle.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<PanDelta> {
        let PanGesture::Dragging { last_x, last_y } = self.gesture else {
            return None;
        };

        self.gesture = PanGesture::Dragging {
            last_x: x,
            last_y: y,
        };
        Some(PanDelta {
            dx: x - last_x,
            dy: y - last_y,
        })
    }

    pub fn on_pointer_up(&mut self) {
        self.end_gesture("pointer up");
    }

    /// Ends the gesture once the pointer leaves the drawing surface, so a later
    /// move elsewhere cannot resume panning.
    pub fn on_pointer_leave(&mut self) {
        self.end_gesture("pointer leave");
    }

    fn end_gesture(&mut self, reason: &'static str) {
        if self.is_dragging() {
            trace!(reason, "pan gesture end");
        }
        self.gesture = PanGesture::Idle;
    }
}
