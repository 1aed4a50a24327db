mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, Color, PolylinePrimitive, TextHAlign, TextPrimitive};

use crate::error::RouteCanvasResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from viewport and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RouteCanvasResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
