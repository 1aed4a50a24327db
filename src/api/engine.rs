use tracing::trace;

use crate::core::{LocationStore, RoutePoint, ViewportTransform};
use crate::error::RouteCanvasResult;
use crate::interaction::PanGesture;
use crate::render::{RenderFrame, Renderer};

use super::validation::validate_render_style;
use super::{RenderStyle, RouteCanvasConfig, build_route_frame, engine_core::EngineCore};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `RouteCanvasEngine` owns the single location store, viewport transform,
/// pan controller and displayed route, and drives the renderer after every
/// state change. All mutations go through `&mut self`, so they never
/// interleave.
pub struct RouteCanvasEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> RouteCanvasEngine<R> {
    pub fn new(renderer: R, config: RouteCanvasConfig) -> RouteCanvasResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            core: EngineCore::new(config),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RouteCanvasConfig {
        &self.core.config
    }

    #[must_use]
    pub fn locations(&self) -> &LocationStore {
        &self.core.store
    }

    #[must_use]
    pub fn transform(&self) -> &ViewportTransform {
        &self.core.transform
    }

    #[must_use]
    pub fn displayed_route(&self) -> Option<&[RoutePoint]> {
        self.core.displayed_route.as_deref()
    }

    /// Last optimize outcome, formatted for display.
    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        self.core.result_text.as_deref()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> PanGesture {
        self.core.pan.gesture()
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.core.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> RouteCanvasResult<()> {
        let style = validate_render_style(style)?;
        let frame = build_route_frame(
            &self.core.store,
            &self.core.transform,
            self.core.displayed_route.as_deref(),
            &style,
        );
        self.present(&frame)?;
        self.core.render_style = style;
        Ok(())
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> RouteCanvasResult<()> {
        let frame = self.build_render_frame();
        self.present(&frame)
    }

    /// Validates `frame` and hands it to the renderer.
    ///
    /// Mutating operations draw their candidate state through this and
    /// commit only once it returns `Ok`.
    pub(super) fn present(&mut self, frame: &RenderFrame) -> RouteCanvasResult<()> {
        frame.validate()?;
        trace!(commands = frame.commands.len(), "render frame");
        self.renderer.render(frame)
    }

    /// Draws the current frame into a cairo context owned by the caller,
    /// such as the one a host toolkit passes to its draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> RouteCanvasResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
