use crate::core::{LocationStore, RoutePoint, ViewportTransform};
use crate::interaction::PanController;

use super::{RenderStyle, RouteCanvasConfig};

/// Internal engine state used by the public facade (`RouteCanvasEngine`).
#[derive(Debug, Clone)]
pub(super) struct EngineCore {
    pub(super) config: RouteCanvasConfig,
    pub(super) store: LocationStore,
    pub(super) transform: ViewportTransform,
    pub(super) pan: PanController,
    pub(super) displayed_route: Option<Vec<RoutePoint>>,
    pub(super) result_text: Option<String>,
    pub(super) render_style: RenderStyle,
}

impl EngineCore {
    pub(super) fn new(config: RouteCanvasConfig) -> Self {
        let transform = ViewportTransform::identity(config.viewport, config.padding_px);
        Self {
            config,
            store: LocationStore::new(),
            transform,
            pan: PanController::new(),
            displayed_route: None,
            result_text: None,
            render_style: RenderStyle::default(),
        }
    }
}
