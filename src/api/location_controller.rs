use tracing::{debug, warn};

use crate::error::{RouteCanvasError, RouteCanvasResult};
use crate::render::Renderer;

use super::{RouteCanvasEngine, build_route_frame};

pub const UNDISPLAYABLE_LOCATION_NOTICE: &str = "Location is too far from the others to display.";

impl<R: Renderer> RouteCanvasEngine<R> {
    /// Adds a location, re-fits the view over all locations and redraws.
    ///
    /// The displayed route is dropped: it is superseded by a fit over the
    /// raw locations. The new store, transform and frame are built as a
    /// candidate first, so any error leaves every piece of state unchanged.
    pub fn add_location(&mut self, name: &str, x: f64, y: f64) -> RouteCanvasResult<u64> {
        let mut store = self.core.store.clone();
        let id = store.add(name, x, y)?;

        let mut transform = self.core.transform;
        transform
            .auto_fit(
                store.locations(),
                self.core.config.viewport,
                self.core.config.padding_px,
            )
            .map_err(|err| {
                warn!(id, error = %err, "location cannot be fitted into the view");
                RouteCanvasError::Validation(UNDISPLAYABLE_LOCATION_NOTICE.to_owned())
            })?;

        let frame = build_route_frame(&store, &transform, None, &self.core.render_style);
        self.present(&frame)?;

        if self.core.displayed_route.take().is_some() {
            debug!(id, "dropping displayed route after location add");
        }
        self.core.store = store;
        self.core.transform = transform;
        Ok(id)
    }

    /// List display lines, one per location, as `name (x, y)`.
    #[must_use]
    pub fn location_list_entries(&self) -> Vec<String> {
        self.core
            .store
            .locations()
            .iter()
            .map(|location| format!("{} ({}, {})", location.name(), location.x(), location.y()))
            .collect()
    }
}
