use tracing::{debug, warn};

use crate::client::{OptimizeRequest, OptimizeResponse};
use crate::error::{RouteCanvasError, RouteCanvasResult};
use crate::render::Renderer;

use super::{RouteCanvasEngine, build_route_frame};

pub const TOO_FEW_LOCATIONS_NOTICE: &str = "Please add at least two locations to optimize.";

/// What `apply_optimization_outcome` did with a service result.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationOutcome {
    /// Route replaced, view re-fitted over it and redrawn.
    Applied { total_distance: f64 },
    /// Nothing but the result text changed.
    Rejected { message: String },
}

impl<R: Renderer> RouteCanvasEngine<R> {
    /// Snapshots the store into a request body.
    ///
    /// The engine stays usable (pans, adds) while the request is in flight;
    /// feed the eventual result to `apply_optimization_outcome`.
    pub fn prepare_optimization(&self) -> RouteCanvasResult<OptimizeRequest> {
        let count = self.core.store.len();
        if count < self.core.config.min_locations_to_optimize {
            warn!(
                count,
                required = self.core.config.min_locations_to_optimize,
                "not enough locations to optimize"
            );
            return Err(RouteCanvasError::Validation(
                TOO_FEW_LOCATIONS_NOTICE.to_owned(),
            ));
        }
        debug!(count, "prepared optimize request");
        Ok(OptimizeRequest::from_store(&self.core.store))
    }

    /// Applies a service result as one step.
    ///
    /// On success the candidate frame is drawn first, then the displayed
    /// route, the transform (fitted over the route) and the result text
    /// change together. A renderer error leaves all of them unchanged. Any pan
    /// made while the request was outstanding is discarded. On failure only
    /// the result text changes.
    pub fn apply_optimization_outcome(
        &mut self,
        outcome: RouteCanvasResult<OptimizeResponse>,
    ) -> RouteCanvasResult<OptimizationOutcome> {
        let response = match outcome.and_then(|response| {
            response.validate()?;
            Ok(response)
        }) {
            Ok(response) => response,
            Err(err) => return Ok(self.reject_optimization(&err)),
        };

        let mut transform = self.core.transform;
        if let Err(err) = transform.auto_fit(
            &response.ordered_route,
            self.core.config.viewport,
            self.core.config.padding_px,
        ) {
            return Ok(self.reject_optimization(&err));
        }

        let frame = build_route_frame(
            &self.core.store,
            &transform,
            Some(response.ordered_route.as_slice()),
            &self.core.render_style,
        );
        if let Err(err) = frame.validate() {
            return Ok(self.reject_optimization(&err));
        }
        self.present(&frame)?;

        debug!(
            count = response.ordered_route.len(),
            total_distance = response.total_distance,
            "applying optimized route"
        );
        self.core.transform = transform;
        self.core.result_text = Some(response.summary());
        let total_distance = response.total_distance;
        self.core.displayed_route = Some(response.ordered_route);
        Ok(OptimizationOutcome::Applied { total_distance })
    }

    fn reject_optimization(&mut self, err: &RouteCanvasError) -> OptimizationOutcome {
        warn!(error = %err, "optimize outcome rejected");
        let message = format!("Error: Could not connect to the API. {err}");
        self.core.result_text = Some(message.clone());
        OptimizationOutcome::Rejected { message }
    }
}
