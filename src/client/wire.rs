use serde::{Deserialize, Serialize};

use crate::core::{LocationStore, RoutePoint};
use crate::error::{RouteCanvasError, RouteCanvasResult};

/// Body of `POST <endpoint>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub locations: Vec<RoutePoint>,
}

impl OptimizeRequest {
    #[must_use]
    pub fn from_store(store: &LocationStore) -> Self {
        Self {
            locations: store.snapshot(),
        }
    }
}

/// Successful response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub ordered_route: Vec<RoutePoint>,
    pub total_distance: f64,
}

impl OptimizeResponse {
    /// Rejects payloads that cannot be displayed: an empty route, non-finite
    /// coordinates, or a negative distance.
    pub fn validate(&self) -> RouteCanvasResult<()> {
        if self.ordered_route.is_empty() {
            return Err(RouteCanvasError::InvalidData(
                "optimized route is empty".to_owned(),
            ));
        }
        if self
            .ordered_route
            .iter()
            .any(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(RouteCanvasError::InvalidData(
                "optimized route coordinates must be finite".to_owned(),
            ));
        }
        if !self.total_distance.is_finite() || self.total_distance < 0.0 {
            return Err(RouteCanvasError::InvalidData(
                "total distance must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Optimized route distance: {:.2} units",
            self.total_distance
        )
    }
}
