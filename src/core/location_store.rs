use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::types::{PlanePoint, Positioned};
use crate::error::{RouteCanvasError, RouteCanvasResult};

pub const INVALID_LOCATION_NOTICE: &str = "Please fill in all fields with valid values.";

/// A labeled point owned by `LocationStore`.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: u64,
    name: String,
    x: f64,
    y: f64,
}

impl Location {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Strips the id, producing the shape exchanged with the optimization service.
    #[must_use]
    pub fn to_route_point(&self) -> RoutePoint {
        RoutePoint::new(self.name.clone(), self.x, self.y)
    }
}

impl Positioned for Location {
    fn position(&self) -> PlanePoint {
        PlanePoint::new(self.x, self.y)
    }
}

/// A location without its id, as sent to and returned by the optimization service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl RoutePoint {
    #[must_use]
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

impl Positioned for RoutePoint {
    fn position(&self) -> PlanePoint {
        PlanePoint::new(self.x, self.y)
    }
}

/// Ordered, append-only collection of labeled points.
///
/// Ids come from a monotonically increasing counter and are never reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationStore {
    locations: Vec<Location>,
    next_id: u64,
}

impl LocationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new location and returns its id.
    ///
    /// The name is trimmed before storage. Empty names and non-finite
    /// coordinates are rejected without touching existing entries.
    pub fn add(&mut self, name: &str, x: f64, y: f64) -> RouteCanvasResult<u64> {
        let name = name.trim();
        if name.is_empty() || !x.is_finite() || !y.is_finite() {
            warn!(name, x, y, "rejecting invalid location");
            return Err(RouteCanvasError::Validation(
                INVALID_LOCATION_NOTICE.to_owned(),
            ));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.locations.push(Location {
            id,
            name: name.to_owned(),
            x,
            y,
        });
        debug!(id, name, x, y, count = self.locations.len(), "location added");
        Ok(id)
    }

    /// Returns the current ordered point set with ids stripped.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RoutePoint> {
        self.locations.iter().map(Location::to_route_point).collect()
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
