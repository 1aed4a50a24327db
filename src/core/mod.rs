pub mod location_store;
pub mod types;
pub mod viewport_transform;

pub use location_store::{INVALID_LOCATION_NOTICE, Location, LocationStore, RoutePoint};
pub use types::{PlanePoint, Positioned, ScreenPoint, Viewport};
pub use viewport_transform::{DEGENERATE_AXIS_SCALE, DataBounds, ViewportTransform};
