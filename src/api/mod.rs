mod engine;
mod engine_config;
mod engine_core;
mod interaction_controller;
mod location_controller;
mod optimization_controller;
mod render_frame_builder;
mod render_style;
mod validation;

pub use engine::RouteCanvasEngine;
pub use engine_config::{DEFAULT_OPTIMIZE_ENDPOINT, RouteCanvasConfig};
pub use location_controller::UNDISPLAYABLE_LOCATION_NOTICE;
pub use optimization_controller::{OptimizationOutcome, TOO_FEW_LOCATIONS_NOTICE};
pub use render_frame_builder::build_route_frame;
pub use render_style::RenderStyle;
