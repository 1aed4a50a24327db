//! route-canvas: auto-fitting, panable viewport and deterministic render
//! pipeline for labeled points and an optimized route overlay.
//!
//! Data-space points are mapped to screen space by a uniform scale plus
//! offset (`core::ViewportTransform`), drawn into backend-agnostic frames
//! (`render::RenderFrame`) and handed to a `render::Renderer`. Route ordering
//! is delegated to an external service through `client::OptimizationClient`.

pub mod api;
pub mod client;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{RouteCanvasConfig, RouteCanvasEngine};
pub use error::{RouteCanvasError, RouteCanvasResult};
