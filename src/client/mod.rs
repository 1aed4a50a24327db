//! Optimization service boundary.
//!
//! The route-ordering algorithm lives behind the service; this crate only
//! ships the point set out and takes one outcome back.

mod http;
mod wire;

pub use http::HttpOptimizationClient;
pub use wire::{OptimizeRequest, OptimizeResponse};

use crate::error::RouteCanvasResult;

/// One-shot asynchronous route optimization.
///
/// Each call resolves exactly once, with either the ordered route or an error.
pub trait OptimizationClient {
    fn optimize(
        &self,
        request: &OptimizeRequest,
    ) -> impl Future<Output = RouteCanvasResult<OptimizeResponse>> + Send;
}
