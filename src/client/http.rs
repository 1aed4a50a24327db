use std::time::Duration;

use reqwest::Url;
use tracing::{debug, warn};

use crate::api::RouteCanvasConfig;
use crate::error::{RouteCanvasError, RouteCanvasResult};

use super::{OptimizationClient, OptimizeRequest, OptimizeResponse};

/// `OptimizationClient` backed by an HTTP JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpOptimizationClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpOptimizationClient {
    pub fn new(endpoint: Url, timeout: Duration) -> RouteCanvasResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                RouteCanvasError::Network(format!("failed to build http client: {e}"))
            })?;
        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &RouteCanvasConfig) -> RouteCanvasResult<Self> {
        Self::new(
            config.endpoint_url()?,
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl OptimizationClient for HttpOptimizationClient {
    async fn optimize(&self, request: &OptimizeRequest) -> RouteCanvasResult<OptimizeResponse> {
        debug!(
            endpoint = %self.endpoint,
            count = request.locations.len(),
            "sending optimize request"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "optimize request failed");
                RouteCanvasError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "optimize request rejected");
            return Err(RouteCanvasError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_owned(),
            });
        }

        response.json::<OptimizeResponse>().await.map_err(|e| {
            RouteCanvasError::InvalidData(format!("failed to decode optimize response: {e}"))
        })
    }
}
