use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{RouteCanvasError, RouteCanvasResult};

pub const DEFAULT_OPTIMIZE_ENDPOINT: &str = "http://127.0.0.1:8000/optimize-route";

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load canvas
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCanvasConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_padding_px")]
    pub padding_px: u32,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_min_locations_to_optimize")]
    pub min_locations_to_optimize: usize,
}

impl Default for RouteCanvasConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl RouteCanvasConfig {
    /// Creates a config for `viewport` with default padding and endpoint.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding_px: default_padding_px(),
            endpoint: default_endpoint(),
            request_timeout_ms: default_request_timeout_ms(),
            min_locations_to_optimize: default_min_locations_to_optimize(),
        }
    }

    /// Sets the margin kept free on every side when auto-fitting.
    #[must_use]
    pub fn with_padding_px(mut self, padding_px: u32) -> Self {
        self.padding_px = padding_px;
        self
    }

    /// Sets the optimization service endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout_ms(mut self, request_timeout_ms: u64) -> Self {
        self.request_timeout_ms = request_timeout_ms;
        self
    }

    /// Sets how many locations must exist before an optimize request is sent.
    #[must_use]
    pub fn with_min_locations_to_optimize(mut self, min_locations: usize) -> Self {
        self.min_locations_to_optimize = min_locations;
        self
    }

    pub fn validate(&self) -> RouteCanvasResult<()> {
        if !self.viewport.is_valid() {
            return Err(RouteCanvasError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let shortest_side = u64::from(self.viewport.width.min(self.viewport.height));
        if 2 * u64::from(self.padding_px) >= shortest_side {
            return Err(RouteCanvasError::InvalidData(format!(
                "padding {}px leaves no drawable area in {}x{} viewport",
                self.padding_px, self.viewport.width, self.viewport.height
            )));
        }
        self.endpoint_url()?;
        if self.request_timeout_ms == 0 {
            return Err(RouteCanvasError::InvalidData(
                "request timeout must be > 0".to_owned(),
            ));
        }
        if self.min_locations_to_optimize == 0 {
            return Err(RouteCanvasError::InvalidData(
                "minimum locations to optimize must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn endpoint_url(&self) -> RouteCanvasResult<Url> {
        Url::parse(&self.endpoint).map_err(|e| {
            RouteCanvasError::InvalidData(format!("invalid endpoint `{}`: {e}", self.endpoint))
        })
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> RouteCanvasResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RouteCanvasError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> RouteCanvasResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| RouteCanvasError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_padding_px() -> u32 {
    40
}

fn default_endpoint() -> String {
    DEFAULT_OPTIMIZE_ENDPOINT.to_owned()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_min_locations_to_optimize() -> usize {
    2
}
