use thiserror::Error;

pub type RouteCanvasResult<T> = Result<T, RouteCanvasError>;

#[derive(Debug, Error)]
pub enum RouteCanvasError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Rejected user input. The message is meant to be shown as-is.
    #[error("{0}")]
    Validation(String),

    /// Caller defect, e.g. auto-fitting an empty point set.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Network(String),

    #[error("API Error: {reason} (Status: {status})")]
    Api { status: u16, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
