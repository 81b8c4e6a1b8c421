use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pixel_filter::{BufferError, ParseFilterError};
use serde_json::json;
use thiserror::Error;

/// Failure to acquire a pixel buffer from an image source.
///
/// Every variant is terminal for the request: nothing is retried and no
/// filter runs on a buffer that failed to load.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to load {identifier}: {reason}")]
    Load { identifier: String, reason: String },

    #[error("Host {host} is not allowed by the origin policy ({identifier})")]
    Policy { identifier: String, host: String },

    #[error("Local file sources are disabled: {0}")]
    LocalFile(String),

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("Source too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Image dimensions {width}x{height} exceed maximum {max}")]
    DimensionsExceeded { width: u32, height: u32, max: u32 },

    #[error("Invalid pixel buffer: {0}")]
    Buffer(#[from] BufferError),
}

impl SourceError {
    pub(crate) fn load(identifier: &str, reason: impl ToString) -> Self {
        SourceError::Load {
            identifier: identifier.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Failure to present a filtered image.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid filter selection.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    UnknownFilter(#[from] ParseFilterError),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(f32),

    #[error("No filter or preset given and no default preset configured")]
    NoFilter,

    #[error("Config parse error: {0}")]
    Parse(String),
}

/// Failure anywhere in the load, filter, present pipeline.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Filter selection error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("Filter task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing query parameter: {0}")]
    MissingParam(&'static str),

    #[error("{0}")]
    Filter(#[from] FilterError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConfigError> for ApiError {
    fn from(e: ConfigError) -> Self {
        ApiError::Filter(FilterError::Config(e))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Filter(FilterError::Config(_)) => StatusCode::BAD_REQUEST,
            ApiError::Filter(FilterError::Source(e)) => match e {
                SourceError::Policy { .. } | SourceError::LocalFile(_) => StatusCode::FORBIDDEN,
                SourceError::Load { .. } => StatusCode::BAD_GATEWAY,
                SourceError::Decode(_)
                | SourceError::TooLarge { .. }
                | SourceError::DimensionsExceeded { .. }
                | SourceError::Buffer(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::Filter(FilterError::Sink(_))
            | ApiError::Filter(FilterError::Task(_))
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
