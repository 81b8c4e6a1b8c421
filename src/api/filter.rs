use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::{ApiError, FilterError};
use crate::rendering::encode_png;
use crate::services::FilterService;

/// Query parameters for the filter endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct FilterQuery {
    /// Image URL (http or https)
    pub src: Option<String>,
    /// Filter name, e.g. "saturation"
    pub filter: Option<String>,
    /// Filter amount (default 1.0, or the preset's amount)
    pub amount: Option<f32>,
    /// Configured preset name; takes precedence over `filter`
    pub preset: Option<String>,
}

/// Apply a filter to an image
///
/// Loads the source, copies it through the selected filter and returns the
/// result as PNG. Alpha is preserved unchanged.
#[utoipa::path(
    get,
    path = "/api/filter",
    params(FilterQuery),
    responses(
        (status = 200, description = "Filtered PNG image", content_type = "image/png"),
        (status = 400, description = "Missing source or invalid filter selection"),
        (status = 403, description = "Source host blocked by origin policy, or a local path"),
        (status = 422, description = "Source is not a usable PNG"),
        (status = 502, description = "Source could not be fetched"),
    ),
    tag = "Filter"
)]
pub async fn handle_filter(
    State(service): State<Arc<FilterService>>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, ApiError> {
    let src = query.src.ok_or(ApiError::MissingParam("src"))?;
    let adjustment = service.config().resolve_adjustment(
        query.filter.as_deref(),
        query.amount,
        query.preset.as_deref(),
    )?;

    let result = service.process_async(src, adjustment).await?;

    let png_bytes = tokio::task::spawn_blocking(move || encode_png(&result.filtered))
        .await
        .map_err(|e| ApiError::Internal(format!("encode task failed: {e}")))?
        .map_err(FilterError::from)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CONTENT_LENGTH, &png_bytes.len().to_string()),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}
