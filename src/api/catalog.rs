use axum::{extract::State, response::Json};
use pixel_filter::{Filter, DEFAULT_AMOUNT};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::models::{AppConfig, PresetConfig};

/// One available filter
#[derive(Debug, Serialize, ToSchema)]
pub struct FilterInfo {
    /// Name accepted by the `filter` parameter
    pub name: &'static str,
    /// Whether the `amount` parameter has any effect
    pub uses_amount: bool,
    pub default_amount: f32,
}

impl From<Filter> for FilterInfo {
    fn from(filter: Filter) -> Self {
        Self {
            name: filter.name(),
            uses_amount: filter.uses_amount(),
            default_amount: DEFAULT_AMOUNT,
        }
    }
}

/// List available filters
#[utoipa::path(
    get,
    path = "/api/filters",
    responses(
        (status = 200, description = "Available filters", body = Vec<FilterInfo>),
    ),
    tag = "Catalog"
)]
pub async fn handle_filters() -> Json<Vec<FilterInfo>> {
    Json(Filter::ALL.iter().copied().map(FilterInfo::from).collect())
}

/// List configured presets
#[utoipa::path(
    get,
    path = "/api/presets",
    responses(
        (status = 200, description = "Configured presets by name", body = BTreeMap<String, PresetConfig>),
    ),
    tag = "Catalog"
)]
pub async fn handle_presets(
    State(config): State<Arc<AppConfig>>,
) -> Json<BTreeMap<String, PresetConfig>> {
    Json(
        config
            .presets
            .iter()
            .map(|(name, preset)| (name.clone(), preset.clone()))
            .collect(),
    )
}
