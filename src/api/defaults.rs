//! Default catalog endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::DefaultComposition;
use crate::error::{AppError, Result};
use crate::metrics::CatalogMetrics;
use crate::server::AppState;
use crate::template::TemplateDraft;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSummary {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub subject: String,
    pub block_count: usize,
}

impl From<&DefaultComposition> for DefaultSummary {
    fn from(composition: &DefaultComposition) -> Self {
        Self {
            slug: composition.slug.clone(),
            name: composition.name.clone(),
            category: composition.category.clone(),
            subject: composition.subject.clone(),
            block_count: composition.blocks.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DefaultListResponse {
    pub defaults: Vec<DefaultSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct InstantiateResponse {
    /// `default` when the slug has a composition, `empty` otherwise
    pub source: &'static str,
    pub draft: TemplateDraft,
}

/// GET /api/v1/defaults - List catalog entries
#[tracing::instrument(name = "http.list_defaults", skip(state))]
pub async fn list_defaults(State(state): State<AppState>) -> Json<DefaultListResponse> {
    let defaults: Vec<DefaultSummary> = state.catalog.iter().map(DefaultSummary::from).collect();
    let total = defaults.len();

    Json(DefaultListResponse { defaults, total })
}

/// GET /api/v1/defaults/{slug} - Canonical composition for a slug
#[tracing::instrument(name = "http.get_default", skip(state))]
pub async fn get_default(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DefaultComposition>> {
    state
        .catalog
        .lookup(&slug)
        .cloned()
        .map(Json)
        .ok_or(AppError::UnknownSlug(slug))
}

/// POST /api/v1/defaults/{slug}/instantiate - Seed a draft from the default
#[tracing::instrument(name = "http.instantiate_default", skip(state))]
pub async fn instantiate_default(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<InstantiateResponse> {
    let found = state.catalog.contains(&slug);
    let draft = TemplateDraft::from_default(&slug);
    CatalogMetrics::record_instantiated(found);

    let source = if found { "default" } else { "empty" };
    Json(InstantiateResponse { source, draft })
}
