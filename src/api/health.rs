//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::LegacyPolicy;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog: CatalogHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct CatalogHealthResponse {
    pub defaults: usize,
    pub legacy_policy: LegacyPolicy,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: CatalogHealthResponse {
            defaults: state.catalog.len(),
            legacy_policy: state.legacy_policy(),
        },
    })
}
