use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::defaults::{get_default, instantiate_default, list_defaults};
use super::health::health;
use super::template::{compile_template, preview_template, reconcile_template, render_template};
use super::variables::extract_variables;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        .nest(
            "/api/v1",
            Router::new()
                // Default catalog
                .route("/defaults", get(list_defaults))
                .route("/defaults/{slug}", get(get_default))
                .route("/defaults/{slug}/instantiate", post(instantiate_default))
                // Authoring
                .route("/templates/render", post(render_template))
                .route("/templates/compile", post(compile_template))
                .route("/templates/preview", post(preview_template))
                .route("/templates/reconcile", post(reconcile_template))
                // Variables
                .route("/variables/extract", post(extract_variables)),
        )
}
