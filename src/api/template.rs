//! Authoring endpoints: render, compile, preview, reconcile.

use std::time::Instant;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::block::VisualTemplate;
use crate::catalog::Reconciled;
use crate::error::{AppError, Result};
use crate::metrics::{CatalogMetrics, CompileMetrics, PreviewMetrics, RenderMetrics};
use crate::render::Rendered;
use crate::server::AppState;
use crate::template::{self, CompiledTemplate, Preview, StoredTemplate, TemplateDraft};

/// Preview input: either a draft to render, or an already compiled
/// subject and HTML pair
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub draft: Option<TemplateDraft>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    /// Per-call values, layered over the configured samples
    #[serde(default)]
    pub values: serde_json::Map<String, serde_json::Value>,
}

/// POST /api/v1/templates/render - Render a block composition to HTML
#[tracing::instrument(
    name = "http.render_template",
    skip(state, template),
    fields(blocks = template.blocks.len())
)]
pub async fn render_template(
    State(state): State<AppState>,
    Json(template): Json<VisualTemplate>,
) -> Json<Rendered> {
    let started = Instant::now();
    let rendered = state.renderer.render(&template);
    RenderMetrics::record(&rendered, started.elapsed());

    Json(rendered)
}

/// POST /api/v1/templates/compile - Validate a draft and build its stored record
#[tracing::instrument(
    name = "http.compile_template",
    skip(state, draft),
    fields(slug = %draft.slug)
)]
pub async fn compile_template(
    State(state): State<AppState>,
    Json(draft): Json<TemplateDraft>,
) -> Result<Json<CompiledTemplate>> {
    match draft.compile(&state.renderer) {
        Ok(compiled) => {
            CompileMetrics::record_compiled(&compiled.warnings);
            Ok(Json(compiled))
        }
        Err(e) => {
            CompileMetrics::record_rejected(&e);
            Err(e.into())
        }
    }
}

/// POST /api/v1/templates/preview - Preview with sample values
#[tracing::instrument(name = "http.preview_template", skip(state, request))]
pub async fn preview_template(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<Preview>> {
    let values = (&request.values, &*state.samples);

    let preview = match (&request.draft, &request.html) {
        (Some(draft), _) => draft.preview(&state.renderer, &values),
        (None, Some(html)) => {
            let subject = request.subject.as_deref().unwrap_or_default();
            template::preview(subject, html, &values)
        }
        (None, None) => {
            return Err(AppError::Validation(
                "Provide either a draft or compiled html".to_string(),
            ))
        }
    };

    PreviewMetrics::record(preview.unresolved.len());
    Ok(Json(preview))
}

/// POST /api/v1/templates/reconcile - Block-level view of a stored record
#[tracing::instrument(
    name = "http.reconcile_template",
    skip(state, record),
    fields(slug = %record.slug, legacy = record.is_legacy())
)]
pub async fn reconcile_template(
    State(state): State<AppState>,
    Json(record): Json<StoredTemplate>,
) -> Json<Reconciled> {
    let reconciled = state.catalog.reconcile(&record, state.legacy_policy());
    CatalogMetrics::record_reconciled(reconciled.origin);

    Json(reconciled)
}
