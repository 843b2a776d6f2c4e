//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use crate::catalog::ReconcileOrigin;
use crate::render::{RenderWarning, Rendered};
use crate::template::TemplateError;

use super::{
    CATALOG_INSTANTIATIONS_TOTAL, COMPILES_TOTAL, COMPILE_REJECTIONS_TOTAL,
    PREVIEWS_TOTAL, PREVIEW_UNRESOLVED_TOTAL, RECONCILIATIONS_TOTAL, RENDERS_TOTAL,
    RENDER_DURATION, RENDER_WARNINGS_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record one rendered document and its degradations
    pub fn record(rendered: &Rendered, elapsed: Duration) {
        RENDER_DURATION.observe(elapsed.as_secs_f64());
        Self::record_warnings(&rendered.warnings);
    }

    fn record_warnings(warnings: &[RenderWarning]) {
        RENDERS_TOTAL.inc();
        for warning in warnings {
            RENDER_WARNINGS_TOTAL
                .with_label_values(&[warning.code()])
                .inc();
        }
    }
}

/// Helper struct for recording compile metrics
pub struct CompileMetrics;

impl CompileMetrics {
    /// Record an accepted draft and the degradations its render applied
    pub fn record_compiled(warnings: &[RenderWarning]) {
        COMPILES_TOTAL.inc();
        RenderMetrics::record_warnings(warnings);
    }

    /// Record a refused draft
    pub fn record_rejected(error: &TemplateError) {
        COMPILE_REJECTIONS_TOTAL
            .with_label_values(&[error.code()])
            .inc();
    }
}

/// Helper struct for recording preview metrics
pub struct PreviewMetrics;

impl PreviewMetrics {
    /// Record a preview and how many placeholders it left unresolved
    pub fn record(unresolved: usize) {
        PREVIEWS_TOTAL.inc();
        PREVIEW_UNRESOLVED_TOTAL.inc_by(unresolved as u64);
    }
}

/// Helper struct for recording catalog metrics
pub struct CatalogMetrics;

impl CatalogMetrics {
    /// Record an instantiation; `found` is false when the empty template was returned
    pub fn record_instantiated(found: bool) {
        let source = if found { "default" } else { "empty" };
        CATALOG_INSTANTIATIONS_TOTAL
            .with_label_values(&[source])
            .inc();
    }

    /// Record a reconciliation by origin
    pub fn record_reconciled(origin: ReconcileOrigin) {
        RECONCILIATIONS_TOTAL
            .with_label_values(&[origin.as_str()])
            .inc();
    }
}
