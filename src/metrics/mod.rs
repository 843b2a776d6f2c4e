//! Prometheus metrics for the composition service.
//!
//! - Render metrics (documents rendered, degradations by kind)
//! - Compile metrics (drafts accepted, rejections by reason)
//! - Preview metrics
//! - Catalog metrics (instantiations, legacy reconciliations)

mod helpers;

pub use helpers::{encode_metrics, CatalogMetrics, CompileMetrics, PreviewMetrics, RenderMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "ara";

lazy_static! {
    // ============================================================================
    // Render Metrics
    // ============================================================================

    /// Total documents rendered
    pub static ref RENDERS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total documents rendered"
    ).unwrap();

    /// Degradations applied while rendering, by warning code
    pub static ref RENDER_WARNINGS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_render_warnings_total", METRIC_PREFIX),
        "Total render degradations by kind",
        &["warning"]
    ).unwrap();

    /// Render duration
    pub static ref RENDER_DURATION: Histogram = register_histogram!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Render duration in seconds",
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05]
    ).unwrap();

    // ============================================================================
    // Compile Metrics
    // ============================================================================

    /// Drafts compiled into stored records
    pub static ref COMPILES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_compiles_total", METRIC_PREFIX),
        "Total drafts compiled"
    ).unwrap();

    /// Drafts refused, by error code
    pub static ref COMPILE_REJECTIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_compile_rejections_total", METRIC_PREFIX),
        "Total drafts rejected by reason",
        &["reason"]
    ).unwrap();

    // ============================================================================
    // Preview Metrics
    // ============================================================================

    /// Previews produced
    pub static ref PREVIEWS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_previews_total", METRIC_PREFIX),
        "Total previews produced"
    ).unwrap();

    /// Placeholders left unresolved in previews
    pub static ref PREVIEW_UNRESOLVED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_preview_unresolved_total", METRIC_PREFIX),
        "Total placeholders left unresolved in previews"
    ).unwrap();

    // ============================================================================
    // Catalog Metrics
    // ============================================================================

    /// Default instantiations, by whether the slug had a default
    pub static ref CATALOG_INSTANTIATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_catalog_instantiations_total", METRIC_PREFIX),
        "Total default instantiations by source",
        &["source"]
    ).unwrap();

    /// Reconciliations, by origin of the resulting template
    pub static ref RECONCILIATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_reconciliations_total", METRIC_PREFIX),
        "Total stored records reconciled by origin",
        &["origin"]
    ).unwrap();
}
