//! API layer - HTTP endpoint handlers organized by domain.

mod defaults;
mod health;
mod metrics;
mod routes;
mod template;
mod variables;

// Re-export all handlers for use in server/app.rs
pub use defaults::{get_default, instantiate_default, list_defaults};
pub use health::health;
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
pub use template::{compile_template, preview_template, reconcile_template, render_template};
pub use variables::extract_variables;
