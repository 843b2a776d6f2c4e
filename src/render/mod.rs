//! Email HTML renderer.
//!
//! Compiles a `VisualTemplate` into a complete, self-contained HTML
//! document: fixed-width table layout, inline styles only, never a script.
//!
//! Rendering always succeeds. Malformed input degrades (unknown kinds are
//! skipped, a button without a URL becomes plain text, unknown style hints
//! fall back) and each degradation is reported as a `RenderWarning`.
//!
//! Content is HTML-escaped before insertion. `{{name}}` placeholders
//! contain no escaped characters, so they survive rendering unchanged and
//! can be substituted afterwards.
//!
//! # Example
//!
//! ```ignore
//! let renderer = Renderer::default();
//! let rendered = renderer.render(&template);
//!
//! for warning in &rendered.warnings {
//!     tracing::warn!(%warning, "Template rendered with degraded block");
//! }
//! store(rendered.html);
//! ```

mod document;
mod escape;
mod fragments;
mod palette;
mod types;

pub use document::{render, Renderer};
pub use escape::{escape_html, is_safe_url};
pub use types::{RenderOptions, RenderWarning, Rendered};
