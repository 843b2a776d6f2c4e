//! Email template authoring flow.
//!
//! This module provides:
//! - `TemplateDraft`: slug + subject + block composition being edited
//! - Compilation of a draft into the `StoredTemplate` record handed to
//!   persistence (rendered HTML plus its available variables)
//! - Preview rendering with sample values
//!
//! A draft is refused, naming the offending field, when its subject or
//! blocks are missing or a block is malformed. Nothing is partially saved.
//!
//! # Example
//!
//! ```ignore
//! let renderer = Renderer::default();
//!
//! // Seed a new template from the catalog
//! let mut draft = TemplateDraft::from_default("payment-received");
//! draft.subject = "Cha-ching! {{amount}} received".to_string();
//!
//! // Compile for persistence
//! let compiled = draft.compile(&renderer)?;
//! save(compiled.record);
//!
//! // Show the author a preview
//! let preview = draft.preview(&renderer, sample_values());
//! ```

mod compile;
mod preview;
mod types;

pub use compile::available_variables;
pub use preview::{preview, Preview};
pub use types::{CompiledTemplate, StoredTemplate, TemplateDraft, TemplateError, TemplateResult};
