//! Draft and stored template types and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::{InvalidBlock, VisualTemplate};
use crate::catalog::{self, LegacyPolicy, Reconciled};
use crate::render::RenderWarning;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Invalid block: {0}")]
    InvalidBlock(#[from] InvalidBlock),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

impl TemplateError {
    /// Stable short code, used in API responses and metrics
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::MissingField(_) => "MISSING_FIELD",
            TemplateError::InvalidSlug(_) => "INVALID_SLUG",
            TemplateError::InvalidBlock(_) => "INVALID_BLOCK",
            TemplateError::InvalidTemplate(_) => "INVALID_TEMPLATE",
        }
    }
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A template being authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    /// Notification type identifier (alphanumeric, dash, underscore)
    pub slug: String,

    /// Subject line, may contain placeholders
    #[serde(default)]
    pub subject: String,

    /// Block composition
    #[serde(default, alias = "blocks")]
    pub template: VisualTemplate,
}

impl TemplateDraft {
    pub fn new(
        slug: impl Into<String>,
        subject: impl Into<String>,
        template: VisualTemplate,
    ) -> Self {
        Self {
            slug: slug.into(),
            subject: subject.into(),
            template,
        }
    }

    /// Seed a new draft from the slug's default composition.
    ///
    /// Unknown slugs get an empty subject and the empty template.
    pub fn from_default(slug: &str) -> Self {
        match catalog::lookup(slug) {
            Some(composition) => {
                Self::new(slug, composition.subject.clone(), composition.instantiate())
            }
            None => Self::new(slug, "", VisualTemplate::empty()),
        }
    }
}

/// The record shape handed to persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTemplate {
    pub slug: String,

    pub subject: String,

    /// Block composition; absent on legacy records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<VisualTemplate>,

    /// Compiled HTML
    pub html: String,

    /// Placeholder names found in subject and HTML
    #[serde(default)]
    pub available_variables: Vec<String>,
}

impl StoredTemplate {
    /// Whether this record predates block storage
    pub fn is_legacy(&self) -> bool {
        self.blocks.is_none()
    }

    /// Block-level view for editing, using the built-in catalog
    pub fn reconcile(&self, policy: LegacyPolicy) -> Reconciled {
        catalog::reconcile(self, policy)
    }
}

/// Output of a successful compile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledTemplate {
    pub record: StoredTemplate,

    /// Degradations applied while rendering (style hints only; shape
    /// violations are rejected before rendering)
    pub warnings: Vec<RenderWarning>,
}
