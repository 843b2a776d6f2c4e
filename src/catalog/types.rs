//! Catalog entry and reconciliation types

use serde::{Deserialize, Serialize};

use crate::block::{Block, VisualTemplate};

/// A pre-authored composition for one notification type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultComposition {
    /// Notification type identifier, e.g. `payment-received`
    pub slug: String,
    /// Human-readable name
    pub name: String,
    /// Grouping used by listings (`account`, `payments`, `offers`, ...)
    pub category: String,
    /// Subject line, may contain placeholders
    pub subject: String,
    pub header_title: String,
    pub header_color: String,
    /// Blocks with placeholder content and canonical IDs
    pub blocks: Vec<Block>,
}

impl DefaultComposition {
    /// The canonical composition, IDs included
    pub fn template(&self) -> VisualTemplate {
        VisualTemplate {
            blocks: self.blocks.clone(),
            header_title: self.header_title.clone(),
            header_color: self.header_color.clone(),
        }
    }

    /// A private copy whose block IDs are all freshly generated
    pub fn instantiate(&self) -> VisualTemplate {
        VisualTemplate {
            blocks: self.blocks.iter().map(Block::with_fresh_id).collect(),
            header_title: self.header_title.clone(),
            header_color: self.header_color.clone(),
        }
    }
}

/// How stored records without block data are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyPolicy {
    /// Start over from the slug's default composition
    #[default]
    ResetToDefault,
    /// Leave the record HTML-only; it is not block-editable
    HtmlOnly,
}

/// Where a reconciled template came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileOrigin {
    /// The record's own block data
    Stored,
    /// A fresh instance of the slug's default composition
    CatalogDefault,
    /// The empty template; the slug has no default
    Empty,
    /// Legacy record kept as HTML only
    HtmlOnly,
}

impl ReconcileOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileOrigin::Stored => "stored",
            ReconcileOrigin::CatalogDefault => "catalog_default",
            ReconcileOrigin::Empty => "empty",
            ReconcileOrigin::HtmlOnly => "html_only",
        }
    }
}

/// Result of reconciling a stored record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciled {
    pub origin: ReconcileOrigin,
    /// `None` only for `HtmlOnly`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<VisualTemplate>,
}

impl Reconciled {
    /// Whether the editor can work on blocks
    pub fn is_block_editable(&self) -> bool {
        self.template.is_some()
    }

    /// Whether the editor is starting over rather than resuming the record
    pub fn replaced_legacy(&self) -> bool {
        matches!(
            self.origin,
            ReconcileOrigin::CatalogDefault | ReconcileOrigin::Empty
        )
    }
}
