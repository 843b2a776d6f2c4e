//! Renderer options, output and warnings

use std::fmt;

use serde::Serialize;

/// Layout settings applied to every rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of the content column in pixels
    pub content_width: u32,
    /// CSS font stack for the whole document
    pub font_family: String,
    /// Page background around the content column, `#rrggbb`
    pub background_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            content_width: 600,
            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif"
                .to_string(),
            background_color: "#f4f4f5".to_string(),
        }
    }
}

/// A degradation applied while rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderWarning {
    /// Block skipped because its kind is not supported
    UnknownKind { block_id: String, kind: String },
    /// Button rendered as plain text because it has no URL
    MissingButtonUrl { block_id: String },
    /// Button rendered as plain text because its URL uses a scriptable scheme
    UnsafeButtonUrl { block_id: String, url: String },
    /// Button rendered with the neutral variant
    UnknownButtonColor { block_id: String, color: String },
    /// Heading rendered at medium size
    UnknownHeadingSize { block_id: String, size: String },
    /// Amount rendered with the default palette
    UnknownAmountStyle { block_id: String, style: String },
    /// Banner rendered with the default color
    InvalidHeaderColor { color: String },
}

impl RenderWarning {
    /// Stable short code, used as a metrics label
    pub fn code(&self) -> &'static str {
        match self {
            RenderWarning::UnknownKind { .. } => "unknown_kind",
            RenderWarning::MissingButtonUrl { .. } => "missing_button_url",
            RenderWarning::UnsafeButtonUrl { .. } => "unsafe_button_url",
            RenderWarning::UnknownButtonColor { .. } => "unknown_button_color",
            RenderWarning::UnknownHeadingSize { .. } => "unknown_heading_size",
            RenderWarning::UnknownAmountStyle { .. } => "unknown_amount_style",
            RenderWarning::InvalidHeaderColor { .. } => "invalid_header_color",
        }
    }

    /// ID of the block the warning concerns, if any
    pub fn block_id(&self) -> Option<&str> {
        match self {
            RenderWarning::UnknownKind { block_id, .. }
            | RenderWarning::MissingButtonUrl { block_id }
            | RenderWarning::UnsafeButtonUrl { block_id, .. }
            | RenderWarning::UnknownButtonColor { block_id, .. }
            | RenderWarning::UnknownHeadingSize { block_id, .. }
            | RenderWarning::UnknownAmountStyle { block_id, .. } => Some(block_id),
            RenderWarning::InvalidHeaderColor { .. } => None,
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::UnknownKind { block_id, kind } => {
                write!(f, "block {} skipped: unknown type '{}'", block_id, kind)
            }
            RenderWarning::MissingButtonUrl { block_id } => {
                write!(f, "button {} has no url, rendered as text", block_id)
            }
            RenderWarning::UnsafeButtonUrl { block_id, url } => {
                write!(f, "button {} url '{}' is not allowed, rendered as text", block_id, url)
            }
            RenderWarning::UnknownButtonColor { block_id, color } => {
                write!(f, "button {} color '{}' unknown, using gray", block_id, color)
            }
            RenderWarning::UnknownHeadingSize { block_id, size } => {
                write!(f, "heading {} size '{}' unknown, using medium", block_id, size)
            }
            RenderWarning::UnknownAmountStyle { block_id, style } => {
                write!(f, "amount {} style '{}' unknown, using default", block_id, style)
            }
            RenderWarning::InvalidHeaderColor { color } => {
                write!(f, "header color '{}' is not #rrggbb, using default", color)
            }
        }
    }
}

/// A rendered document plus the degradations applied to produce it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub html: String,
    pub warnings: Vec<RenderWarning>,
}

impl Rendered {
    /// Whether the template rendered without any degradation
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
