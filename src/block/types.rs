//! Block types and validation errors

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Banner title used when a template has no composition to start from
pub const DEFAULT_HEADER_TITLE: &str = "Notification";

/// Banner color used for empty templates and as the fallback for invalid colors
pub const DEFAULT_HEADER_COLOR: &str = "#2563eb";

/// Block validation error.
///
/// Reported to whoever assembled the template, before it is saved.
/// The renderer never raises these; it degrades instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBlock {
    #[error("Block {block_id} has unknown type: {kind}")]
    UnknownKind { block_id: String, kind: String },

    #[error("Block {block_id} ({kind}) is missing required property: {property}")]
    MissingProperty {
        block_id: String,
        kind: BlockKind,
        property: &'static str,
    },
}

impl InvalidBlock {
    /// ID of the offending block
    pub fn block_id(&self) -> &str {
        match self {
            InvalidBlock::UnknownKind { block_id, .. } => block_id,
            InvalidBlock::MissingProperty { block_id, .. } => block_id,
        }
    }
}

/// Result type for block validation
pub type BlockResult<T> = Result<T, InvalidBlock>;

/// Kind of a content block.
///
/// Serialized as its kebab-case name. Names outside the closed set
/// deserialize into `Unknown` so a single forward-incompatible block
/// does not make a whole template unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    Greeting,
    Heading,
    Text,
    Button,
    SuccessBox,
    InfoBox,
    WarningBox,
    ErrorBox,
    DetailsTable,
    AmountDisplay,
    NumberedList,
    Footer,
    /// A kind name outside the supported vocabulary
    Unknown(String),
}

impl BlockKind {
    /// Every supported kind, in palette order
    pub const SUPPORTED: [BlockKind; 12] = [
        BlockKind::Greeting,
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Button,
        BlockKind::SuccessBox,
        BlockKind::InfoBox,
        BlockKind::WarningBox,
        BlockKind::ErrorBox,
        BlockKind::DetailsTable,
        BlockKind::AmountDisplay,
        BlockKind::NumberedList,
        BlockKind::Footer,
    ];

    /// Parse a kind name. Never fails; unrecognized names become `Unknown`.
    pub fn parse(name: &str) -> Self {
        match name {
            "greeting" => BlockKind::Greeting,
            "heading" => BlockKind::Heading,
            "text" => BlockKind::Text,
            "button" => BlockKind::Button,
            "success-box" => BlockKind::SuccessBox,
            "info-box" => BlockKind::InfoBox,
            "warning-box" => BlockKind::WarningBox,
            "error-box" => BlockKind::ErrorBox,
            "details-table" => BlockKind::DetailsTable,
            "amount-display" => BlockKind::AmountDisplay,
            "numbered-list" => BlockKind::NumberedList,
            "footer" => BlockKind::Footer,
            other => BlockKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Greeting => "greeting",
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Button => "button",
            BlockKind::SuccessBox => "success-box",
            BlockKind::InfoBox => "info-box",
            BlockKind::WarningBox => "warning-box",
            BlockKind::ErrorBox => "error-box",
            BlockKind::DetailsTable => "details-table",
            BlockKind::AmountDisplay => "amount-display",
            BlockKind::NumberedList => "numbered-list",
            BlockKind::Footer => "footer",
            BlockKind::Unknown(name) => name,
        }
    }

    /// Whether this kind belongs to the supported vocabulary
    pub fn is_known(&self) -> bool {
        !matches!(self, BlockKind::Unknown(_))
    }

    /// Properties that must be present and non-empty for this kind
    pub fn required_properties(&self) -> &'static [&'static str] {
        match self {
            BlockKind::Button => &["url"],
            _ => &[],
        }
    }
}

impl From<String> for BlockKind {
    fn from(name: String) -> Self {
        BlockKind::parse(&name)
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn generate_block_id() -> String {
    Uuid::new_v4().to_string()
}

/// One visual content unit of an email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Identifier unique within its template (generated when absent)
    #[serde(default = "generate_block_id")]
    pub id: String,

    /// Block kind
    #[serde(rename = "type", alias = "kind")]
    pub kind: BlockKind,

    /// Literal content; its line structure depends on the kind
    #[serde(default)]
    pub content: String,

    /// Rendering hints (`url`, `color`, `label`, `style`, `size`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl Block {
    /// Create a block with a freshly generated ID
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self::with_id(generate_block_id(), kind, content)
    }

    /// Create a block with an explicit ID
    pub fn with_id(id: impl Into<String>, kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: content.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set a rendering property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Look up a property, treating blank values as absent
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Deep copy of this block under a new ID
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: generate_block_id(),
            ..self.clone()
        }
    }

    /// Validate the block's kind and its required properties
    pub fn validate(&self) -> BlockResult<()> {
        if let BlockKind::Unknown(name) = &self.kind {
            return Err(InvalidBlock::UnknownKind {
                block_id: self.id.clone(),
                kind: name.clone(),
            });
        }

        for property in self.kind.required_properties() {
            if self.property(property).is_none() {
                return Err(InvalidBlock::MissingProperty {
                    block_id: self.id.clone(),
                    kind: self.kind.clone(),
                    property,
                });
            }
        }

        Ok(())
    }
}

fn default_header_title() -> String {
    DEFAULT_HEADER_TITLE.to_string()
}

fn default_header_color() -> String {
    DEFAULT_HEADER_COLOR.to_string()
}

/// An ordered block composition plus banner metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTemplate {
    /// Blocks in display order
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Text shown in the banner
    #[serde(default = "default_header_title")]
    pub header_title: String,

    /// Banner background, `#rrggbb`
    #[serde(default = "default_header_color")]
    pub header_color: String,
}

impl Default for VisualTemplate {
    fn default() -> Self {
        Self::empty()
    }
}

impl VisualTemplate {
    /// Create a template with no blocks
    pub fn new(header_title: impl Into<String>, header_color: impl Into<String>) -> Self {
        Self {
            blocks: Vec::new(),
            header_title: header_title.into(),
            header_color: header_color.into(),
        }
    }

    /// The placeholder template used when no default composition exists
    pub fn empty() -> Self {
        Self::new(DEFAULT_HEADER_TITLE, DEFAULT_HEADER_COLOR)
    }

    /// Append a block
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Deep copy with every block assigned a new ID
    pub fn with_fresh_ids(&self) -> Self {
        Self {
            blocks: self.blocks.iter().map(Block::with_fresh_id).collect(),
            header_title: self.header_title.clone(),
            header_color: self.header_color.clone(),
        }
    }

    /// Validate every block, returning the first violation
    pub fn validate(&self) -> BlockResult<()> {
        self.blocks.iter().try_for_each(Block::validate)
    }

    /// All block violations, in block order
    pub fn invalid_blocks(&self) -> Vec<InvalidBlock> {
        self.blocks
            .iter()
            .filter_map(|block| block.validate().err())
            .collect()
    }

    /// The banner color in canonical `#rrggbb` form, if it is well formed
    pub fn normalized_header_color(&self) -> Option<String> {
        normalize_hex_color(&self.header_color)
    }
}

/// Normalize a six-digit hex color (with or without `#`) to lowercase `#rrggbb`
pub fn normalize_hex_color(value: &str) -> Option<String> {
    let digits = value.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", digits.to_ascii_lowercase()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_parse_round_trip() {
        for kind in BlockKind::SUPPORTED.iter() {
            assert_eq!(BlockKind::parse(kind.as_str()), *kind);
            assert!(kind.is_known());
        }
    }

    #[test]
    fn test_kind_unknown_keeps_name() {
        let kind = BlockKind::parse("carousel");
        assert_eq!(kind, BlockKind::Unknown("carousel".to_string()));
        assert_eq!(String::from(kind), "carousel");
    }

    #[test]
    fn test_block_deserialize_with_type_field() {
        let block: Block = serde_json::from_value(json!({
            "id": "b1",
            "type": "amount-display",
            "content": "{{amount}}",
            "properties": { "label": "Total", "style": "success" }
        }))
        .unwrap();

        assert_eq!(block.id, "b1");
        assert_eq!(block.kind, BlockKind::AmountDisplay);
        assert_eq!(block.property("label"), Some("Total"));
    }

    #[test]
    fn test_block_deserialize_kind_alias_and_generated_id() {
        let block: Block = serde_json::from_value(json!({
            "kind": "text",
            "content": "Hello"
        }))
        .unwrap();

        assert_eq!(block.kind, BlockKind::Text);
        assert!(!block.id.is_empty());
        assert!(block.properties.is_empty());
    }

    #[test]
    fn test_block_deserialize_unknown_kind() {
        let block: Block = serde_json::from_value(json!({
            "id": "b9",
            "type": "video",
            "content": "x"
        }))
        .unwrap();

        assert_eq!(block.kind, BlockKind::Unknown("video".to_string()));
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["type"], "video");
    }

    #[test]
    fn test_block_serialize_omits_empty_properties() {
        let block = Block::with_id("b1", BlockKind::Footer, "Bye");
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value, json!({ "id": "b1", "type": "footer", "content": "Bye" }));
    }

    #[test]
    fn test_validate_button_requires_url() {
        let button = Block::with_id("b1", BlockKind::Button, "Pay now");
        assert_eq!(
            button.validate(),
            Err(InvalidBlock::MissingProperty {
                block_id: "b1".to_string(),
                kind: BlockKind::Button,
                property: "url",
            })
        );

        let blank = button.clone().with_property("url", "   ");
        assert!(blank.validate().is_err());

        let ok = button.with_property("url", "{{paymentUrl}}");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_validate_other_kinds_have_no_required_properties() {
        for kind in BlockKind::SUPPORTED.iter().filter(|k| **k != BlockKind::Button) {
            let block = Block::new(kind.clone(), "content");
            assert!(block.validate().is_ok(), "{} should be valid", kind);
        }
    }

    #[test]
    fn test_validate_unknown_kind() {
        let block = Block::with_id("b7", BlockKind::parse("marquee"), "x");
        let err = block.validate().unwrap_err();

        assert_eq!(err.block_id(), "b7");
        assert!(matches!(err, InvalidBlock::UnknownKind { ref kind, .. } if kind == "marquee"));
    }

    #[test]
    fn test_template_invalid_blocks_collects_all() {
        let template = VisualTemplate::new("Title", "#000000")
            .with_block(Block::with_id("a", BlockKind::Text, "ok"))
            .with_block(Block::with_id("b", BlockKind::Button, "no url"))
            .with_block(Block::with_id("c", BlockKind::parse("gif"), ""));

        let errors = template.invalid_blocks();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].block_id(), "b");
        assert_eq!(errors[1].block_id(), "c");
        assert_eq!(template.validate().unwrap_err().block_id(), "b");
    }

    #[test]
    fn test_template_fresh_ids_deep_copy() {
        let original = VisualTemplate::new("T", "#111111")
            .with_block(Block::with_id("x", BlockKind::Text, "one"))
            .with_block(Block::with_id("y", BlockKind::Text, "two"));

        let copy = original.with_fresh_ids();
        assert_eq!(copy.blocks.len(), 2);
        assert_ne!(copy.blocks[0].id, "x");
        assert_ne!(copy.blocks[0].id, copy.blocks[1].id);
        assert_eq!(copy.blocks[1].content, "two");
        assert_eq!(original.blocks[0].id, "x");
    }

    #[test]
    fn test_template_json_shape() {
        let template: VisualTemplate = serde_json::from_value(json!({
            "blocks": [{ "id": "1", "type": "text", "content": "Hi" }],
            "headerTitle": "Welcome",
            "headerColor": "#16a34a"
        }))
        .unwrap();

        assert_eq!(template.header_title, "Welcome");
        assert_eq!(template.blocks.len(), 1);

        let empty: VisualTemplate = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, VisualTemplate::empty());
    }

    #[test]
    fn test_normalize_hex_color() {
        assert_eq!(normalize_hex_color("#A1B2C3"), Some("#a1b2c3".to_string()));
        assert_eq!(normalize_hex_color("000000"), Some("#000000".to_string()));
        assert_eq!(normalize_hex_color("#fff"), None);
        assert_eq!(normalize_hex_color("red"), None);
        assert_eq!(normalize_hex_color("#12345g"), None);
        assert_eq!(normalize_hex_color("#000000;background:url(x)"), None);
    }
}
