//! Draft validation and compilation

use std::collections::BTreeSet;

use crate::render::Renderer;
use crate::variables::extract_variables;

use super::types::{CompiledTemplate, StoredTemplate, TemplateDraft, TemplateError, TemplateResult};

/// Placeholder names available in a stored template, sorted
pub fn available_variables(subject: &str, html: &str) -> Vec<String> {
    let mut names: BTreeSet<String> = extract_variables(subject);
    names.extend(extract_variables(html));
    names.into_iter().collect()
}

impl TemplateDraft {
    /// Validate the draft for saving
    pub fn validate(&self) -> TemplateResult<()> {
        // Validate slug
        if self.slug.trim().is_empty() {
            return Err(TemplateError::MissingField("slug"));
        }

        if self.slug.len() > 64 {
            return Err(TemplateError::InvalidSlug(
                "Slug must be 1-64 characters".to_string(),
            ));
        }

        if !self
            .slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TemplateError::InvalidSlug(
                "Slug must contain only alphanumeric, dash, or underscore".to_string(),
            ));
        }

        // Validate subject
        if self.subject.trim().is_empty() {
            return Err(TemplateError::MissingField("subject"));
        }

        // Validate composition
        if self.template.is_empty() {
            return Err(TemplateError::MissingField("blocks"));
        }

        self.template.validate()?;

        if self.template.normalized_header_color().is_none() {
            return Err(TemplateError::InvalidTemplate(format!(
                "Header color must be a #rrggbb hex value, got '{}'",
                self.template.header_color
            )));
        }

        Ok(())
    }

    /// Validate, render, and build the record for persistence
    pub fn compile(&self, renderer: &Renderer) -> TemplateResult<CompiledTemplate> {
        if let Err(e) = self.validate() {
            tracing::warn!(slug = %self.slug, error = %e, "Template draft rejected");
            return Err(e);
        }

        let rendered = renderer.render(&self.template);
        let available_variables = available_variables(&self.subject, &rendered.html);

        tracing::debug!(
            slug = %self.slug,
            blocks = self.template.blocks.len(),
            variables = available_variables.len(),
            warnings = rendered.warnings.len(),
            "Template compiled"
        );

        Ok(CompiledTemplate {
            record: StoredTemplate {
                slug: self.slug.clone(),
                subject: self.subject.clone(),
                blocks: Some(self.template.clone()),
                html: rendered.html,
                available_variables,
            },
            warnings: rendered.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, BlockKind, InvalidBlock, VisualTemplate};

    fn valid_draft() -> TemplateDraft {
        TemplateDraft::new(
            "order-shipped",
            "Order {{orderNumber}} shipped",
            VisualTemplate::new("Shipped", "#2563eb")
                .with_block(Block::with_id("1", BlockKind::Greeting, "Hi {{buyerName}},"))
                .with_block(
                    Block::with_id("2", BlockKind::Button, "Track")
                        .with_property("url", "{{trackingUrl}}"),
                ),
        )
    }

    #[test]
    fn test_available_variables_union_sorted() {
        let names = available_variables("{{b}} {{a}}", "<p>{{c}} {{a}}</p>");
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_validate_valid() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_subject() {
        let draft = TemplateDraft {
            subject: "   ".to_string(),
            ..valid_draft()
        };
        assert!(matches!(
            draft.validate(),
            Err(TemplateError::MissingField("subject"))
        ));
    }

    #[test]
    fn test_validate_missing_blocks() {
        let draft = TemplateDraft {
            template: VisualTemplate::new("Shipped", "#2563eb"),
            ..valid_draft()
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, TemplateError::MissingField("blocks")));
        assert_eq!(err.to_string(), "Missing required field: blocks");
    }

    #[test]
    fn test_validate_missing_slug() {
        let draft = TemplateDraft {
            slug: String::new(),
            ..valid_draft()
        };
        assert!(matches!(
            draft.validate(),
            Err(TemplateError::MissingField("slug"))
        ));
    }

    #[test]
    fn test_validate_invalid_slug_chars() {
        let draft = TemplateDraft {
            slug: "invalid/slug".to_string(),
            ..valid_draft()
        };
        assert!(matches!(
            draft.validate(),
            Err(TemplateError::InvalidSlug(_))
        ));
    }

    #[test]
    fn test_validate_invalid_block() {
        let mut draft = valid_draft();
        draft
            .template
            .blocks
            .push(Block::with_id("3", BlockKind::Button, "No url"));

        let err = draft.validate().unwrap_err();
        assert_eq!(err.code(), "INVALID_BLOCK");
        assert!(matches!(
            err,
            TemplateError::InvalidBlock(InvalidBlock::MissingProperty { ref block_id, .. }) if block_id == "3"
        ));
    }

    #[test]
    fn test_validate_invalid_header_color() {
        let mut draft = valid_draft();
        draft.template.header_color = "blue".to_string();
        assert!(matches!(
            draft.validate(),
            Err(TemplateError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_compile_builds_record() {
        let compiled = valid_draft().compile(&Renderer::default()).unwrap();
        let record = compiled.record;

        assert_eq!(record.slug, "order-shipped");
        assert!(!record.is_legacy());
        assert!(record.html.contains("{{buyerName}}"));
        assert!(record.html.contains("href=\"{{trackingUrl}}\""));
        assert_eq!(
            record.available_variables,
            vec!["buyerName", "orderNumber", "trackingUrl"]
        );
        assert!(compiled.warnings.is_empty());
    }

    #[test]
    fn test_compile_reports_style_warnings() {
        let mut draft = valid_draft();
        draft.template.blocks.push(
            Block::with_id("3", BlockKind::Heading, "Note").with_property("size", "gigantic"),
        );

        let compiled = draft.compile(&Renderer::default()).unwrap();
        assert_eq!(compiled.warnings.len(), 1);
        assert_eq!(compiled.warnings[0].code(), "unknown_heading_size");
    }

    #[test]
    fn test_compile_refuses_without_partial_output() {
        let draft = TemplateDraft {
            subject: String::new(),
            ..valid_draft()
        };
        assert!(draft.compile(&Renderer::default()).is_err());
    }

    #[test]
    fn test_from_default_seeds_subject_and_blocks() {
        let draft = TemplateDraft::from_default("payment-received");
        assert_eq!(draft.subject, "You received a payment of {{amount}}");
        assert!(!draft.template.is_empty());
        assert!(draft.validate().is_ok());

        let compiled = draft.compile(&Renderer::default()).unwrap();
        assert!(compiled
            .record
            .available_variables
            .contains(&"amount".to_string()));
    }

    #[test]
    fn test_from_default_unknown_slug() {
        let draft = TemplateDraft::from_default("custom-promo");
        assert_eq!(draft.slug, "custom-promo");
        assert!(draft.subject.is_empty());
        assert_eq!(draft.template, VisualTemplate::empty());
        assert!(matches!(
            draft.validate(),
            Err(TemplateError::MissingField("subject"))
        ));
    }
}
