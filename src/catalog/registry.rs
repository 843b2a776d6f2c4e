//! Process-wide catalog registry

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::block::VisualTemplate;
use crate::template::StoredTemplate;

use super::defaults;
use super::types::{DefaultComposition, LegacyPolicy, ReconcileOrigin, Reconciled};

lazy_static! {
    static ref DEFAULT_CATALOG: DefaultCatalog = DefaultCatalog::new(defaults::compositions());
}

/// Immutable slug → composition lookup table
#[derive(Debug, Clone)]
pub struct DefaultCatalog {
    entries: Vec<DefaultComposition>,
    index: HashMap<String, usize>,
}

impl DefaultCatalog {
    /// The built-in catalog
    pub fn global() -> &'static DefaultCatalog {
        &DEFAULT_CATALOG
    }

    /// Build a catalog. When two entries share a slug the first one wins.
    pub fn new(entries: Vec<DefaultComposition>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            if index.contains_key(&entry.slug) {
                tracing::warn!(slug = %entry.slug, "Duplicate default composition ignored");
                continue;
            }
            index.insert(entry.slug.clone(), kept.len());
            kept.push(entry);
        }

        Self {
            entries: kept,
            index,
        }
    }

    /// Canonical composition for `slug`
    pub fn lookup(&self, slug: &str) -> Option<&DefaultComposition> {
        self.index.get(slug).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    /// Fresh copy of the slug's default, or the empty template on a miss
    pub fn instantiate(&self, slug: &str) -> VisualTemplate {
        match self.lookup(slug) {
            Some(composition) => composition.instantiate(),
            None => VisualTemplate::empty(),
        }
    }

    /// Block-level template for a stored record.
    ///
    /// Records carrying block data are returned as stored. Legacy records
    /// with only compiled HTML are handled per `policy`; their HTML is
    /// never parsed back into blocks.
    pub fn reconcile(&self, record: &StoredTemplate, policy: LegacyPolicy) -> Reconciled {
        if let Some(blocks) = &record.blocks {
            return Reconciled {
                origin: ReconcileOrigin::Stored,
                template: Some(blocks.clone()),
            };
        }

        if policy == LegacyPolicy::HtmlOnly {
            return Reconciled {
                origin: ReconcileOrigin::HtmlOnly,
                template: None,
            };
        }

        let reconciled = match self.lookup(&record.slug) {
            Some(composition) => Reconciled {
                origin: ReconcileOrigin::CatalogDefault,
                template: Some(composition.instantiate()),
            },
            None => Reconciled {
                origin: ReconcileOrigin::Empty,
                template: Some(VisualTemplate::empty()),
            },
        };

        tracing::info!(
            slug = %record.slug,
            origin = ?reconciled.origin,
            "Legacy template reset for block editing"
        );

        reconciled
    }

    /// Entries in listing order
    pub fn iter(&self) -> impl Iterator<Item = &DefaultComposition> {
        self.entries.iter()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.slug.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look up a slug in the built-in catalog
pub fn lookup(slug: &str) -> Option<&'static DefaultComposition> {
    DefaultCatalog::global().lookup(slug)
}

/// Instantiate a slug from the built-in catalog
pub fn instantiate(slug: &str) -> VisualTemplate {
    DefaultCatalog::global().instantiate(slug)
}

/// Reconcile a stored record against the built-in catalog
pub fn reconcile(record: &StoredTemplate, policy: LegacyPolicy) -> Reconciled {
    DefaultCatalog::global().reconcile(record, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::block::{Block, BlockKind};
    use crate::render::render;
    use crate::variables::{extract_variables, sample_values};

    fn legacy_record(slug: &str) -> StoredTemplate {
        StoredTemplate {
            slug: slug.to_string(),
            subject: "Old subject".to_string(),
            blocks: None,
            html: "<p>Hand-written legacy HTML</p>".to_string(),
            available_variables: vec![],
        }
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let composition = lookup("payment-received").unwrap();
        assert_eq!(composition.slug, "payment-received");
        assert!(composition.subject.contains("{{amount}}"));
        assert!(lookup("no-such-slug").is_none());
    }

    #[test]
    fn test_catalog_slugs_unique_and_ordered() {
        let catalog = DefaultCatalog::global();
        let slugs: Vec<&str> = catalog.slugs().collect();
        let unique: HashSet<&str> = slugs.iter().copied().collect();

        assert_eq!(slugs.len(), unique.len());
        assert_eq!(slugs.len(), catalog.len());
        assert_eq!(slugs[0], "welcome");
    }

    #[test]
    fn test_canonical_block_ids() {
        let composition = lookup("welcome").unwrap();
        assert_eq!(composition.blocks[0].id, "welcome-1");
        assert_eq!(composition.template().blocks[0].id, "welcome-1");
    }

    #[test]
    fn test_instantiate_ids_are_disjoint() {
        let canonical: HashSet<String> = lookup("payment-received")
            .unwrap()
            .blocks
            .iter()
            .map(|b| b.id.clone())
            .collect();

        let first = instantiate("payment-received");
        let second = instantiate("payment-received");

        let first_ids: HashSet<String> = first.blocks.iter().map(|b| b.id.clone()).collect();
        let second_ids: HashSet<String> = second.blocks.iter().map(|b| b.id.clone()).collect();

        assert_eq!(first_ids.len(), first.blocks.len());
        assert!(first_ids.is_disjoint(&second_ids));
        assert!(first_ids.is_disjoint(&canonical));
        assert!(second_ids.is_disjoint(&canonical));
    }

    #[test]
    fn test_instantiate_copy_is_independent() {
        let mut copy = instantiate("welcome");
        copy.blocks[0].content = "Edited".to_string();
        copy.blocks.push(Block::new(BlockKind::Text, "Extra"));

        let canonical = lookup("welcome").unwrap();
        assert_eq!(canonical.blocks[0].content, "Hi {{userName}},");
        assert_ne!(canonical.blocks.len(), copy.blocks.len());
    }

    #[test]
    fn test_instantiate_preserves_content_and_order() {
        let canonical = lookup("offer-accepted").unwrap();
        let copy = instantiate("offer-accepted");

        assert_eq!(copy.header_title, canonical.header_title);
        assert_eq!(copy.header_color, canonical.header_color);
        let kinds: Vec<&BlockKind> = copy.blocks.iter().map(|b| &b.kind).collect();
        let expected: Vec<&BlockKind> = canonical.blocks.iter().map(|b| &b.kind).collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_instantiate_unknown_slug_is_empty() {
        let template = instantiate("custom-promo");
        assert_eq!(template, VisualTemplate::empty());
        assert!(template.is_empty());
    }

    #[test]
    fn test_reconcile_legacy_uses_default() {
        let reconciled = reconcile(
            &legacy_record("payout-sent"),
            LegacyPolicy::ResetToDefault,
        );

        assert_eq!(reconciled.origin, ReconcileOrigin::CatalogDefault);
        assert!(reconciled.replaced_legacy());
        let template = reconciled.template.unwrap();
        assert_eq!(template.blocks.len(), lookup("payout-sent").unwrap().blocks.len());
        assert_ne!(template.blocks[0].id, "payout-sent-1");
    }

    #[test]
    fn test_reconcile_legacy_unknown_slug_is_empty() {
        let reconciled = reconcile(
            &legacy_record("custom-promo"),
            LegacyPolicy::ResetToDefault,
        );
        assert_eq!(reconciled.origin, ReconcileOrigin::Empty);
        assert_eq!(reconciled.template, Some(VisualTemplate::empty()));
    }

    #[test]
    fn test_reconcile_stored_blocks_returned_verbatim() {
        let blocks = VisualTemplate::new("Custom", "#123456")
            .with_block(Block::with_id("keep-me", BlockKind::Text, "Edited copy"));
        let record = StoredTemplate {
            blocks: Some(blocks.clone()),
            ..legacy_record("payment-received")
        };

        let reconciled = reconcile(&record, LegacyPolicy::HtmlOnly);
        assert_eq!(reconciled.origin, ReconcileOrigin::Stored);
        assert!(!reconciled.replaced_legacy());
        assert_eq!(reconciled.template, Some(blocks));
    }

    #[test]
    fn test_reconcile_html_only_policy() {
        let reconciled = DefaultCatalog::global()
            .reconcile(&legacy_record("payment-received"), LegacyPolicy::HtmlOnly);

        assert_eq!(reconciled.origin, ReconcileOrigin::HtmlOnly);
        assert!(!reconciled.is_block_editable());
    }

    #[test]
    fn test_reconcile_helper_honors_policy() {
        let record = legacy_record("payment-received");

        let html_only = reconcile(&record, LegacyPolicy::HtmlOnly);
        assert_eq!(html_only.origin, ReconcileOrigin::HtmlOnly);
        assert!(html_only.template.is_none());

        let reset = reconcile(&record, LegacyPolicy::ResetToDefault);
        assert_eq!(reset.origin, ReconcileOrigin::CatalogDefault);
        assert_eq!(record.reconcile(LegacyPolicy::HtmlOnly), html_only);
    }

    #[test]
    fn test_duplicate_slugs_first_wins() {
        let first = lookup("welcome").unwrap().clone();
        let mut second = first.clone();
        second.name = "Shadow".to_string();

        let catalog = DefaultCatalog::new(vec![first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("welcome").unwrap().name, "Welcome");
    }

    #[test]
    fn test_every_default_is_valid_and_renders_clean() {
        for composition in DefaultCatalog::global().iter() {
            let template = composition.template();
            assert!(
                template.validate().is_ok(),
                "{} has invalid blocks",
                composition.slug
            );
            assert!(!template.is_empty(), "{} has no blocks", composition.slug);

            let rendered = render(&template);
            assert!(
                rendered.is_clean(),
                "{} rendered with warnings: {:?}",
                composition.slug,
                rendered.warnings
            );
        }
    }

    #[test]
    fn test_every_default_placeholder_has_a_sample() {
        let samples = sample_values();
        for composition in DefaultCatalog::global().iter() {
            let html = render(&composition.template()).html;
            let text = format!("{}{}", composition.subject, html);
            for name in extract_variables(&text) {
                assert!(
                    samples.contains(&name),
                    "{} uses {{{{{}}}}} without a sample value",
                    composition.slug,
                    name
                );
            }
        }
    }
}
