//! Preview rendering with sample values

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::render::{escape_html, Renderer};
use crate::variables::{substitute, unresolved, VariableLookup};

use super::types::{StoredTemplate, TemplateDraft};

/// Subject and body as an author would see them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub subject: String,
    pub html: String,
    /// Placeholders that had no value, left visible in the output
    pub unresolved: Vec<String>,
}

/// Values escaped for insertion into markup
struct HtmlEscaped<'a, L: ?Sized>(&'a L);

impl<L: VariableLookup + ?Sized> VariableLookup for HtmlEscaped<'_, L> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.0.lookup(name).map(|value| Cow::Owned(escape_html(&value)))
    }
}

/// Substitute `values` into a subject and compiled HTML.
///
/// Values are HTML-escaped in the body; the subject is plain text and
/// receives them verbatim.
pub fn preview<L: VariableLookup + ?Sized>(subject: &str, html: &str, values: &L) -> Preview {
    let subject = substitute(subject, values);
    let html = substitute(html, &HtmlEscaped(values));

    let mut missing: BTreeSet<String> = unresolved(&subject);
    missing.extend(unresolved(&html));

    Preview {
        subject,
        html,
        unresolved: missing.into_iter().collect(),
    }
}

impl TemplateDraft {
    /// Render and preview the draft. Works on incomplete drafts too.
    pub fn preview<L: VariableLookup + ?Sized>(&self, renderer: &Renderer, values: &L) -> Preview {
        let rendered = renderer.render(&self.template);
        preview(&self.subject, &rendered.html, values)
    }
}

impl StoredTemplate {
    /// Preview the stored subject and HTML
    pub fn preview<L: VariableLookup + ?Sized>(&self, values: &L) -> Preview {
        preview(&self.subject, &self.html, values)
    }
}
