//! Placeholder extraction and substitution

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::BuildHasher;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// `{{identifier}}` where identifier is ASCII word characters only
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap();
}

/// Source of values for placeholder substitution
pub trait VariableLookup {
    /// Value for `name`, or `None` to leave the placeholder untouched
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<S: BuildHasher> VariableLookup for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl VariableLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl VariableLookup for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            serde_json::Value::Number(n) => Some(Cow::Owned(n.to_string())),
            serde_json::Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            // A null value is missing data; keep the placeholder visible
            serde_json::Value::Null => None,
            // For arrays and objects, use JSON representation
            value => Some(Cow::Owned(value.to_string())),
        }
    }
}

impl<T: VariableLookup + ?Sized> VariableLookup for &T {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(name)
    }
}

/// Layered lookup: the first source wins, the second fills the gaps
impl<A: VariableLookup, B: VariableLookup> VariableLookup for (A, B) {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.0.lookup(name).or_else(|| self.1.lookup(name))
    }
}

/// Distinct placeholder names appearing in `text`.
///
/// Malformed braces are ignored, never an error.
pub fn extract_variables(text: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Replace every `{{name}}` whose name resolves in `values`.
///
/// Unknown names are left as-is. Substituted values are not scanned
/// again, so a value containing `{{...}}` is inserted literally.
pub fn substitute<L: VariableLookup + ?Sized>(text: &str, values: &L) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| match values.lookup(&caps[1]) {
            Some(value) => value.into_owned(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholder names still present in `text`, e.g. after substitution
pub fn unresolved(text: &str) -> BTreeSet<String> {
    extract_variables(text)
}
