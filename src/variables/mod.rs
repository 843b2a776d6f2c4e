//! Placeholder variables.
//!
//! This module provides:
//! - `{{identifier}}` extraction for computing a template's available variables
//! - Single-pass substitution that leaves unknown placeholders visible
//! - The sample value catalog used for previews
//!
//! # Example
//!
//! ```ignore
//! let names = extract_variables("Hi {{userName}}, you earned {{amount}}");
//! // {"amount", "userName"}
//!
//! let mut values = HashMap::new();
//! values.insert("userName".to_string(), "Alice".to_string());
//! let text = substitute("Hi {{userName}} ({{plan}})", &values);
//! // "Hi Alice ({{plan}})"
//! ```

mod placeholder;
mod samples;

pub use placeholder::{extract_variables, substitute, unresolved, VariableLookup};
pub use samples::{sample_values, SampleValues};
