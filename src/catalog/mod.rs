//! Default template catalog.
//!
//! A read-only registry of pre-authored block compositions, one per
//! notification slug, built once on first use and shared across threads.
//!
//! - `lookup` returns the canonical composition for a slug
//! - `instantiate` deep-copies it with fresh block IDs, or returns the empty
//!   template when the slug has no default
//! - `reconcile` produces a block-level template for a stored record; legacy
//!   records that only kept compiled HTML start over from the slug's default
//!   (HTML is never parsed back into blocks)

mod defaults;
mod registry;
mod types;

pub use registry::{instantiate, lookup, reconcile, DefaultCatalog};
pub use types::{DefaultComposition, LegacyPolicy, ReconcileOrigin, Reconciled};
