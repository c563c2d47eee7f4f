//! Built-in revision content for electrical-trade certification study.
//!
//! One module per authored card set under `sets`, plus the catalog of set
//! descriptors. The two are authored independently, which is exactly why
//! [`load`] runs them through [`Registry::load`] rather than assuming they
//! agree.

mod catalog;
mod sets;

use std::collections::HashMap;

use revision_core::{Card, LoadError, Registry, SetMeta};

/// All built-in card sets, keyed by set id.
pub fn builtin_sets() -> HashMap<String, Vec<Card>> {
    sets::all()
}

/// Catalog descriptors for the built-in sets, in display order.
pub fn catalog() -> Vec<SetMeta> {
    catalog::entries()
}

/// Build the validated registry over the built-in content.
///
/// Intended to run once at application startup; the returned registry is
/// immutable and can be shared freely afterwards.
pub fn load() -> Result<Registry, LoadError> {
    Registry::load(builtin_sets(), catalog())
}
