//! Variant Registry
//!
//! Each closed set of typed wrappers (blocks, page properties, database
//! configurations) has a catalog: an enum of discriminators with one entry per
//! variant. The catalog maps the `type` string of a raw document to an enum
//! value, and the owning sum type matches on that value to build the wrapper,
//! so a new discriminator cannot be added without the compiler pointing at
//! every constructor that must handle it.
//!
//! Discriminators are exact and case-sensitive. A missing, empty or unknown
//! `type` is always `DocumentError::UnknownVariant`, never a default variant.

use crate::models::{Doc, DocumentError};

/// A closed catalog of discriminator strings
pub trait Catalog: Copy + Sized + 'static {
    /// Name of the catalog, used in errors and logs
    const KIND: &'static str;

    /// Every entry of the catalog
    const ALL: &'static [Self];

    /// Wire discriminator of this entry
    fn as_str(&self) -> &'static str;

    /// Look a discriminator up
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::UnknownVariant` when the string is not in the catalog.
    fn lookup(discriminator: &str) -> Result<Self, DocumentError> {
        Self::ALL
            .iter()
            .copied()
            .find(|entry| entry.as_str() == discriminator)
            .ok_or_else(|| DocumentError::unknown_variant(Self::KIND, discriminator))
    }

    /// Whether the discriminator is part of the catalog
    fn contains(discriminator: &str) -> bool {
        Self::ALL.iter().any(|entry| entry.as_str() == discriminator)
    }

    /// All discriminators, in catalog order
    fn discriminators() -> Vec<&'static str> {
        Self::ALL.iter().map(|entry| entry.as_str()).collect()
    }
}

/// Read `doc["type"]` and resolve it against catalog `C`
///
/// # Errors
///
/// Returns `DocumentError::UnknownVariant` when `type` is missing, empty or
/// not in the catalog.
pub fn resolve<C: Catalog>(doc: &Doc) -> Result<C, DocumentError> {
    let discriminator = doc.get_string("type");
    if discriminator.is_empty() {
        tracing::debug!("{} document has no discriminator", C::KIND);
        return Err(DocumentError::unknown_variant(C::KIND, discriminator));
    }
    C::lookup(&discriminator).map_err(|e| {
        tracing::debug!("Unknown {} discriminator '{}'", C::KIND, discriminator);
        e
    })
}
