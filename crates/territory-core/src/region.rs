//! # Region Types
//!
//! Defines [`Region`], one valid geographic location, and [`RegionKey`],
//! the normalized string identity used everywhere in matching.
//!
//! ## Key-Formation Invariant
//!
//! A region key is `uppercase(city)-uppercase(state)-uppercase(country)`,
//! hyphen-joined in that fixed order. This rule is load-bearing: the catalog
//! builds keys with it, and callers constructing query keys must produce the
//! identical format or every lookup silently fails to validate legitimate
//! regions. [`RegionKey::from_parts`] is the only normalizing constructor;
//! keep all key formation flowing through it.

use serde::{Deserialize, Serialize};

/// One valid geographic location from the reference dataset.
///
/// Attribute strings are free-form but sourced from a controlled reference
/// set. Created once at catalog load time and immutable thereafter; owned
/// exclusively by the [`crate::RegionCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Country name as it appears in the reference data.
    pub country: String,
    /// State or province name.
    pub state: String,
    /// City name.
    pub city: String,
}

impl Region {
    /// The normalized key identifying this region.
    pub fn key(&self) -> RegionKey {
        RegionKey::from_parts(&self.city, &self.state, &self.country)
    }
}

/// Normalized region identity: uppercase `CITY-STATE-COUNTRY`.
///
/// Region keys are the only handle used in rule matching; two regions are
/// equal iff their keys are equal.
///
/// # Construction
///
/// - [`RegionKey::from_parts`] — normalizes (uppercase, hyphen-join).
/// - [`RegionKey::from_normalized`] — wraps a caller-normalized string
///   verbatim. The resolver never normalizes its input; a caller passing a
///   lowercase or reordered key gets denials, by contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionKey(String);

impl RegionKey {
    /// Build a key from geographic components, applying normalization.
    pub fn from_parts(city: &str, state: &str, country: &str) -> Self {
        Self(format!("{city}-{state}-{country}").to_uppercase())
    }

    /// Wrap an already-normalized key string without modifying it.
    pub fn from_normalized(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
