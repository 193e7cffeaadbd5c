//! # Rule Sets
//!
//! Inclusion/exclusion rule fragments and their evaluation against a region
//! key.
//!
//! ## Matching Semantics
//!
//! A fragment matches a region key by **contiguous substring containment**
//! on the uppercased key, not exact equality and not segment-wise matching.
//! `INDIA` matches any key ending in `-INDIA`; so does `NDI`, and even `DI`
//! spuriously matches inside a city segment. This looseness is part of the
//! rule language, inherited deliberately. Do not tighten it to segment
//! matching: that would change which regions are granted or denied.
//!
//! ## Precedence Invariant
//!
//! Within one rule set, every exclusion is consulted before any inclusion.
//! Matching is existential ("any fragment matches"), so the order of
//! fragments within a list never affects the decision; the lists preserve
//! authoring order only so that serialized output and diagnostics read the
//! way the rules were written.

use serde::{Deserialize, Serialize};

use crate::region::RegionKey;

/// A substring pattern from an inclusion or exclusion list.
///
/// Fragments are stored uppercased (e.g. `INDIA`, `KARNATAKA-INDIA`) and
/// need not be full region keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleFragment(String);

impl RuleFragment {
    /// Create a fragment, uppercasing the pattern.
    pub fn new(pattern: impl AsRef<str>) -> Self {
        Self(pattern.as_ref().to_uppercase())
    }

    /// Whether this fragment occurs in `key` as a contiguous substring.
    pub fn matches(&self, key: &RegionKey) -> bool {
        key.as_str().contains(&self.0)
    }

    /// The fragment pattern.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of evaluating one rule set against a region key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    /// An inclusion fragment matched and no exclusion fragment did.
    Granted,
    /// An exclusion fragment matched.
    Denied,
}

/// A distributor's own inclusion and exclusion fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Fragments that grant access when contained in a candidate key.
    pub inclusions: Vec<RuleFragment>,
    /// Fragments that deny access when contained in a candidate key.
    /// Always evaluated before the inclusions.
    pub exclusions: Vec<RuleFragment>,
}

impl RuleSet {
    /// An empty rule set (silent on every key).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inclusion fragment.
    pub fn include(&mut self, pattern: impl AsRef<str>) {
        self.inclusions.push(RuleFragment::new(pattern));
    }

    /// Append an exclusion fragment.
    pub fn exclude(&mut self, pattern: impl AsRef<str>) {
        self.exclusions.push(RuleFragment::new(pattern));
    }

    /// Builder-style [`RuleSet::include`].
    #[must_use]
    pub fn with_inclusion(mut self, pattern: impl AsRef<str>) -> Self {
        self.include(pattern);
        self
    }

    /// Builder-style [`RuleSet::exclude`].
    #[must_use]
    pub fn with_exclusion(mut self, pattern: impl AsRef<str>) -> Self {
        self.exclude(pattern);
        self
    }

    /// Whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.inclusions.is_empty() && self.exclusions.is_empty()
    }

    /// Evaluate this rule set against a region key.
    ///
    /// Exclusions first: any exclusion match is `Some(Denied)` regardless of
    /// what the inclusions would say. Otherwise any inclusion match is
    /// `Some(Granted)`. `None` means this level is silent and the decision
    /// falls through to an ancestor.
    pub fn evaluate(&self, key: &RegionKey) -> Option<Access> {
        if self.exclusions.iter().any(|ex| ex.matches(key)) {
            return Some(Access::Denied);
        }
        if self.inclusions.iter().any(|inc| inc.matches(key)) {
            return Some(Access::Granted);
        }
        None
    }
}
