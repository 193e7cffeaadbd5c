//! # Permission Resolver
//!
//! The decision walk: given a distributor, a candidate region key, and the
//! region catalog, produce an allow/deny decision.
//!
//! ## Algorithm
//!
//! 1. **Validity gate.** If the key is not in the catalog, deny with
//!    [`DenyReason::UnknownRegion`] and emit a `tracing` warning. The key
//!    never changes across the walk, so this is checked exactly once, up
//!    front, rather than redundantly at every ancestor level.
//! 2. **Ancestor walk.** Starting at the distributor itself, evaluate each
//!    level's [`RuleSet`]: exclusions before inclusions. A level that
//!    matches either way settles the decision; shallower levels are never
//!    consulted once a deeper level has resolved. A silent level defers to
//!    its parent.
//! 3. **Default deny.** An exhausted chain denies with
//!    [`DenyReason::NoMatchingRule`].
//!
//! The resolver is a pure function of `(registry, id, key, catalog)`: no
//! mutation, no cache, no I/O beyond the one-time diagnostic event. The walk
//! is bounded because the registry cannot represent cycles (see
//! [`crate::distributor`]).

use serde::{Deserialize, Serialize};

use crate::catalog::RegionCatalog;
use crate::distributor::{DistributorId, DistributorRegistry};
use crate::region::RegionKey;
use crate::rules::Access;

/// Why a query was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenyReason {
    /// The region key is not in the catalog. Distinguishable from a
    /// legitimate deny so callers can surface it separately.
    UnknownRegion,
    /// An exclusion fragment matched at the first level that resolved.
    Excluded,
    /// The whole ancestor chain was silent (default deny), or the
    /// distributor id was not in the registry.
    NoMatchingRule,
}

/// Outcome of a permission query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The distributor may operate in the region.
    Granted,
    /// The distributor may not operate in the region.
    Denied(DenyReason),
}

impl Decision {
    /// Whether the decision grants access.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Granted => write!(f, "GRANTED"),
            Self::Denied(DenyReason::UnknownRegion) => write!(f, "DENIED_UNKNOWN_REGION"),
            Self::Denied(DenyReason::Excluded) => write!(f, "DENIED_EXCLUDED"),
            Self::Denied(DenyReason::NoMatchingRule) => write!(f, "DENIED_NO_MATCHING_RULE"),
        }
    }
}

/// Resolve whether a distributor may operate in a region.
///
/// `key` must already be normalized (uppercase `CITY-STATE-COUNTRY`); the
/// resolver never normalizes its input. See the module docs for the walk
/// semantics.
pub fn resolve(
    registry: &DistributorRegistry,
    id: DistributorId,
    key: &RegionKey,
    catalog: &RegionCatalog,
) -> Decision {
    if !catalog.contains(key) {
        tracing::warn!(region = %key, "invalid region: not in catalog");
        return Decision::Denied(DenyReason::UnknownRegion);
    }

    for level in registry.ancestors(id) {
        match level.rules.evaluate(key) {
            Some(Access::Denied) => return Decision::Denied(DenyReason::Excluded),
            Some(Access::Granted) => return Decision::Granted,
            None => continue,
        }
    }

    Decision::Denied(DenyReason::NoMatchingRule)
}

/// Boolean form of [`resolve`].
pub fn has_permission(
    registry: &DistributorRegistry,
    id: DistributorId,
    key: &RegionKey,
    catalog: &RegionCatalog,
) -> bool {
    resolve(registry, id, key, catalog).is_granted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use std::io::Cursor;

    fn catalog() -> RegionCatalog {
        let csv = "\
UnitedStates,Illinois,Chicago
India,TamilNadu,Chennai
India,Karnataka,Bangalore
India,Karnataka,Hubli
";
        RegionCatalog::load_from_reader(Cursor::new(csv)).unwrap()
    }

    fn key(s: &str) -> RegionKey {
        RegionKey::from_normalized(s)
    }

    // ── Validity gate ────────────────────────────────────────────────

    #[test]
    fn test_unknown_region_denied_with_reason() {
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let a = registry
            .add_root("A", RuleSet::new().with_inclusion("FRANCE"))
            .unwrap();
        assert_eq!(
            resolve(&registry, a, &key("PARIS-ILEDEFRANCE-FRANCE"), &catalog),
            Decision::Denied(DenyReason::UnknownRegion)
        );
    }

    #[test]
    fn test_unknown_region_denied_for_every_distributor() {
        // Rules cannot rescue a key the catalog does not know.
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let a = registry
            .add_root("A", RuleSet::new().with_inclusion("NOWHERE-STATE-COUNTRY"))
            .unwrap();
        let b = registry.add_child("B", RuleSet::new(), a).unwrap();
        let bogus = key("NOWHERE-STATE-COUNTRY");
        assert!(!has_permission(&registry, a, &bogus, &catalog));
        assert!(!has_permission(&registry, b, &bogus, &catalog));
    }

    // ── Single-level decisions ───────────────────────────────────────

    #[test]
    fn test_inclusion_grants() {
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let a = registry
            .add_root("A", RuleSet::new().with_inclusion("INDIA"))
            .unwrap();
        assert_eq!(
            resolve(&registry, a, &key("HUBLI-KARNATAKA-INDIA"), &catalog),
            Decision::Granted
        );
    }

    #[test]
    fn test_exclusion_beats_inclusion() {
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let a = registry
            .add_root(
                "A",
                RuleSet::new()
                    .with_inclusion("INDIA")
                    .with_exclusion("KARNATAKA-INDIA"),
            )
            .unwrap();
        assert_eq!(
            resolve(&registry, a, &key("BANGALORE-KARNATAKA-INDIA"), &catalog),
            Decision::Denied(DenyReason::Excluded)
        );
    }

    #[test]
    fn test_default_deny_on_silent_root() {
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let a = registry.add_root("A", RuleSet::new()).unwrap();
        assert_eq!(
            resolve(&registry, a, &key("CHENNAI-TAMILNADU-INDIA"), &catalog),
            Decision::Denied(DenyReason::NoMatchingRule)
        );
    }

    // ── Ancestor fallback ────────────────────────────────────────────

    #[test]
    fn test_silent_child_defers_to_parent() {
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let parent = registry
            .add_root("parent", RuleSet::new().with_inclusion("UNITEDSTATES"))
            .unwrap();
        let child = registry.add_child("child", RuleSet::new(), parent).unwrap();
        let chicago = key("CHICAGO-ILLINOIS-UNITEDSTATES");
        assert_eq!(
            resolve(&registry, child, &chicago, &catalog),
            resolve(&registry, parent, &chicago, &catalog)
        );
        assert!(has_permission(&registry, child, &chicago, &catalog));
    }

    #[test]
    fn test_child_exclusion_overrides_parent_inclusion() {
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let parent = registry
            .add_root("parent", RuleSet::new().with_inclusion("INDIA"))
            .unwrap();
        let child = registry
            .add_child(
                "child",
                RuleSet::new().with_exclusion("TAMILNADU-INDIA"),
                parent,
            )
            .unwrap();
        assert_eq!(
            resolve(&registry, child, &key("CHENNAI-TAMILNADU-INDIA"), &catalog),
            Decision::Denied(DenyReason::Excluded)
        );
    }

    #[test]
    fn test_child_inclusion_overrides_parent_exclusion() {
        // Whichever level resolves first wins; a parent's exclusion never
        // reaches past a child that already granted.
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let parent = registry
            .add_root("parent", RuleSet::new().with_exclusion("KARNATAKA-INDIA"))
            .unwrap();
        let child = registry
            .add_child(
                "child",
                RuleSet::new().with_inclusion("HUBLI-KARNATAKA-INDIA"),
                parent,
            )
            .unwrap();
        assert_eq!(
            resolve(&registry, child, &key("HUBLI-KARNATAKA-INDIA"), &catalog),
            Decision::Granted
        );
    }

    #[test]
    fn test_whole_chain_silent_denies() {
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let a = registry
            .add_root("A", RuleSet::new().with_inclusion("FRANCE"))
            .unwrap();
        let b = registry
            .add_child("B", RuleSet::new().with_exclusion("GERMANY"), a)
            .unwrap();
        assert_eq!(
            resolve(&registry, b, &key("CHICAGO-ILLINOIS-UNITEDSTATES"), &catalog),
            Decision::Denied(DenyReason::NoMatchingRule)
        );
    }

    // ── Containment looseness ────────────────────────────────────────

    #[test]
    fn test_partial_fragment_grants() {
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let a = registry
            .add_root("A", RuleSet::new().with_inclusion("NDI"))
            .unwrap();
        assert!(has_permission(
            &registry,
            a,
            &key("CHENNAI-TAMILNADU-INDIA"),
            &catalog
        ));
    }

    #[test]
    fn test_unnormalized_query_key_is_not_rescued() {
        // The resolver does not normalize: a lowercase key misses the
        // catalog and is reported unknown.
        let catalog = catalog();
        let mut registry = DistributorRegistry::new();
        let a = registry
            .add_root("A", RuleSet::new().with_inclusion("INDIA"))
            .unwrap();
        assert_eq!(
            resolve(&registry, a, &key("hubli-karnataka-india"), &catalog),
            Decision::Denied(DenyReason::UnknownRegion)
        );
    }

    // ── Display ──────────────────────────────────────────────────────

    #[test]
    fn test_decision_display() {
        assert_eq!(Decision::Granted.to_string(), "GRANTED");
        assert_eq!(
            Decision::Denied(DenyReason::UnknownRegion).to_string(),
            "DENIED_UNKNOWN_REGION"
        );
        assert_eq!(
            Decision::Denied(DenyReason::Excluded).to_string(),
            "DENIED_EXCLUDED"
        );
        assert_eq!(
            Decision::Denied(DenyReason::NoMatchingRule).to_string(),
            "DENIED_NO_MATCHING_RULE"
        );
    }
}
