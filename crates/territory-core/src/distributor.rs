//! # Distributor Registry
//!
//! An append-only arena of distributor nodes. Each node carries its own
//! [`RuleSet`] and an optional parent link, expressed as a [`DistributorId`]
//! index into the same arena rather than a shared-ownership pointer. The
//! upward link is non-owning: children reference parents, never the reverse.
//!
//! ## Acyclicity Invariant
//!
//! [`DistributorRegistry::add_child`] requires the parent to be registered
//! already, so a parent's id is always strictly smaller than its child's.
//! Cycles therefore cannot be represented, and the resolver's ancestor walk
//! is bounded by construction; a cyclic configuration surfaces at build time
//! as [`RegistryError::UnknownParent`], never as an unbounded walk.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::rules::RuleSet;

/// Index of a distributor within its registry's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistributorId(usize);

impl DistributorId {
    /// The raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DistributorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "distributor:{}", self.0)
    }
}

/// One node in the distributor hierarchy.
///
/// Constructed once with fixed rules and parent link, immutable after
/// insertion. The name identifies the distributor to humans and config
/// files; it plays no part in permission decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distributor {
    /// Human-readable identifier, unique within the registry.
    pub name: String,
    /// This distributor's own inclusion/exclusion rules.
    pub rules: RuleSet,
    /// Upward link to the parent, if any. `None` marks a root.
    pub parent: Option<DistributorId>,
}

/// Append-only arena owning all distributor nodes of a hierarchy (or a
/// forest of them).
///
/// Safe for unlimited concurrent readers once construction completes;
/// nothing in the query path mutates the arena.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributorRegistry {
    nodes: Vec<Distributor>,
}

impl DistributorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root distributor (no parent).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the name is taken.
    pub fn add_root(
        &mut self,
        name: impl Into<String>,
        rules: RuleSet,
    ) -> Result<DistributorId, RegistryError> {
        self.insert(name.into(), rules, None)
    }

    /// Register a distributor under an existing parent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownParent`] if `parent` is not in the
    /// registry, or [`RegistryError::DuplicateName`] if the name is taken.
    pub fn add_child(
        &mut self,
        name: impl Into<String>,
        rules: RuleSet,
        parent: DistributorId,
    ) -> Result<DistributorId, RegistryError> {
        let name = name.into();
        if parent.0 >= self.nodes.len() {
            return Err(RegistryError::UnknownParent {
                child: name,
                parent: parent.0,
            });
        }
        self.insert(name, rules, Some(parent))
    }

    fn insert(
        &mut self,
        name: String,
        rules: RuleSet,
        parent: Option<DistributorId>,
    ) -> Result<DistributorId, RegistryError> {
        if self.nodes.iter().any(|d| d.name == name) {
            return Err(RegistryError::DuplicateName(name));
        }
        let id = DistributorId(self.nodes.len());
        self.nodes.push(Distributor {
            name,
            rules,
            parent,
        });
        Ok(id)
    }

    /// Look up a distributor by id.
    pub fn get(&self, id: DistributorId) -> Option<&Distributor> {
        self.nodes.get(id.0)
    }

    /// Find a distributor id by name.
    pub fn find(&self, name: &str) -> Option<DistributorId> {
        self.nodes
            .iter()
            .position(|d| d.name == name)
            .map(DistributorId)
    }

    /// Iterate a distributor's ancestor chain: the node itself first, then
    /// each parent upward to the root.
    pub fn ancestors(&self, id: DistributorId) -> Ancestors<'_> {
        Ancestors {
            registry: self,
            next: Some(id),
        }
    }

    /// Number of registered distributors.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator over a distributor and its chain of parents.
#[derive(Debug)]
pub struct Ancestors<'a> {
    registry: &'a DistributorRegistry,
    next: Option<DistributorId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Distributor;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        let node = self.registry.get(id)?;
        self.next = node.parent;
        Some(node)
    }
}
