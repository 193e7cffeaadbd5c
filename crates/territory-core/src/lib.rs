//! # territory-core — Distributor Region Permission Resolution
//!
//! This crate answers one question: is a distributor authorized to operate
//! in a geographic region? Authorization is defined by inclusion/exclusion
//! rule sets inherited through a parent hierarchy and evaluated against a
//! normalized region key.
//!
//! ## Components
//!
//! 1. **Region catalog** ([`RegionCatalog`]) — an immutable reference set
//!    mapping normalized region keys (`CITY-STATE-COUNTRY`, uppercase) to
//!    their geographic attributes. Built once from a delimited flat file,
//!    read-only thereafter. Used by the resolver only for validity lookups.
//!
//! 2. **Distributor registry** ([`DistributorRegistry`]) — an append-only
//!    arena of distributor nodes. Each node carries its own [`RuleSet`] and
//!    an optional parent link by [`DistributorId`]. Parent links point at
//!    already-registered nodes, so the hierarchy is acyclic by construction.
//!
//! 3. **Resolver** ([`resolve`] / [`has_permission`]) — walks a
//!    distributor's ancestor chain, applying each level's rules in turn.
//!    Exclusions are checked before inclusions at every level; a level that
//!    matches either way settles the decision; a silent level defers to its
//!    parent; an exhausted chain denies.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `territory-*` crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public domain types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.
//! - Once the catalog and registry are built, every operation here is a
//!   read: the whole crate is safe for unlimited concurrent readers.

pub mod catalog;
pub mod distributor;
pub mod error;
pub mod region;
pub mod resolver;
pub mod rules;

// Re-export primary types for ergonomic imports.
pub use catalog::RegionCatalog;
pub use distributor::{Distributor, DistributorId, DistributorRegistry};
pub use error::{CatalogError, RegistryError};
pub use region::{Region, RegionKey};
pub use resolver::{has_permission, resolve, Decision, DenyReason};
pub use rules::{Access, RuleFragment, RuleSet};
