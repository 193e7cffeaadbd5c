//! # Error Types
//!
//! Structured errors for the two construction paths that can fail: loading
//! the region catalog and building the distributor hierarchy. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! An unknown region key at query time is deliberately NOT an error: the
//! resolver reports it as a denied decision with a distinguishable reason
//! (see [`crate::resolver::DenyReason::UnknownRegion`]) plus a tracing
//! diagnostic, and the caller is not interrupted.

use thiserror::Error;

/// Error while constructing the region catalog.
///
/// Fatal to catalog construction: no partial catalog is ever returned.
/// Row-level tolerance (rows with fewer than three fields) is handled by
/// skipping, not by erroring.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The source file is missing or unreadable.
    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is structurally unparseable (not a row-level defect).
    #[error("malformed catalog source: {0}")]
    MalformedSource(String),
}

/// Error while building the distributor hierarchy.
///
/// These are configuration errors raised at registry construction time;
/// a registry that builds successfully cannot fail at query time.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A child referenced a parent id that is not in the registry.
    #[error("distributor {child:?} references unknown parent id {parent}")]
    UnknownParent {
        /// Name of the child being inserted.
        child: String,
        /// The parent index that was not found.
        parent: usize,
    },

    /// Two distributors were registered under the same name.
    #[error("duplicate distributor name: {0:?}")]
    DuplicateName(String),
}
