//! # Distributor Hierarchy Config
//!
//! YAML description of the distributor hierarchy, parsed with serde and
//! assembled into a [`DistributorRegistry`].
//!
//! ```yaml
//! distributors:
//!   - name: DISTRIBUTOR1
//!     include: [INDIA, UNITEDSTATES]
//!     exclude: [KARNATAKA-INDIA, CHENNAI-TAMILNADU-INDIA]
//!   - name: DISTRIBUTOR2
//!     parent: DISTRIBUTOR1
//!     include: [INDIA]
//!     exclude: [TAMILNADU-INDIA]
//! ```
//!
//! Entries are processed top to bottom and a `parent` must name a
//! distributor declared earlier in the file. That keeps assembly single-pass
//! and makes a cyclic hierarchy unrepresentable: any cycle would need a
//! forward reference, which is rejected as an unknown parent.
//!
//! Rule fragments are uppercased on ingestion, so config authors may write
//! them in any case.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use territory_core::{DistributorRegistry, RegistryError, RuleSet};

/// Top-level structure of the hierarchy file.
#[derive(Debug, Deserialize)]
pub struct HierarchyFile {
    /// Distributor entries, parents before children.
    pub distributors: Vec<DistributorEntry>,
}

/// One distributor declaration.
#[derive(Debug, Deserialize)]
pub struct DistributorEntry {
    /// Unique distributor name.
    pub name: String,
    /// Name of the parent distributor, declared earlier in the file.
    #[serde(default)]
    pub parent: Option<String>,
    /// Inclusion fragments.
    #[serde(default)]
    pub include: Vec<String>,
    /// Exclusion fragments.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Error while reading or assembling the hierarchy config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file is missing or unreadable.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML is malformed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An entry references a parent not declared earlier in the file.
    #[error("distributor {child:?} references undeclared parent {parent:?}")]
    UndeclaredParent {
        /// The entry being assembled.
        child: String,
        /// The parent name it referenced.
        parent: String,
    },

    /// Registry construction rejected an entry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Load a hierarchy file and assemble the registry.
pub fn load_registry(path: impl AsRef<Path>) -> Result<DistributorRegistry, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    let file: HierarchyFile = serde_yaml::from_str(&raw)?;
    build_registry(&file)
}

/// Assemble a registry from a parsed hierarchy file.
pub fn build_registry(file: &HierarchyFile) -> Result<DistributorRegistry, ConfigError> {
    let mut registry = DistributorRegistry::new();
    for entry in &file.distributors {
        let mut rules = RuleSet::new();
        for pattern in &entry.include {
            rules.include(pattern);
        }
        for pattern in &entry.exclude {
            rules.exclude(pattern);
        }
        match &entry.parent {
            None => {
                registry.add_root(&entry.name, rules)?;
            }
            Some(parent_name) => {
                let parent = registry.find(parent_name).ok_or_else(|| {
                    ConfigError::UndeclaredParent {
                        child: entry.name.clone(),
                        parent: parent_name.clone(),
                    }
                })?;
                registry.add_child(&entry.name, rules, parent)?;
            }
        }
    }
    tracing::debug!(distributors = registry.len(), "hierarchy assembled");
    Ok(registry)
}
