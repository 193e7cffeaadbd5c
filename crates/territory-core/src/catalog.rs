//! # Region Catalog
//!
//! The immutable reference set of valid regions, loaded once from a
//! delimited flat file and handed by reference to the resolver, which never
//! mutates it. The resolver uses the catalog solely for validity lookups.
//!
//! ## Load Semantics
//!
//! Each row is `country,state,city` (further fields ignored). Rows with
//! fewer than three fields are skipped silently: malformed-row tolerance,
//! not an error. An unreadable source fails the whole load with
//! [`CatalogError`] and no partial catalog is returned.
//!
//! The loader does not special-case header rows. Inputs are expected
//! headerless; a stray header simply becomes an inert key no caller will
//! ever query.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::CatalogError;
use crate::region::{Region, RegionKey};

/// Write-once, read-many mapping from [`RegionKey`] to [`Region`].
///
/// # Invariants
///
/// - Every key in the map is derivable from its own `Region` via
///   [`RegionKey::from_parts`]: the catalog is self-consistent.
/// - No update or delete operations exist; the catalog is read-only for the
///   lifetime of the process and safe for unlimited concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    regions: HashMap<RegionKey, Region>,
}

impl RegionCatalog {
    /// Load a catalog from a delimited file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file is missing or unreadable.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path.as_ref())?;
        let catalog = Self::load_from_reader(BufReader::new(file))?;
        tracing::info!(
            regions = catalog.len(),
            path = %path.as_ref().display(),
            "region catalog loaded"
        );
        Ok(catalog)
    }

    /// Load a catalog from any buffered reader of delimited rows.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if reading fails mid-stream. Row-level
    /// defects (fewer than three fields) are skipped, not errors.
    pub fn load_from_reader(reader: impl BufRead) -> Result<Self, CatalogError> {
        let mut regions = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < 3 {
                continue;
            }
            let region = Region {
                country: fields[0].to_string(),
                state: fields[1].to_string(),
                city: fields[2].to_string(),
            };
            regions.insert(region.key(), region);
        }
        Ok(Self { regions })
    }

    /// Whether `key` names a valid region.
    pub fn contains(&self, key: &RegionKey) -> bool {
        self.regions.contains_key(key)
    }

    /// Look up the region behind a key.
    pub fn get(&self, key: &RegionKey) -> Option<&Region> {
        self.regions.get(key)
    }

    /// Number of regions in the catalog.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate over all region keys.
    pub fn keys(&self) -> impl Iterator<Item = &RegionKey> {
        self.regions.keys()
    }
}
