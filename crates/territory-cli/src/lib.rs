//! # territory-cli — Command-Line Frontend
//!
//! Thin I/O shell around [`territory_core`]: loads the region catalog from a
//! delimited file, builds the distributor hierarchy from a YAML config, and
//! dispatches queries. All decision logic lives in the core crate.

pub mod check;
pub mod config;
pub mod regions;
