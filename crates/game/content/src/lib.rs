//! Data-driven scenario content and loaders.
//!
//! This crate reads skirmish data files into skirmish-core types:
//! - Scenario snapshots (map extent, obstacles, both rosters) via RON
//! - Search configuration (depth, evaluation policy) via TOML
//!
//! Content is consumed by hosts before a decision point and never appears in
//! search state beyond what [`skirmish_core::Snapshot`] carries.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
