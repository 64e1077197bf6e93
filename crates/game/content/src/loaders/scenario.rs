//! Scenario snapshot loader.
//!
//! A scenario is a [`Snapshot`] written in RON: map extent, obstacle cells,
//! and the two rosters in the order the host reports them.

use std::path::Path;

use skirmish_core::{CombatState, Snapshot};

use crate::loaders::{LoadResult, read_file};

/// Loader for scenario snapshots from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a snapshot and check that it forms a valid combat state.
    pub fn load(path: &Path) -> LoadResult<Snapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Snapshot> {
        let snapshot: Snapshot = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        // Surface overlapping or misplaced units at load time.
        CombatState::from_snapshot(&snapshot)?;
        Ok(snapshot)
    }
}
