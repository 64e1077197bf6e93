//! Content factory for locating skirmish data files.

use std::path::{Path, PathBuf};

use skirmish_core::{SearchConfig, Snapshot};

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};

/// Content factory that loads skirmish content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── search.toml
/// └── scenarios/
///     ├── duel.ron
///     └── crossing.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load search configuration from `search.toml`.
    pub fn load_config(&self) -> LoadResult<SearchConfig> {
        ConfigLoader::load(&self.data_dir.join("search.toml"))
    }

    /// Load `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Snapshot> {
        let path = self.data_dir.join("scenarios").join(format!("{name}.ron"));
        ScenarioLoader::load(&path)
    }
}
