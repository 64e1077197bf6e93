//! Search configuration loader.

use std::path::Path;

use skirmish_core::SearchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for search configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`SearchConfig`] from a TOML file.
    ///
    /// ```toml
    /// depth = 3
    /// evaluator = "proximity"   # optional, defaults to "line_of_sight"
    /// ```
    pub fn load(path: &Path) -> LoadResult<SearchConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse configuration text. A zero depth is rejected here, not at search time.
    pub fn parse(content: &str) -> LoadResult<SearchConfig> {
        let config: SearchConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
