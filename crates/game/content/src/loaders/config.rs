//! Game configuration loader.

use std::path::Path;

use dungeon_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Absent keys keep their defaults, so a file only lists what it overrides:
///
/// ```toml
/// player_health = 12.0
/// bribe_amount = 3
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate a config from TOML text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config.validate()?;
        Ok(config)
    }
}
