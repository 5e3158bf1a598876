//! Scenario loader.

use std::path::Path;

use dungeon_core::ScenarioSpec;

use crate::loaders::{LoadResult, read_file};

/// Loader for scenarios (initial entities plus goal tree) from RON files.
///
/// # RON Format
///
/// ```ron
/// (
///     entities: [
///         (position: (x: 0, y: 0), kind: Player),
///         (position: (x: 2, y: 0), kind: Item(Treasure)),
///         (position: (x: 3, y: 0), kind: Door(key: 1)),
///         (position: (x: 4, y: 0), kind: Exit),
///     ],
///     goal: Some((goal: "AND", subgoals: [(goal: "exit"), (goal: "treasure")])),
/// )
/// ```
///
/// The goal tree is only parsed here; it is checked against the config when a
/// simulation is built from the scenario.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Parse a scenario from RON text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> LoadResult<ScenarioSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
