//! Content factory for loading all game data from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, NpcLoader, QuestLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── quests.ron
/// └── npcs.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<game_core::GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<game_core::ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load the quest catalog from `quests.ron`.
    pub fn load_quests(&self) -> LoadResult<Vec<game_core::QuestDefinition>> {
        let path = self.data_dir.join("quests.ron");
        QuestLoader::load(&path)
    }

    /// Load NPC profiles from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<Vec<game_core::NpcProfile>> {
        let path = self.data_dir.join("npcs.ron");
        NpcLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
