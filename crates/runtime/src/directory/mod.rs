//! Runtime wrappers around static game content.
//!
//! These implementations expose the `game-core` directory traits and bundle
//! them into a [`DirectoryManager`] so the runtime can build
//! [`game_core::Env`] views on demand. The data is immutable at runtime;
//! dynamic state lives in [`game_core::GameState`].
mod items;
mod npcs;
mod quests;

use game_core::{Env, GameEnv};
use game_content::ContentFactory;
use game_content::loaders::LoadResult;

pub use items::ItemDirectoryImpl;
pub use npcs::NpcDirectoryImpl;
pub use quests::QuestDirectoryImpl;

/// Manages all directory implementations and provides unified access.
pub struct DirectoryManager {
    items: ItemDirectoryImpl,
    quests: QuestDirectoryImpl,
    npcs: NpcDirectoryImpl,
}

impl DirectoryManager {
    /// Creates a new directory manager from pre-built directories.
    pub fn new(
        items: ItemDirectoryImpl,
        quests: QuestDirectoryImpl,
        npcs: NpcDirectoryImpl,
    ) -> Self {
        Self {
            items,
            quests,
            npcs,
        }
    }

    /// Loads every catalog from a content factory's data directory.
    pub fn load_from(factory: &ContentFactory) -> LoadResult<Self> {
        Ok(Self::new(
            ItemDirectoryImpl::from_definitions(factory.load_items()?),
            QuestDirectoryImpl::from_definitions(factory.load_quests()?),
            NpcDirectoryImpl::from_profiles(factory.load_npcs()?),
        ))
    }

    /// Converts the directory manager into a `GameEnv` for game-core.
    pub fn as_env(&self) -> GameEnv<'_> {
        Env::with_all(&self.items, &self.quests, &self.npcs).as_game_env()
    }

    pub fn items(&self) -> &ItemDirectoryImpl {
        &self.items
    }

    pub fn quests(&self) -> &QuestDirectoryImpl {
        &self.quests
    }

    pub fn npcs(&self) -> &NpcDirectoryImpl {
        &self.npcs
    }
}
