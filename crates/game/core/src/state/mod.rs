//! Mutable session state.
//!
//! This module owns the progress ledgers. Each ledger covers one slice of
//! persistent state and exposes `snapshot`/`restore`; the runtime flattens
//! them into a [`SaveData`] record on save and overwrites them wholesale on
//! load. [`GameState`] is the explicit aggregate handed to every system that
//! needs a ledger; there are no hidden singletons.
mod common;
mod dialogue;
mod friendship;
mod inventory;
mod quest;
mod save;
mod world;

pub use common::{ItemId, QuestId, SceneIndex, WorldPosition};
pub use dialogue::DialogueLog;
pub use friendship::{Friendship, FriendshipBook};
pub use inventory::{Inventory, ItemStack};
pub use quest::{ObjectiveProgress, QuestError, QuestLog, QuestProgress};
pub use save::{InventorySlotRecord, SaveData};
pub use world::WorldLedger;

use crate::config::GameConfig;

/// All mutable game state for one session.
#[derive(Clone, Debug)]
pub struct GameState {
    pub inventory: Inventory,
    pub quests: QuestLog,
    pub world: WorldLedger,
    pub dialogue: DialogueLog,
    pub friendships: FriendshipBook,
}

impl GameState {
    /// Creates a fresh new-game state sized by the config.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            inventory: Inventory::new(config.slot_count),
            quests: QuestLog::new(),
            world: WorldLedger::new(),
            dialogue: DialogueLog::new(),
            friendships: FriendshipBook::new(),
        }
    }
}
