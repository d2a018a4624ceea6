//! Deterministic game state and rules shared across the runtime.
//!
//! `game-core` defines the progress ledgers (inventory, quests, world
//! collection, dialogue history, friendships), the directory traits for
//! static content, and the serializable save record. It performs no I/O and
//! no logging; the runtime crate layers persistence, scene orchestration,
//! and diagnostics on top of the types re-exported here.
pub mod config;
pub mod env;
pub mod refresh;
pub mod state;

pub use config::{GameConfig, GiftPoints, SceneTrack};
pub use env::{
    DirectoryError, Env, GameEnv, ItemDefinition, ItemDirectory, LevelReward, NpcDirectory,
    NpcProfile, ObjectiveKind, ObjectiveSpec, QuestDefinition, QuestDirectory, QuestRequirement,
    QuestReward,
};
pub use refresh::RefreshTargets;
pub use state::{
    DialogueLog, Friendship, FriendshipBook, GameState, Inventory, InventorySlotRecord, ItemId,
    ItemStack, ObjectiveProgress, QuestError, QuestId, QuestLog, QuestProgress, SaveData,
    SceneIndex, WorldLedger, WorldPosition,
};
