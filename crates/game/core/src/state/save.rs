//! The serializable save record.
//!
//! [`SaveData`] flattens every ledger's state plus the scene/camera/audio
//! context into one consistent record. It is written wholesale on save and
//! applied wholesale on load; there is no delta format.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::state::common::{ItemId, QuestId, SceneIndex, WorldPosition};
use crate::state::quest::QuestProgress;

/// One occupied inventory slot as persisted: the slot index is the stable
/// position key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySlotRecord {
    pub item: ItemId,
    pub slot: usize,
    pub quantity: u32,
}

/// Complete snapshot of a play session.
///
/// Friendship is persisted as levels only; raw point totals reset to zero on
/// load, so progress toward the next level is intentionally not carried
/// across saves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    /// Schema version. Bump on any layout change; the gateway refuses
    /// records with a different version instead of mis-applying them.
    pub version: u32,

    pub inventory: Vec<InventorySlotRecord>,
    pub completed_dialogues: BTreeSet<String>,
    pub collected_world_items: BTreeSet<String>,
    pub quest_progress: Vec<QuestProgress>,
    pub handed_in_quests: BTreeSet<QuestId>,
    /// NPC name -> heart level.
    pub friendship_levels: BTreeMap<String, u8>,

    pub scene: SceneIndex,
    pub player_position: WorldPosition,
    /// Name of the camera-confinement region active at save time.
    pub map_boundary: Option<String>,
    pub music_track: Option<String>,
}

impl SaveData {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            inventory: Vec::new(),
            completed_dialogues: BTreeSet::new(),
            collected_world_items: BTreeSet::new(),
            quest_progress: Vec::new(),
            handed_in_quests: BTreeSet::new(),
            friendship_levels: BTreeMap::new(),
            scene: SceneIndex(0),
            player_position: WorldPosition::ORIGIN,
            map_boundary: None,
            music_track: None,
        }
    }
}

impl Default for SaveData {
    fn default() -> Self {
        Self::new()
    }
}
