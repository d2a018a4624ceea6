use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::state::ItemId;

/// Read-only lookup of NPC profiles (gift affinities and friendship
/// rewards), keyed by NPC name.
pub trait NpcDirectory {
    fn profile(&self, name: &str) -> Option<&NpcProfile>;
}

/// Static NPC profile, authored in the content catalog.
///
/// The per-level reward table replaces hard-coded level-up handling: each
/// entry is granted exactly once, when that heart level is first reached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcProfile {
    pub name: String,
    #[serde(default)]
    pub loved_items: Vec<ItemId>,
    #[serde(default)]
    pub liked_items: Vec<ItemId>,
    #[serde(default)]
    pub hated_items: Vec<ItemId>,
    /// Heart level -> item granted on reaching it.
    #[serde(default)]
    pub level_rewards: BTreeMap<u8, LevelReward>,
}

impl NpcProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loved_items: Vec::new(),
            liked_items: Vec::new(),
            hated_items: Vec::new(),
            level_rewards: BTreeMap::new(),
        }
    }
}

/// Item grant attached to a friendship level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReward {
    pub item: ItemId,
    pub amount: u32,
}
