use serde::{Deserialize, Serialize};

use crate::state::{ItemId, QuestId};

/// Read-only lookup of static quest definitions.
///
/// Persisted quest progress stores only the [`QuestId`]; the definition is
/// re-resolved through this directory after deserialization. Entries that no
/// longer resolve are dropped by the restore path.
pub trait QuestDirectory {
    fn definition(&self, id: &QuestId) -> Option<&QuestDefinition>;

    fn contains(&self, id: &QuestId) -> bool {
        self.definition(id).is_some()
    }
}

/// Static quest definition, authored in the content catalog.
///
/// Immutable at runtime. Accepting a quest copies the objective templates
/// into a fresh progress record, so later edits to a definition never
/// retroactively change quests a player has already accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefinition {
    pub id: QuestId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub objectives: Vec<ObjectiveSpec>,
    /// Items consumed when the quest is handed in.
    #[serde(default)]
    pub required_items: Vec<QuestRequirement>,
    #[serde(default)]
    pub rewards: Vec<QuestReward>,
}

/// What an objective tracks.
///
/// One variant per objective type; progress handling matches on these
/// exhaustively, so adding a variant is a compile-time checklist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveKind {
    /// Hold `required_amount` of the item in the inventory.
    CollectItem { item: ItemId },

    /// Finish a conversation with the named NPC.
    TalkTo { npc: String },

    /// Progress driven by bespoke game events.
    Custom { key: String },
}

/// Objective template inside a quest definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveSpec {
    pub kind: ObjectiveKind,
    /// The text displayed in the quest log (e.g. "Collect 3 tin cans").
    pub description: String,
    pub required_amount: u32,
}

/// Hand-in cost entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRequirement {
    pub item: ItemId,
    pub amount: u32,
}

/// Reward granted when a quest is handed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestReward {
    Item { item: ItemId, amount: u32 },
    Gold { amount: u32 },
    Experience { amount: u32 },
    /// Escape hatch for unique rewards (area unlocks, cutscenes).
    Custom { key: String },
}
