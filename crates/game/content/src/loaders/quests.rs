//! Quest catalog loader.

use std::path::Path;

use game_core::QuestDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Quest catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestCatalog {
    pub quests: Vec<QuestDefinition>,
}

/// Loader for the quest catalog from RON files.
pub struct QuestLoader;

impl QuestLoader {
    /// Load quest definitions from a RON file containing a [`QuestCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<QuestDefinition>> {
        let content = read_file(path)?;
        let catalog: QuestCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quest catalog RON: {}", e))?;

        Ok(catalog.quests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ItemId, ObjectiveKind, QuestId, QuestReward};

    #[test]
    fn parses_quest_catalog() {
        let catalog: QuestCatalog = ron::from_str(
            r#"(
                quests: [
                    (
                        id: "gather_cans",
                        name: "Litter Patrol",
                        description: "Chirp wants the meadow cleaned up.",
                        objectives: [
                            (
                                kind: CollectItem(item: (5)),
                                description: "Collect 3 tin cans",
                                required_amount: 3,
                            ),
                        ],
                        required_items: [(item: (5), amount: 3)],
                        rewards: [Item(item: (7), amount: 1), Gold(amount: 25)],
                    ),
                ],
            )"#,
        )
        .unwrap();

        let quest = &catalog.quests[0];
        assert_eq!(quest.id, QuestId::from("gather_cans"));
        assert_eq!(
            quest.objectives[0].kind,
            ObjectiveKind::CollectItem { item: ItemId(5) }
        );
        assert_eq!(quest.rewards[1], QuestReward::Gold { amount: 25 });
    }
}
