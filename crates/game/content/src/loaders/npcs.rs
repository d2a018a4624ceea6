//! NPC profile catalog loader.

use std::path::Path;

use game_core::NpcProfile;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// NPC catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcCatalog {
    pub npcs: Vec<NpcProfile>,
}

/// Loader for NPC profiles from RON files.
pub struct NpcLoader;

impl NpcLoader {
    /// Load NPC profiles from a RON file containing an [`NpcCatalog`].
    pub fn load(path: &Path) -> LoadResult<Vec<NpcProfile>> {
        let content = read_file(path)?;
        let catalog: NpcCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC catalog RON: {}", e))?;

        Ok(catalog.npcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ItemId;

    #[test]
    fn parses_npc_catalog() {
        let catalog: NpcCatalog = ron::from_str(
            r#"(
                npcs: [
                    (
                        name: "Chirp",
                        loved_items: [(7)],
                        hated_items: [(5)],
                        level_rewards: {
                            1: (item: (7), amount: 1),
                            3: (item: (9), amount: 1),
                        },
                    ),
                ],
            )"#,
        )
        .unwrap();

        let npc = &catalog.npcs[0];
        assert_eq!(npc.name, "Chirp");
        assert!(npc.loved_items.contains(&ItemId(7)));
        assert!(npc.liked_items.is_empty());
        assert_eq!(npc.level_rewards[&3].item, ItemId(9));
    }
}
