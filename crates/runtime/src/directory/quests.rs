//! [`game_core::QuestDirectory`] backed by an in-memory map.
use game_core::{QuestDefinition, QuestDirectory, QuestId};
use std::collections::HashMap;

/// QuestDirectory implementation with static quest definitions.
pub struct QuestDirectoryImpl {
    definitions: HashMap<QuestId, QuestDefinition>,
}

impl QuestDirectoryImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    pub fn from_definitions(definitions: Vec<QuestDefinition>) -> Self {
        let mut directory = Self::new();
        for definition in definitions {
            directory.add_definition(definition);
        }
        directory
    }

    pub fn add_definition(&mut self, definition: QuestDefinition) {
        if self.definitions.contains_key(&definition.id) {
            tracing::warn!(
                "Duplicate quest id '{}' in catalog, keeping first",
                definition.id
            );
            return;
        }
        self.definitions.insert(definition.id.clone(), definition);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for QuestDirectoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestDirectory for QuestDirectoryImpl {
    fn definition(&self, id: &QuestId) -> Option<&QuestDefinition> {
        self.definitions.get(id)
    }
}
