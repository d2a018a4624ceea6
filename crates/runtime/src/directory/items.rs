//! [`game_core::ItemDirectory`] backed by an in-memory map.
use game_core::{ItemDefinition, ItemDirectory, ItemId};
use std::collections::HashMap;

/// ItemDirectory implementation with static item definitions.
pub struct ItemDirectoryImpl {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemDirectoryImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Builds the directory from catalog entries. Duplicate identifiers keep
    /// the first definition and log the conflict.
    pub fn from_definitions(definitions: Vec<ItemDefinition>) -> Self {
        let mut directory = Self::new();
        for definition in definitions {
            directory.add_definition(definition);
        }
        directory
    }

    /// Add an item definition.
    pub fn add_definition(&mut self, definition: ItemDefinition) {
        if self.definitions.contains_key(&definition.id) {
            tracing::warn!("Duplicate item id {} in catalog, keeping first", definition.id);
            return;
        }
        self.definitions.insert(definition.id, definition);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ItemDirectoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemDirectory for ItemDirectoryImpl {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(&id)
    }
}
