use serde::{Deserialize, Serialize};

use crate::state::ItemId;

/// Read-only lookup of static item definitions.
///
/// Every item identifier that appears in a save record or quest definition
/// must resolve here to exactly one definition.
pub trait ItemDirectory {
    fn definition(&self, id: ItemId) -> Option<&ItemDefinition>;

    /// Convenience guard used when validating persisted identifiers.
    fn contains(&self, id: ItemId) -> bool {
        self.definition(id).is_some()
    }
}

/// Static item definition, authored in the content catalog.
///
/// # Stacking
///
/// `max_stack` bounds the quantity a single inventory slot can hold:
/// - Stackable collectibles: large caps (e.g. 99)
/// - Unique items (keys, tools): max_stack = 1
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_stack: u32,
}

impl ItemDefinition {
    pub fn new(id: ItemId, name: impl Into<String>, max_stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            max_stack,
        }
    }
}
