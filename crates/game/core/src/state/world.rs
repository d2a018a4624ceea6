//! Collected world-item ledger.
//!
//! Tracks which placed collectibles have been picked up, keyed by their
//! globally unique world identifier (e.g. "Can_Area1_1"). Membership is
//! append-only for the life of a session; hiding the corresponding scene
//! instances is the runtime's job.

use std::collections::BTreeSet;

/// The world-collection ledger.
#[derive(Clone, Debug, Default)]
pub struct WorldLedger {
    collected: BTreeSet<String>,
}

impl WorldLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collected(&self, world_id: &str) -> bool {
        !world_id.is_empty() && self.collected.contains(world_id)
    }

    /// Marks a world item as collected. Idempotent; returns whether the id
    /// was newly inserted. Empty identifiers are rejected (inventory-only
    /// clones carry no world id and must not pollute the set).
    pub fn mark_collected(&mut self, world_id: &str) -> bool {
        if world_id.is_empty() {
            return false;
        }
        self.collected.insert(world_id.to_owned())
    }

    pub fn collected(&self) -> &BTreeSet<String> {
        &self.collected
    }

    pub fn snapshot(&self) -> BTreeSet<String> {
        self.collected.clone()
    }

    /// Overwrites the collected set from a save record.
    pub fn restore(&mut self, collected: BTreeSet<String>) {
        self.collected = collected;
    }
}
