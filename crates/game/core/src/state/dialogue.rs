//! Completed-dialogue ledger.
//!
//! Remembers which one-shot conversations have already run so they are not
//! replayed after a reload. Presentation (typewriter, choices) lives
//! entirely outside the core.

use std::collections::BTreeSet;

#[derive(Clone, Debug, Default)]
pub struct DialogueLog {
    completed: BTreeSet<String>,
}

impl DialogueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, dialogue_id: &str) -> bool {
        self.completed.contains(dialogue_id)
    }

    /// Idempotent; returns whether the id was newly recorded.
    pub fn mark_completed(&mut self, dialogue_id: &str) -> bool {
        if dialogue_id.is_empty() {
            return false;
        }
        self.completed.insert(dialogue_id.to_owned())
    }

    pub fn snapshot(&self) -> BTreeSet<String> {
        self.completed.clone()
    }

    pub fn restore(&mut self, completed: BTreeSet<String>) {
        self.completed = completed;
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }
}
