//! Quest ledger: active progress records and the handed-in set.
//!
//! Per quest the lifecycle is NotStarted -> InProgress -> Completed ->
//! HandedIn. Only InProgress (an entry in `active`) and HandedIn (an id in
//! `handed_in`) are stored; "Completed" is derived on demand from objective
//! flags plus the current inventory, never persisted.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

use crate::env::{ObjectiveKind, ObjectiveSpec, QuestDefinition, QuestDirectory, QuestReward};
use crate::state::common::{ItemId, QuestId};
use crate::state::inventory::Inventory;

/// Errors raised by quest ledger transitions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuestError {
    #[error("quest '{0}' is already active")]
    AlreadyActive(QuestId),

    #[error("quest '{0}' was already handed in")]
    AlreadyHandedIn(QuestId),

    #[error("quest '{0}' is not active")]
    NotActive(QuestId),

    #[error("quest '{0}' still has incomplete objectives")]
    ObjectivesIncomplete(QuestId),

    #[error("hand-in requirements for quest '{0}' are not satisfied")]
    RequirementsNotSatisfied(QuestId),
}

/// Mutable progress of one objective, copied from its template on accept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveProgress {
    pub kind: ObjectiveKind,
    pub description: String,
    pub required_amount: u32,
    pub current_amount: u32,
    pub completed: bool,
}

impl ObjectiveProgress {
    pub fn from_spec(spec: &ObjectiveSpec) -> Self {
        Self {
            kind: spec.kind.clone(),
            description: spec.description.clone(),
            required_amount: spec.required_amount,
            current_amount: 0,
            completed: false,
        }
    }

    /// Advances progress by `amount`, clamping at the requirement.
    pub fn increase(&mut self, amount: u32) {
        if self.completed {
            return;
        }
        self.current_amount = (self.current_amount + amount).min(self.required_amount);
        if self.current_amount >= self.required_amount {
            self.completed = true;
        }
    }

    /// Sets absolute progress, clamping at the requirement.
    ///
    /// Used for objectives whose progress is re-derived from an external
    /// count (collect objectives read the inventory). Idempotent: applying
    /// the same count twice leaves the record unchanged.
    fn set_absolute(&mut self, count: u32) -> bool {
        let clamped = count.min(self.required_amount);
        if self.current_amount == clamped {
            return false;
        }
        self.current_amount = clamped;
        self.completed = clamped >= self.required_amount;
        true
    }
}

/// Copy-on-accept snapshot of a quest's objectives plus its identifier.
///
/// The definition itself is never stored here; it is re-resolved through the
/// [`QuestDirectory`] whenever needed, which is what makes these records
/// safely serializable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestProgress {
    pub quest_id: QuestId,
    pub objectives: Vec<ObjectiveProgress>,
}

impl QuestProgress {
    pub fn from_definition(definition: &QuestDefinition) -> Self {
        Self {
            quest_id: definition.id.clone(),
            objectives: definition
                .objectives
                .iter()
                .map(ObjectiveProgress::from_spec)
                .collect(),
        }
    }

    /// True when every tracked objective is flagged complete.
    pub fn objectives_completed(&self) -> bool {
        self.objectives.iter().all(|objective| objective.completed)
    }

    /// Description of the first incomplete objective, for the quest log.
    pub fn current_objective(&self) -> Option<&str> {
        self.objectives
            .iter()
            .find(|objective| !objective.completed)
            .map(|objective| objective.description.as_str())
    }
}

/// The quest ledger.
#[derive(Clone, Debug, Default)]
pub struct QuestLog {
    active: Vec<QuestProgress>,
    handed_in: BTreeSet<QuestId>,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[QuestProgress] {
        &self.active
    }

    pub fn handed_in(&self) -> &BTreeSet<QuestId> {
        &self.handed_in
    }

    pub fn is_active(&self, id: &QuestId) -> bool {
        self.active.iter().any(|progress| &progress.quest_id == id)
    }

    pub fn is_handed_in(&self, id: &QuestId) -> bool {
        self.handed_in.contains(id)
    }

    pub fn progress(&self, id: &QuestId) -> Option<&QuestProgress> {
        self.active.iter().find(|progress| &progress.quest_id == id)
    }

    /// NotStarted -> InProgress. Copies the definition's objective templates
    /// into a fresh progress record.
    pub fn accept(&mut self, definition: &QuestDefinition) -> Result<(), QuestError> {
        if self.is_active(&definition.id) {
            return Err(QuestError::AlreadyActive(definition.id.clone()));
        }
        if self.is_handed_in(&definition.id) {
            return Err(QuestError::AlreadyHandedIn(definition.id.clone()));
        }
        self.active.push(QuestProgress::from_definition(definition));
        Ok(())
    }

    /// Re-derives collect-objective progress from the current item counts.
    ///
    /// Safe to call redundantly; returns whether anything changed so the
    /// caller knows if the quest log projection needs a refresh.
    pub fn update_collect_objectives(&mut self, counts: &HashMap<ItemId, u32>) -> bool {
        let mut changed = false;
        for progress in self.active.iter_mut() {
            if progress.objectives_completed() {
                continue;
            }
            for objective in progress.objectives.iter_mut() {
                if objective.completed {
                    continue;
                }
                if let ObjectiveKind::CollectItem { item } = objective.kind {
                    let count = counts.get(&item).copied().unwrap_or(0);
                    changed |= objective.set_absolute(count);
                }
            }
        }
        changed
    }

    /// Advances talk objectives targeting the named NPC by one.
    ///
    /// Returns whether any objective changed.
    pub fn advance_talk_objectives(&mut self, npc: &str) -> bool {
        let mut changed = false;
        for progress in self.active.iter_mut() {
            for objective in progress.objectives.iter_mut() {
                if objective.completed {
                    continue;
                }
                if let ObjectiveKind::TalkTo { npc: target } = &objective.kind
                    && target == npc
                {
                    objective.increase(1);
                    changed = true;
                }
            }
        }
        changed
    }

    /// True when every hand-in requirement is currently covered by the
    /// inventory.
    pub fn requirements_met(definition: &QuestDefinition, inventory: &Inventory) -> bool {
        definition
            .required_items
            .iter()
            .all(|requirement| inventory.count_of(requirement.item) >= requirement.amount)
    }

    /// Derived "Completed" check: all objectives flagged complete and all
    /// hand-in requirements satisfied right now.
    pub fn ready_to_hand_in(&self, definition: &QuestDefinition, inventory: &Inventory) -> bool {
        self.progress(&definition.id)
            .is_some_and(|progress| progress.objectives_completed())
            && Self::requirements_met(definition, inventory)
    }

    /// Completed -> HandedIn. Consumes the required items, moves the quest
    /// id to the handed-in set, and returns the rewards for the caller to
    /// grant.
    pub fn hand_in(
        &mut self,
        definition: &QuestDefinition,
        inventory: &mut Inventory,
    ) -> Result<Vec<QuestReward>, QuestError> {
        let progress = self
            .progress(&definition.id)
            .ok_or_else(|| QuestError::NotActive(definition.id.clone()))?;
        if !progress.objectives_completed() {
            return Err(QuestError::ObjectivesIncomplete(definition.id.clone()));
        }
        if !Self::requirements_met(definition, inventory) {
            return Err(QuestError::RequirementsNotSatisfied(definition.id.clone()));
        }

        for requirement in &definition.required_items {
            inventory.remove_item(requirement.item, requirement.amount);
        }

        self.active
            .retain(|progress| progress.quest_id != definition.id);
        self.handed_in.insert(definition.id.clone());

        Ok(definition.rewards.clone())
    }

    pub fn snapshot(&self) -> (Vec<QuestProgress>, BTreeSet<QuestId>) {
        (self.active.clone(), self.handed_in.clone())
    }

    /// Overwrites the ledger from save records, re-linking each quest id
    /// against the directory.
    ///
    /// Entries that no longer resolve are dropped and returned; valid
    /// entries load regardless of how many neighbors were dropped.
    pub fn restore<D>(
        &mut self,
        progress: Vec<QuestProgress>,
        handed_in: BTreeSet<QuestId>,
        quests: &D,
    ) -> Vec<QuestId>
    where
        D: QuestDirectory + ?Sized,
    {
        self.active.clear();

        let mut dropped = Vec::new();
        for record in progress {
            if quests.contains(&record.quest_id) {
                self.active.push(record);
            } else {
                dropped.push(record.quest_id);
            }
        }

        self.handed_in = handed_in
            .into_iter()
            .filter(|id| {
                let known = quests.contains(id);
                if !known {
                    dropped.push(id.clone());
                }
                known
            })
            .collect();

        dropped
    }
}
