//! Positional-slot inventory ledger.
//!
//! Slots are identified by their index, which is also the stable key used by
//! the save record. The item-count cache is the authoritative source for
//! quest progress checks and must be rebuilt after every structural
//! mutation; all mutating operations here do so before returning.

use arrayvec::ArrayVec;
use std::collections::HashMap;

use crate::config::GameConfig;
use crate::env::ItemDirectory;
use crate::state::common::ItemId;
use crate::state::save::InventorySlotRecord;

/// One occupied slot: an item and how many of it are stacked there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub item: ItemId,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item: ItemId, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

/// Player inventory: a fixed run of slots plus the derived count cache.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    slots: ArrayVec<Option<ItemStack>, { GameConfig::MAX_INVENTORY_SLOTS }>,
    counts: HashMap<ItemId, u32>,
}

impl Inventory {
    /// Creates an empty inventory with `slot_count` slots, clamped to
    /// [`GameConfig::MAX_INVENTORY_SLOTS`].
    pub fn new(slot_count: usize) -> Self {
        let mut slots = ArrayVec::new();
        for _ in 0..slot_count.min(GameConfig::MAX_INVENTORY_SLOTS) {
            slots.push(None);
        }
        Self {
            slots,
            counts: HashMap::new(),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Adds `quantity` of an item, filling existing stacks first (first-fit
    /// by slot order), then empty slots up to `max_stack` each.
    ///
    /// Returns `false` if capacity ran out before the full quantity was
    /// stored. Whatever fit stays in the inventory; the caller decides what
    /// to do with the leftover (typically drop it on the ground).
    pub fn add_item(&mut self, item: ItemId, quantity: u32, max_stack: u32) -> bool {
        let mut remaining = quantity;

        // Top up existing stacks of the same item first.
        if max_stack > 1 {
            for slot in self.slots.iter_mut() {
                if remaining == 0 {
                    break;
                }
                if let Some(stack) = slot
                    && stack.item == item
                    && stack.quantity < max_stack
                {
                    let space = max_stack - stack.quantity;
                    let moved = remaining.min(space);
                    stack.quantity += moved;
                    remaining -= moved;
                }
            }
        }

        // Spill the rest into empty slots.
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if slot.is_none() {
                let moved = remaining.min(max_stack.max(1));
                *slot = Some(ItemStack::new(item, moved));
                remaining -= moved;
            }
        }

        self.rebuild_counts();
        remaining == 0
    }

    /// Removes up to `amount` of an item, walking slots in reverse order and
    /// consuming whole slots before splitting one.
    ///
    /// Removing more than is present clamps at empty; the return value is
    /// the quantity actually removed, so callers can detect the shortfall.
    pub fn remove_item(&mut self, item: ItemId, amount: u32) -> u32 {
        let mut remaining = amount;

        for slot in self.slots.iter_mut().rev() {
            if remaining == 0 {
                break;
            }
            if let Some(stack) = slot
                && stack.item == item
            {
                if stack.quantity <= remaining {
                    remaining -= stack.quantity;
                    *slot = None;
                } else {
                    stack.quantity -= remaining;
                    remaining = 0;
                }
            }
        }

        self.rebuild_counts();
        amount - remaining
    }

    /// Total quantity per item, from the cache.
    pub fn counts(&self) -> &HashMap<ItemId, u32> {
        &self.counts
    }

    pub fn count_of(&self, item: ItemId) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    /// Recomputes the count cache from the slots.
    ///
    /// Idempotent; every structural mutation in this module already calls
    /// it, but restore flows call it again after wholesale slot rewrites.
    pub fn rebuild_counts(&mut self) {
        self.counts.clear();
        for stack in self.slots.iter().flatten() {
            *self.counts.entry(stack.item).or_insert(0) += stack.quantity;
        }
    }

    /// Empties every slot and resets the count cache.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.counts.clear();
    }

    /// Flattens occupied slots into save records, ordered by slot index.
    pub fn snapshot(&self) -> Vec<InventorySlotRecord> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref().map(|stack| InventorySlotRecord {
                    item: stack.item,
                    slot: index,
                    quantity: stack.quantity,
                })
            })
            .collect()
    }

    /// Clears all slots and re-populates them from save records.
    ///
    /// Records whose slot index falls outside the current slot count are
    /// skipped. Records whose item no longer resolves in the directory are
    /// dropped and returned so the caller can report them; they are never
    /// kept as orphaned slots. Quantities are clamped to the definition's
    /// stack cap.
    pub fn restore<D>(
        &mut self,
        records: &[InventorySlotRecord],
        items: &D,
    ) -> Vec<InventorySlotRecord>
    where
        D: ItemDirectory + ?Sized,
    {
        self.clear();

        let mut dropped = Vec::new();
        for record in records {
            if record.slot >= self.slots.len() {
                continue;
            }
            let Some(definition) = items.definition(record.item) else {
                dropped.push(*record);
                continue;
            };
            let quantity = record.quantity.min(definition.max_stack.max(1));
            if quantity == 0 {
                continue;
            }
            self.slots[record.slot] = Some(ItemStack::new(record.item, quantity));
        }

        self.rebuild_counts();
        dropped
    }
}
