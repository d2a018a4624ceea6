//! NPC relationship ledger.
//!
//! Points accumulate per NPC during a session; the heart level is always a
//! pure function of those points against the configured thresholds. Only the
//! level is persisted: reloading a save restores levels with zero points,
//! so progress toward the next heart starts over (documented partial
//! fidelity of the save format).

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::env::NpcProfile;
use crate::state::common::ItemId;

/// Relationship record for one NPC.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Friendship {
    pub points: u32,
    pub level: u8,
    /// Levels whose rewards have already been granted. Keeps level-up side
    /// effects one-shot even if progress is re-derived.
    granted_levels: Vec<u8>,
}

impl Friendship {
    fn grant(&mut self, level: u8) -> bool {
        if self.granted_levels.contains(&level) {
            return false;
        }
        self.granted_levels.push(level);
        true
    }
}

/// The relationship ledger, keyed by NPC name.
#[derive(Clone, Debug, Default)]
pub struct FriendshipBook {
    entries: BTreeMap<String, Friendship>,
}

impl FriendshipBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level_of(&self, npc: &str) -> u8 {
        self.entries.get(npc).map(|entry| entry.level).unwrap_or(0)
    }

    pub fn points_of(&self, npc: &str) -> u32 {
        self.entries.get(npc).map(|entry| entry.points).unwrap_or(0)
    }

    /// Adds (or subtracts) friendship points and recomputes the level.
    ///
    /// Points are clamped to `[0, last threshold]`. The level only ever
    /// increases within a session. Returns the levels newly reached by this
    /// call whose rewards have not been granted yet, each reported exactly
    /// once.
    pub fn add_points(&mut self, npc: &str, amount: i32, config: &GameConfig) -> Vec<u8> {
        if config
            .exempt_npc
            .as_deref()
            .is_some_and(|exempt| exempt == npc)
        {
            return Vec::new();
        }

        let entry = self.entries.entry(npc.to_owned()).or_default();

        let max_points = config.max_friendship_points();
        entry.points = entry
            .points
            .saturating_add_signed(amount)
            .min(max_points);

        let reached = level_for_points(entry.points, &config.heart_thresholds);
        if reached <= entry.level {
            return Vec::new();
        }

        let previous = entry.level;
        entry.level = reached;
        ((previous + 1)..=reached)
            .filter(|&level| entry.grant(level))
            .collect()
    }

    /// Gift affinity points for handing `item` to an NPC with `profile`.
    pub fn gift_points(profile: &NpcProfile, item: ItemId, config: &GameConfig) -> i32 {
        if profile.loved_items.contains(&item) {
            config.gift_points.loved
        } else if profile.liked_items.contains(&item) {
            config.gift_points.liked
        } else if profile.hated_items.contains(&item) {
            config.gift_points.hated
        } else {
            config.gift_points.neutral
        }
    }

    /// Fraction of the way from the current level to the next, in [0, 1].
    pub fn progress_to_next(&self, npc: &str, config: &GameConfig) -> f32 {
        let Some(entry) = self.entries.get(npc) else {
            return 0.0;
        };
        let thresholds = &config.heart_thresholds;
        if entry.level as usize >= thresholds.len() {
            return 1.0;
        }
        let previous = if entry.level == 0 {
            0
        } else {
            thresholds[entry.level as usize - 1]
        };
        let next = thresholds[entry.level as usize];
        // Points can sit below the current level's threshold right after a
        // load (levels persist, points do not).
        let into_level = entry.points.saturating_sub(previous);
        (into_level as f32 / (next - previous) as f32).clamp(0.0, 1.0)
    }

    /// NPC name -> level, the only slice of this ledger that persists.
    pub fn snapshot(&self) -> BTreeMap<String, u8> {
        self.entries
            .iter()
            .map(|(npc, entry)| (npc.clone(), entry.level))
            .collect()
    }

    /// Overwrites the ledger from persisted levels.
    ///
    /// Points reset to zero and every restored level is pre-marked as
    /// granted, so level rewards never re-fire after a load.
    pub fn restore(&mut self, levels: BTreeMap<String, u8>) {
        self.entries = levels
            .into_iter()
            .map(|(npc, level)| {
                let entry = Friendship {
                    points: 0,
                    level,
                    granted_levels: (1..=level).collect(),
                };
                (npc, entry)
            })
            .collect();
    }
}

/// Highest threshold index reached by `points`, as a 1-based level.
fn level_for_points(points: u32, thresholds: &[u32]) -> u8 {
    let mut level = 0;
    for (index, &threshold) in thresholds.iter().enumerate() {
        if points >= threshold {
            level = index as u8 + 1;
        } else {
            break;
        }
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        let mut config = GameConfig::new();
        config.exempt_npc = Some("Fritter".to_owned());
        config
    }

    #[test]
    fn level_follows_thresholds() {
        let config = config();
        let mut book = FriendshipBook::new();

        assert_eq!(book.add_points("Chirp", 99, &config), Vec::<u8>::new());
        assert_eq!(book.level_of("Chirp"), 0);

        assert_eq!(book.add_points("Chirp", 1, &config), vec![1]);
        assert_eq!(book.level_of("Chirp"), 1);
        assert_eq!(book.points_of("Chirp"), 100);
    }

    #[test]
    fn one_call_can_cross_multiple_levels() {
        let config = config();
        let mut book = FriendshipBook::new();

        assert_eq!(book.add_points("Chirp", 700, &config), vec![1, 2, 3]);
        assert_eq!(book.level_of("Chirp"), 3);
    }

    #[test]
    fn points_clamp_at_cap_and_zero() {
        let config = config();
        let mut book = FriendshipBook::new();

        book.add_points("Chirp", 10_000, &config);
        assert_eq!(book.points_of("Chirp"), config.max_friendship_points());
        assert_eq!(book.level_of("Chirp"), config.max_heart_level());

        book.add_points("Fishsticks", -50, &config);
        assert_eq!(book.points_of("Fishsticks"), 0);
    }

    #[test]
    fn level_is_monotonic_under_negative_points() {
        let config = config();
        let mut book = FriendshipBook::new();

        book.add_points("Chirp", 120, &config);
        assert_eq!(book.level_of("Chirp"), 1);

        // Hated gift drops points below the threshold; the level stays.
        book.add_points("Chirp", -100, &config);
        assert_eq!(book.level_of("Chirp"), 1);
        assert_eq!(book.points_of("Chirp"), 20);
    }

    #[test]
    fn rewards_never_refire_for_the_same_level() {
        let config = config();
        let mut book = FriendshipBook::new();

        assert_eq!(book.add_points("Chirp", 150, &config), vec![1]);
        book.add_points("Chirp", -100, &config);
        // Climbing back over the threshold grants nothing new.
        assert_eq!(book.add_points("Chirp", 100, &config), Vec::<u8>::new());
    }

    #[test]
    fn exempt_npc_accumulates_nothing() {
        let config = config();
        let mut book = FriendshipBook::new();

        assert_eq!(book.add_points("Fritter", 500, &config), Vec::<u8>::new());
        assert_eq!(book.points_of("Fritter"), 0);
        assert_eq!(book.level_of("Fritter"), 0);
    }

    #[test]
    fn restore_keeps_levels_resets_points_and_suppresses_rewards() {
        let config = config();
        let mut book = FriendshipBook::new();
        book.add_points("Chirp", 350, &config);

        let mut restored = FriendshipBook::new();
        restored.restore(book.snapshot());

        assert_eq!(restored.level_of("Chirp"), 2);
        assert_eq!(restored.points_of("Chirp"), 0);

        // Re-earning the already-held level fires no rewards; the next
        // level up still does.
        assert_eq!(restored.add_points("Chirp", 600, &config), vec![3]);
    }

    #[test]
    fn gift_points_follow_affinity() {
        let config = config();
        let mut profile = NpcProfile::new("Chirp");
        profile.loved_items.push(ItemId(1));
        profile.liked_items.push(ItemId(2));
        profile.hated_items.push(ItemId(3));

        assert_eq!(FriendshipBook::gift_points(&profile, ItemId(1), &config), 50);
        assert_eq!(FriendshipBook::gift_points(&profile, ItemId(2), &config), 20);
        assert_eq!(FriendshipBook::gift_points(&profile, ItemId(3), &config), -20);
        assert_eq!(FriendshipBook::gift_points(&profile, ItemId(9), &config), 10);
    }
}
