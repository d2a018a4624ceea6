//! [`game_core::NpcDirectory`] backed by an in-memory map.
use game_core::{NpcDirectory, NpcProfile};
use std::collections::HashMap;

/// NpcDirectory implementation with static NPC profiles.
pub struct NpcDirectoryImpl {
    profiles: HashMap<String, NpcProfile>,
}

impl NpcDirectoryImpl {
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    pub fn from_profiles(profiles: Vec<NpcProfile>) -> Self {
        let mut directory = Self::new();
        for profile in profiles {
            directory.add_profile(profile);
        }
        directory
    }

    pub fn add_profile(&mut self, profile: NpcProfile) {
        if self.profiles.contains_key(&profile.name) {
            tracing::warn!("Duplicate NPC '{}' in catalog, keeping first", profile.name);
            return;
        }
        self.profiles.insert(profile.name.clone(), profile);
    }
}

impl Default for NpcDirectoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl NpcDirectory for NpcDirectoryImpl {
    fn profile(&self, name: &str) -> Option<&NpcProfile> {
        self.profiles.get(name)
    }
}
