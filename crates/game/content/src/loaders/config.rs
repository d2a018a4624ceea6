//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing fields fall back to their defaults, so a config file only
    /// needs to state what it overrides.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            slot_count = 12
            exempt_npc = "Fritter"

            [[scene_tracks]]
            scene = 0
            track = "MenuTheme"

            [[scene_tracks]]
            scene = 2
            track = "ForestTheme"
            "#,
        )
        .unwrap();

        assert_eq!(config.slot_count, 12);
        assert_eq!(config.exempt_npc.as_deref(), Some("Fritter"));
        assert_eq!(config.grace_ticks, GameConfig::DEFAULT_GRACE_TICKS);
        assert_eq!(
            config.default_track_for(game_core::SceneIndex(2)),
            Some("ForestTheme")
        );
    }
}
