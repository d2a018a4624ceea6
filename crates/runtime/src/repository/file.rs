//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::SaveData;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// File-based implementation of [`SaveRepository`].
///
/// Stores the save record as pretty-printed JSON at a fixed path, one file
/// overwritten on every save. Writes go to a temp file first and are moved
/// into place with an atomic rename so an interrupted save never leaves a
/// truncated record behind.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    /// Create a repository storing its record at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository at the default per-user location
    /// (`<data dir>/save_data.json`).
    pub fn at_default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "topdown").ok_or_else(|| {
            RepositoryError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no home directory available",
            ))
        })?;
        Ok(Self::new(dirs.data_dir().join("save_data.json")))
    }

    /// Path of the save file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveRepository for FileSaveRepository {
    fn store(&self, data: &SaveData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(data)
            .map_err(|e| RepositoryError::Corrupt(e.to_string()))?;

        // Write to temp file, then atomic rename.
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved game to {}", self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<SaveData> {
        if !self.path.exists() {
            return Err(RepositoryError::NotFound);
        }

        let bytes = fs::read(&self.path)?;
        let data: SaveData = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::Corrupt(e.to_string()))?;

        if data.version != SaveData::CURRENT_VERSION {
            return Err(RepositoryError::Corrupt(format!(
                "unsupported save version {} (expected {})",
                data.version,
                SaveData::CURRENT_VERSION
            )));
        }

        tracing::debug!("Loaded game from {}", self.path.display());

        Ok(data)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!("Deleted save at {}", self.path.display());
        }
        Ok(())
    }
}
