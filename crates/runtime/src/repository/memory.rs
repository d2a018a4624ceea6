use std::sync::Mutex;

use game_core::SaveData;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// In-memory implementation of [`SaveRepository`], used in tests and for
/// ephemeral sessions.
#[derive(Default)]
pub struct InMemorySaveRepo {
    record: Mutex<Option<SaveData>>,
}

impl InMemorySaveRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the repository with an existing record.
    pub fn with_record(data: SaveData) -> Self {
        Self {
            record: Mutex::new(Some(data)),
        }
    }
}

impl SaveRepository for InMemorySaveRepo {
    fn store(&self, data: &SaveData) -> Result<()> {
        let mut record = self.record.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        *record = Some(data.clone());
        Ok(())
    }

    fn load(&self) -> Result<SaveData> {
        let record = self.record.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        let data = record.clone().ok_or(RepositoryError::NotFound)?;
        if data.version != SaveData::CURRENT_VERSION {
            return Err(RepositoryError::Corrupt(format!(
                "unsupported save version {} (expected {})",
                data.version,
                SaveData::CURRENT_VERSION
            )));
        }
        Ok(data)
    }

    fn exists(&self) -> bool {
        self.record
            .lock()
            .map(|record| record.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut record = self.record.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        *record = None;
        Ok(())
    }
}
