use game_core::SaveData;

use crate::repository::Result;

/// The persistence gateway: reads and writes the one save record.
///
/// Implementations hold exactly one record; every store overwrites the
/// previous one. Interior mutability keeps the trait object shareable from
/// the single game-update thread.
pub trait SaveRepository {
    /// Persist a snapshot, replacing any existing record.
    fn store(&self, data: &SaveData) -> Result<()>;

    /// Read the snapshot back.
    ///
    /// # Errors
    ///
    /// - [`RepositoryError::NotFound`](crate::repository::RepositoryError::NotFound)
    ///   if no record has ever been stored
    /// - [`RepositoryError::Corrupt`](crate::repository::RepositoryError::Corrupt)
    ///   if the record cannot be deserialized or its schema version does not
    ///   match
    fn load(&self) -> Result<SaveData>;

    /// Whether a record currently exists.
    fn exists(&self) -> bool;

    /// Remove the record, if any.
    fn delete(&self) -> Result<()>;
}
