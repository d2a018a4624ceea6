//! Effectful runtime around `game-core`.
//!
//! The runtime owns everything that touches the outside world: the
//! persistence gateway for the save record, the directory implementations
//! serving static content, the engine-glue traits the host implements, and
//! the load orchestrator that applies a snapshot across scene transitions.
//! [`Session`] bundles them for the host's game loop.
pub mod directory;
pub mod error;
pub mod loader;
pub mod repository;
pub mod rewards;
pub mod scene;
pub mod session;

pub use directory::{DirectoryManager, ItemDirectoryImpl, NpcDirectoryImpl, QuestDirectoryImpl};
pub use error::{Result, RuntimeError};
pub use loader::{ApplyReport, Frame, LoadOrchestrator, LoadOutcome, LoadPhase};
pub use repository::{FileSaveRepository, InMemorySaveRepo, RepositoryError, SaveRepository};
pub use rewards::grant_rewards;
pub use scene::{Projection, SceneHost};
pub use session::Session;
