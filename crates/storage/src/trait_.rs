//! Snapshot source abstraction.

use async_trait::async_trait;
use crate::snapshot::Snapshot;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Where activities, candidate pools and goals come from.
///
/// This allows different backends to be plugged in front of the core.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Load the current snapshot.
    async fn load_snapshot(&self) -> Result<Snapshot>;
}

/// Source that hands out a snapshot already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    snapshot: Snapshot,
}

impl InMemorySource {
    /// Wrap a snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl SnapshotSource for InMemorySource {
    async fn load_snapshot(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }
}
