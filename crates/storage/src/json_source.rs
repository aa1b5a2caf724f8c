//! JSON file snapshot source.
//!
//! Reads a single JSON document of the shape
//! `{ "activities": [...], "candidatePool": [...], "goals": [...] }`.
//! Every key is optional.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};
use crate::snapshot::Snapshot;
use crate::validation::validate_snapshot;
use super::{SnapshotSource, StorageError, Result};

/// Snapshot source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    /// Create a source reading from `path`. Nothing is read until
    /// [`SnapshotSource::load_snapshot`] is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// File this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SnapshotSource for JsonSnapshotSource {
    async fn load_snapshot(&self) -> Result<Snapshot> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = serde_json::from_str(&json)?;

        for issue in validate_snapshot(&snapshot) {
            warn!(subject = %issue.subject, field = %issue.field, "{}", issue.message);
        }

        info!(
            path = %self.path.display(),
            activities = snapshot.activities.len(),
            goals = snapshot.goals.len(),
            "Loaded snapshot"
        );

        Ok(snapshot)
    }
}
