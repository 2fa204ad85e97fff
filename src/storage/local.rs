//! Local filesystem snapshot storage.
//!
//! One JSON file per snapshot under `{root}/{cabin_id}/{key}.json`. Keys
//! are fixed-width timestamps (`YYYYMMDDTHHMMSS`) so lexicographic order
//! of file names equals chronological order, and the two most recent
//! snapshots are always the two highest-sorting entries.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Snapshot;
use crate::storage::{SnapshotStorage, WriteMetadata};

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalHistory {
    root_dir: PathBuf,
}

impl LocalHistory {
    /// Create a new history store rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Directory holding one cabin's snapshots.
    fn cabin_dir(&self, cabin_id: &str) -> PathBuf {
        self.root_dir.join(cabin_id)
    }

    /// Full path for a cabin's snapshot key.
    fn snapshot_path(&self, cabin_id: &str, key: &str) -> PathBuf {
        self.cabin_dir(cabin_id).join(format!("{key}.json"))
    }

    async fn read_snapshot(&self, cabin_id: &str, key: &str) -> Result<Snapshot> {
        let path = self.snapshot_path(cabin_id, key);
        let bytes = tokio::fs::read(&path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl SnapshotStorage for LocalHistory {
    async fn write_snapshot(&self, snapshot: &Snapshot) -> Result<WriteMetadata> {
        let key = snapshot.key();
        let path = self.snapshot_path(&snapshot.cabin_id, &key);

        tokio::fs::create_dir_all(self.cabin_dir(&snapshot.cabin_id)).await?;

        // create_new guards against a second overlapping invocation
        // landing on the same key.
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    AppError::storage(format!(
                        "Snapshot key collision for cabin {} at {key}; is another run active?",
                        snapshot.cabin_id
                    ))
                } else {
                    AppError::Io(e)
                }
            })?;

        let bytes = serde_json::to_vec_pretty(snapshot)?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        Ok(WriteMetadata {
            key,
            date_count: snapshot.count,
            timestamp: Utc::now(),
        })
    }

    async fn load_latest_two(&self, cabin_id: &str) -> Result<Vec<Snapshot>> {
        let keys = self.list_keys(cabin_id).await?;

        let start = keys.len().saturating_sub(2);
        let mut snapshots = Vec::with_capacity(2);
        for key in &keys[start..] {
            snapshots.push(self.read_snapshot(cabin_id, key).await?);
        }
        Ok(snapshots)
    }

    async fn list_keys(&self, cabin_id: &str) -> Result<Vec<String>> {
        let dir = self.cabin_dir(cabin_id);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::Io(e)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(key) = name.strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }
}
