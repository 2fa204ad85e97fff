//! Storage abstractions for snapshot persistence.
//!
//! History is an append-only flat namespace of immutable JSON blobs, one
//! per run per cabin. There is no update-in-place, no deletion, and no
//! compaction; the diff baseline is always the two highest-sorting keys.
//!
//! ## Directory Structure
//!
//! ```text
//! history/
//! ├── 101297/
//! │   ├── 20220101T080000.json
//! │   └── 20220102T080000.json
//! └── 101209/
//!     └── 20220101T080005.json
//! ```

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::Snapshot;

// Re-export for convenience
pub use local::LocalHistory;

/// Metadata about a snapshot write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Key the snapshot was persisted under
    pub key: String,
    /// Number of dates in the snapshot
    pub date_count: usize,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Persist a snapshot under its time-derived key.
    ///
    /// Writes are create-or-fail: a key that already exists is a storage
    /// error, so two overlapping invocations cannot silently clobber each
    /// other.
    async fn write_snapshot(&self, snapshot: &Snapshot) -> Result<WriteMetadata>;

    /// Load the two most recent snapshots for a cabin, in chronological
    /// order (older first).
    ///
    /// Fewer than two persisted snapshots is not an error; the returned
    /// vector simply holds fewer than two entries and callers must branch
    /// on its length ("insufficient history").
    async fn load_latest_two(&self, cabin_id: &str) -> Result<Vec<Snapshot>>;

    /// List all persisted keys for a cabin, sorted ascending.
    async fn list_keys(&self, cabin_id: &str) -> Result<Vec<String>>;
}
