// SPDX-License-Identifier: MIT

//! Shared snapshot cache for the last collection result
//!
//! Holds exactly one snapshot per process lifetime: the latest rendered
//! exposition text plus its metadata. The collector is the sole writer,
//! the HTTP handlers are concurrent readers.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

/// The unit of cache state: one rendered metrics payload with metadata.
///
/// The zero value (empty text, `success = false`) is what scrapers see
/// before the first collection cycle completes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Rendered exposition text (HELP/TYPE comments and metric lines)
    pub metrics_text: String,
    /// Number of devices counted in the last successful cycle
    pub device_count: u64,
    /// Epoch seconds of the last successful publish
    pub last_update: f64,
    /// Whether the most recent cycle succeeded
    pub success: bool,
}

/// Single shared snapshot, replaced wholesale on every collection cycle.
///
/// The lock is held only for the copy or replace itself, never across
/// network I/O or rendering, so readers observe either the pre- or
/// post-write snapshot and never a mix.
#[derive(Clone, Default)]
pub struct SnapshotCache {
    inner: Arc<RwLock<Snapshot>>,
}

impl SnapshotCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new snapshot with `success = true` and the current timestamp
    pub async fn publish(&self, metrics_text: String, device_count: u64) {
        let snapshot = Snapshot {
            metrics_text,
            device_count,
            last_update: epoch_seconds(),
            success: true,
        };
        let mut guard = self.inner.write().await;
        *guard = snapshot;
    }

    /// Flips only the success flag to false.
    ///
    /// Text, device count and timestamp of the last good snapshot are kept,
    /// so scrapers see stale-but-labeled data instead of an empty response.
    pub async fn mark_failed(&self) {
        let mut guard = self.inner.write().await;
        guard.success = false;
    }

    /// Returns an owned copy of the current snapshot
    pub async fn read(&self) -> Snapshot {
        self.inner.read().await.clone()
    }
}

fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
