// SPDX-License-Identifier: MIT

//! Metrics collection orchestration module
//!
//! Starts the background collection loop: fetch the full inventory, render
//! exposition text, publish it to the shared snapshot cache, sleep, repeat.

mod render;

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::cache::SnapshotCache;
use crate::config::Config;
use crate::error::Result;
use crate::genieacs::GenieAcsClient;

pub use render::{escape_label_value, render_inventory};

/// Starts the background collection loop
///
/// Spawns one long-lived task that alternates between collecting and
/// sleeping, forever. The interval is fixed and unconditional: the same
/// delay follows a failed cycle as a successful one, with no backoff and
/// no early wake. Only the shutdown signal ends the loop.
pub fn start_collection_loop(
    mut shutdown_rx: watch::Receiver<bool>,
    config: Arc<Config>,
    client: GenieAcsClient,
    cache: SnapshotCache,
) -> JoinHandle<()> {
    let interval = config.fetch_interval_secs;
    tracing::info!("Starting background collection loop every {}s", interval);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval));
        loop {
            tokio::select! {
                _ = ticker.tick() => {},
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        tracing::info!("Stopping collection loop");
                        break;
                    }
                }
            }

            let start = std::time::Instant::now();
            match run_cycle(&client, &cache).await {
                Ok(count) => {
                    tracing::debug!(
                        "Updated cache with {} devices in {:.3}s",
                        count,
                        start.elapsed().as_secs_f64()
                    );
                }
                Err(e) => {
                    // Keep the previous snapshot; only the success flag flips
                    // so scrapers can tell the data is stale.
                    cache.mark_failed().await;
                    tracing::warn!(
                        "Collection cycle failed in {:.3}s: {}",
                        start.elapsed().as_secs_f64(),
                        e
                    );
                }
            }
        }
    })
}

/// Runs one full collection cycle and publishes the result
///
/// # Errors
///
/// Propagates any fetch failure; the caller decides how to mark the cache.
pub async fn run_cycle(client: &GenieAcsClient, cache: &SnapshotCache) -> Result<usize> {
    let devices = client.fetch_all_devices().await?;
    let body = render_inventory(&devices);
    cache.publish(body, devices.len() as u64).await;
    Ok(devices.len())
}
