// SPDX-License-Identifier: MIT

//! # GenieACS Exporter
//!
//! Prometheus exporter for device traffic counters held in a GenieACS
//! inventory.
//!
//! A background collector periodically pages through the inventory API,
//! extracts per-interface byte counters from the nested TR-069 device
//! documents and publishes the rendered exposition text into a shared
//! snapshot cache. The HTTP server answers every scrape from that cache,
//! independent of collection cadence.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `cache`: shared snapshot cache
//! - `collector`: collection loop and exposition rendering
//! - `config`: configuration management
//! - `error`: error types
//! - `genieacs`: inventory API client and device-record traversal
//! - `prelude`: commonly used types and traits

mod api;
mod cache;
mod collector;
mod config;
mod error;
mod genieacs;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Metrics collection loop and cycle
pub use collector::{render_inventory, run_cycle, start_collection_loop};

/// Snapshot cache
pub use cache::{Snapshot, SnapshotCache};

/// GenieACS client and extraction primitives
pub use genieacs::{GenieAcsClient, InterfaceStat, extract_stats};
