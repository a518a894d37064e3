// SPDX-License-Identifier: MIT

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use genieacs_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// Snapshot cache
pub use crate::cache::{Snapshot, SnapshotCache};

// GenieACS client and extraction
pub use crate::genieacs::{GenieAcsClient, InterfaceStat, extract_stats, field, get_path};

// Collector
pub use crate::collector::{render_inventory, run_cycle, start_collection_loop};
