// SPDX-License-Identifier: MIT

//! HTTP API module for GenieACS Exporter
//!
//! Provides the scrape endpoint and a health check.
//!
//! # Endpoints
//! - `GET /health` — health check
//! - `GET /metrics` — cached Prometheus metrics

pub mod handlers;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::cache::SnapshotCache;

/// Application state shared with endpoints
///
/// The handlers only ever read the snapshot cache; configuration stays with
/// the collector side.
pub struct AppState {
    pub cache: SnapshotCache,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_router() {
        let cache = SnapshotCache::new();
        let state = Arc::new(AppState { cache });

        let _router = create_router(state);
        // If we get here without panicking, the router was created successfully
    }
}
