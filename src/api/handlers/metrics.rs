use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::AppState;
use crate::cache::Snapshot;

/// GET /metrics
///
/// Serves the cached snapshot verbatim with the cache metadata appended.
/// Never fails: before the first collection cycle the zero snapshot renders
/// as just the metadata block with `genieacs_cache_success 0`.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    tracing::debug!("/metrics serving cached snapshot");
    let snapshot = state.cache.read().await;
    let body = render_scrape_body(&snapshot);

    (
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4")],
        body,
    )
        .into_response()
}

fn render_scrape_body(snapshot: &Snapshot) -> String {
    let mut body = String::with_capacity(snapshot.metrics_text.len() + 256);
    body.push_str(&snapshot.metrics_text);
    if !body.is_empty() && !body.ends_with('\n') {
        body.push('\n');
    }

    body.push_str("# HELP genieacs_cache_last_update Cache update time\n");
    body.push_str("# TYPE genieacs_cache_last_update gauge\n");
    body.push_str(&format!(
        "genieacs_cache_last_update {}\n",
        snapshot.last_update
    ));
    body.push_str("# HELP genieacs_cache_success Cache success\n");
    body.push_str("# TYPE genieacs_cache_success gauge\n");
    body.push_str(&format!(
        "genieacs_cache_success {}\n",
        u8::from(snapshot.success)
    ));
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_snapshot_renders_metadata_only() {
        let body = render_scrape_body(&Snapshot::default());
        assert!(body.starts_with("# HELP genieacs_cache_last_update"));
        assert!(body.contains("genieacs_cache_last_update 0\n"));
        assert!(body.ends_with("genieacs_cache_success 0\n"));
    }

    #[test]
    fn test_snapshot_body_precedes_metadata() {
        let snapshot = Snapshot {
            metrics_text: "genieacs_devices_total 4\n".to_string(),
            device_count: 4,
            last_update: 1700000000.5,
            success: true,
        };
        let body = render_scrape_body(&snapshot);
        assert!(body.starts_with("genieacs_devices_total 4\n"));
        assert!(body.contains("genieacs_cache_last_update 1700000000.5\n"));
        assert!(body.ends_with("genieacs_cache_success 1\n"));
    }

    #[test]
    fn test_missing_trailing_newline_is_added() {
        let snapshot = Snapshot {
            metrics_text: "genieacs_devices_total 1".to_string(),
            device_count: 1,
            last_update: 1.0,
            success: true,
        };
        let body = render_scrape_body(&snapshot);
        assert!(body.contains("genieacs_devices_total 1\n# HELP"));
    }
}
