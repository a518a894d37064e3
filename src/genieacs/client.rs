// SPDX-License-Identifier: MIT

//! HTTP client for the GenieACS inventory API

use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;

/// Paginated client for the GenieACS devices endpoint
///
/// Pages through the full inventory with `limit`/`skip` query parameters.
/// Each request is bounded by the configured timeout.
pub struct GenieAcsClient {
    http: reqwest::Client,
    base_url: String,
    page_limit: usize,
    projection: Option<String>,
}

impl GenieAcsClient {
    /// Creates a client from the application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.genieacs_url.clone(),
            page_limit: config.page_limit,
            projection: config.projection.clone(),
        })
    }

    /// Retrieves the complete device inventory, in page order.
    ///
    /// Pagination terminates on the first empty page and on nothing else;
    /// an API that never returns an empty page would keep this looping.
    /// GenieACS signals end-of-inventory with an empty array, so that signal
    /// is trusted absolutely.
    ///
    /// # Errors
    ///
    /// Any transport error, timeout or non-2xx status on any page aborts the
    /// whole fetch with no partial result — publishing an under-counted
    /// inventory would be worse than publishing none.
    pub async fn fetch_all_devices(&self) -> Result<Vec<Value>> {
        let mut devices = Vec::new();
        let mut skip = 0usize;
        loop {
            let batch = self.fetch_page(skip).await?;
            if batch.is_empty() {
                break;
            }
            skip += self.page_limit;
            tracing::trace!("Fetched page with {} devices (skip now {})", batch.len(), skip);
            devices.extend(batch);
        }
        Ok(devices)
    }

    async fn fetch_page(&self, skip: usize) -> Result<Vec<Value>> {
        let mut request = self.http.get(&self.base_url).query(&[
            ("limit", self.page_limit.to_string()),
            ("skip", skip.to_string()),
        ]);
        if let Some(projection) = &self.projection {
            request = request.query(&[("projection", projection.as_str())]);
        }

        let response = request.send().await?.error_for_status()?;
        let batch: Vec<Value> = response.json().await?;
        Ok(batch)
    }
}
