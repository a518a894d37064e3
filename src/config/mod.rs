// SPDX-License-Identifier: MIT

//! Configuration module for GenieACS Exporter application
//!
//! Loads and parses configuration from environment variables.

use crate::error::{AppError, Result};

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:9105";
    pub const FETCH_INTERVAL_SECS: u64 = 300;
    pub const REQUEST_TIMEOUT_SECS: u64 = 15;
    pub const PAGE_LIMIT: usize = 1000;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const GENIEACS_URL: &str = "GENIEACS_URL";
    pub const FETCH_INTERVAL: &str = "FETCH_INTERVAL";
    pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
    pub const PAGE_LIMIT: &str = "PAGE_LIMIT";
    pub const DEVICE_PROJECTION: &str = "DEVICE_PROJECTION";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    /// Base URL of the GenieACS devices endpoint, e.g. `http://acs:7557/devices`
    pub genieacs_url: String,
    pub fetch_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub page_limit: usize,
    /// Optional `projection` query value forwarded to the inventory API
    /// (JSON-encoded field allowlist) to reduce payload size.
    pub projection: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            genieacs_url: String::new(),
            fetch_interval_secs: defaults::FETCH_INTERVAL_SECS,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            page_limit: defaults::PAGE_LIMIT,
            projection: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when `GENIEACS_URL` is absent or empty —
    /// the exporter cannot do anything useful without an inventory endpoint.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let genieacs_url = std::env::var(env_vars::GENIEACS_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "{} must be set to the GenieACS devices endpoint",
                    env_vars::GENIEACS_URL
                ))
            })?;

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        let fetch_interval_secs =
            parse_env(env_vars::FETCH_INTERVAL, defaults::FETCH_INTERVAL_SECS);
        let request_timeout_secs =
            parse_env(env_vars::REQUEST_TIMEOUT, defaults::REQUEST_TIMEOUT_SECS);
        let page_limit = parse_env(env_vars::PAGE_LIMIT, defaults::PAGE_LIMIT);

        let projection = std::env::var(env_vars::DEVICE_PROJECTION)
            .ok()
            .filter(|p| !p.trim().is_empty());

        let config = Config {
            server_addr,
            genieacs_url,
            fetch_interval_secs,
            request_timeout_secs,
            page_limit,
            projection,
        };
        config.validate().map_err(AppError::Config)?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.genieacs_url.trim().is_empty() {
            return Err("GenieACS URL cannot be empty".to_string());
        }
        if !self.genieacs_url.starts_with("http://") && !self.genieacs_url.starts_with("https://")
        {
            return Err(format!(
                "Invalid GenieACS URL '{}': expected http(s) scheme",
                self.genieacs_url
            ));
        }
        if self.page_limit == 0 {
            return Err("Page limit must be greater than zero".to_string());
        }
        if self.fetch_interval_secs == 0 {
            return Err("Fetch interval must be greater than zero".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Failed to parse {}='{}'. Using default {}.", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
