// SPDX-License-Identifier: MIT

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_addr, "0.0.0.0:9105");
        assert_eq!(config.fetch_interval_secs, 300);
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.page_limit, 1000);
        assert!(config.genieacs_url.is_empty());
        assert!(config.projection.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let config = Config::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = Config {
            genieacs_url: "ftp://acs:7557/devices".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("http(s)"));
    }

    #[test]
    fn test_validate_accepts_http_url() {
        let config = Config {
            genieacs_url: "http://192.168.30.40:7557/devices".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_page_limit() {
        let config = Config {
            genieacs_url: "http://acs:7557/devices".to_string(),
            page_limit: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_request_timeout() {
        // A zero timeout would make every page fetch expire immediately
        let config = Config {
            genieacs_url: "http://acs:7557/devices".to_string(),
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = Config {
            genieacs_url: "http://acs:7557/devices".to_string(),
            fetch_interval_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
