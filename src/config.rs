//! Application Configuration
//!
//! Values are baked in at build time from environment settings
//! (e.g. `GRAPHQL_ENDPOINT=https://api.example.com/graphql/ trunk build`).

use log::LevelFilter;

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:8000/graphql/";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TOAST_DURATION_MS: u32 = 4000;
const DEFAULT_LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub graphql_endpoint: String,
    pub api_base_url: String,
    pub toast_duration_ms: u32,
    pub log_level: LevelFilter,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            log_level: LevelFilter::Info,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Build from compile-time environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("GRAPHQL_ENDPOINT"),
            option_env!("API_BASE_URL"),
            option_env!("TOAST_DURATION_MS"),
            option_env!("LOG_LEVEL"),
            option_env!("LOG_CAPACITY"),
        )
    }

    fn from_values(
        endpoint: Option<&str>,
        api_base_url: Option<&str>,
        toast_duration_ms: Option<&str>,
        log_level: Option<&str>,
        log_capacity: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

        Self {
            graphql_endpoint: non_empty(endpoint).unwrap_or(defaults.graphql_endpoint),
            api_base_url: non_empty(api_base_url).unwrap_or(defaults.api_base_url),
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            log_capacity: log_capacity
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config.graphql_endpoint, "http://localhost:8000/graphql/");
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = AppConfig::from_values(
            Some("https://api.example.com/graphql/"),
            Some("  "),
            Some("abc"),
            Some("debug"),
            Some("50"),
        );
        assert_eq!(config.graphql_endpoint, "https://api.example.com/graphql/");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_capacity, 50);
    }
}
