use serde::Deserialize;
use std::env;
use umami_common::error::{UmamiError, UmamiResult};

/// Default search radius for nearby-venue lookups, in meters.
pub const DEFAULT_SEARCH_RADIUS_M: f64 = 1500.0;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the places proxy that fronts the third-party search API.
    pub places_base_url: String,
    /// Radius used for venue searches when the caller does not supply one.
    pub search_radius_m: f64,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads the vars.
    pub fn from_env() -> UmamiResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        Ok(Self {
            places_base_url: get_var_or("PLACES_BASE_URL", "http://localhost:8787"),
            search_radius_m: get_var_or("SEARCH_RADIUS_M", "1500")
                .parse()
                .map_err(|e| UmamiError::Config(format!("invalid SEARCH_RADIUS_M: {e}")))?,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_defaults_apply_without_env() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::remove_var("PLACES_BASE_URL");
        env::remove_var("SEARCH_RADIUS_M");
        env::remove_var("LOG_LEVEL");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.places_base_url, "http://localhost:8787");
        assert_eq!(cfg.search_radius_m, 1500.0);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn config_reads_overrides() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("PLACES_BASE_URL", "https://proxy.example.com");
        env::set_var("SEARCH_RADIUS_M", "800");

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.places_base_url, "https://proxy.example.com");
        assert_eq!(cfg.search_radius_m, 800.0);

        env::remove_var("PLACES_BASE_URL");
        env::remove_var("SEARCH_RADIUS_M");
    }

    #[test]
    fn config_rejects_malformed_radius() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("SEARCH_RADIUS_M", "not-a-number");
        let result = AppConfig::from_env();
        assert!(result.is_err());
        env::remove_var("SEARCH_RADIUS_M");
    }
}
