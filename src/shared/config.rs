//! Application configuration. Data source, booking target, reply pacing.

use crate::domain::DomainError;
use serde::Deserialize;
use std::time::Duration;

/// Default location of the bundled reference data.
pub const DEFAULT_DATA_FILE: &str = "./data/shop.json";

/// Default booking destination handed to the navigator.
pub const DEFAULT_BOOKING_URL: &str = "/booking";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// JSON file with the six reference collections. Read from BARBERBOT_DATA_FILE.
    #[serde(default)]
    pub data_file: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Remote data source (PostgREST-style)
    // ─────────────────────────────────────────────────────────────────────────
    /// Base URL of the REST API (e.g. https://xyz.supabase.co/rest/v1). Read from BARBERBOT_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// API key sent as `apikey` and bearer token. Read from BARBERBOT_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Where "take me to booking" points. Read from BARBERBOT_BOOKING_URL.
    #[serde(default)]
    pub booking_url: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Reply pacing
    // ─────────────────────────────────────────────────────────────────────────
    /// Simulated typing time before a reply appears (default 1000). Read from BARBERBOT_TYPING_DELAY_MS.
    #[serde(default)]
    pub typing_delay_ms: Option<u64>,

    /// Gap before a staged second message (default 1500). Read from BARBERBOT_FOLLOW_UP_DELAY_MS.
    #[serde(default)]
    pub follow_up_delay_ms: Option<u64>,

    /// Wait between a booking confirmation and navigation (default 1000). Read from BARBERBOT_NAVIGATE_DELAY_MS.
    #[serde(default)]
    pub navigate_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        Self::load_from(std::env::var("BARBERBOT_CONFIG").ok().as_deref())
    }

    /// Environment plus an optional config file. A named file must exist.
    pub fn load_from(file: Option<&str>) -> Result<Self, DomainError> {
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("BARBERBOT"));
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c.build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    pub fn data_file_or_default(&self) -> String {
        self.data_file
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
    }

    pub fn booking_url_or_default(&self) -> String {
        self.booking_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BOOKING_URL.to_string())
    }

    /// Returns true if both the REST base URL and key are set.
    pub fn is_api_configured(&self) -> bool {
        self.api_url.as_deref().is_some_and(|s| !s.is_empty())
            && self.api_key.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms.unwrap_or(1000))
    }

    pub fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(self.follow_up_delay_ms.unwrap_or(1500))
    }

    pub fn navigate_delay(&self) -> Duration {
        Duration::from_millis(self.navigate_delay_ms.unwrap_or(1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data_file_or_default(), DEFAULT_DATA_FILE);
        assert_eq!(cfg.booking_url_or_default(), DEFAULT_BOOKING_URL);
        assert_eq!(cfg.typing_delay(), Duration::from_millis(1000));
        assert_eq!(cfg.follow_up_delay(), Duration::from_millis(1500));
        assert_eq!(cfg.navigate_delay(), Duration::from_millis(1000));
        assert!(!cfg.is_api_configured());
    }

    #[test]
    fn test_api_needs_url_and_key() {
        let mut cfg = AppConfig {
            api_url: Some("https://example.test/rest/v1".into()),
            ..Default::default()
        };
        assert!(!cfg.is_api_configured());
        cfg.api_key = Some(String::new());
        assert!(!cfg.is_api_configured());
        cfg.api_key = Some("anon".into());
        assert!(cfg.is_api_configured());
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let result = AppConfig::load_from(Some("/nonexistent/barberbot-settings"));
        assert!(matches!(result, Err(DomainError::Config(_))));
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("barberbot.toml");
        std::fs::write(&path, "booking_url = \"https://shop.test/book\"\ntyping_delay_ms = 250\n")
            .unwrap();

        let cfg = AppConfig::load_from(path.to_str()).unwrap();
        assert_eq!(cfg.booking_url_or_default(), "https://shop.test/book");
        assert_eq!(cfg.typing_delay(), Duration::from_millis(250));
    }
}
