//! Application configuration loaded from TOML.
//!
//! Every field has a default, so an absent or partial file is fine.
//!
//! ```toml
//! [feeds]
//! events = "past_day"
//! timeout_secs = 10
//!
//! [encoding]
//! static_radius_scale = 3.5
//! popup_time_zone = "utc"
//!
//! [map]
//! zoom = 3
//!
//! [logging]
//! stdout_format = "json"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    consts::{DEFAULT_REQUEST_TIMEOUT_SECS, PLATE_BOUNDARIES_URL},
    encoding::EncodingConfig,
    infra::LogConfig,
    map::MapConfig,
    prelude::*,
    FeedUrl,
};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FeedConfig {
    #[serde(default)]
    pub events: FeedUrl,

    #[serde(default = "default_boundaries_url")]
    pub boundaries_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_boundaries_url() -> String {
    PLATE_BOUNDARIES_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            events: FeedUrl::default(),
            boundaries_url: default_boundaries_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub feeds: FeedConfig,
    #[serde(default)]
    pub encoding: EncodingConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub logging: LogConfig,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::PopupTimeZone;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.feeds, FeedConfig::default());
        assert_eq!(config.encoding, EncodingConfig::default());
        assert_eq!(config.map, MapConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [feeds]
            events = "past_day"
            timeout_secs = 5

            [encoding]
            popup_time_zone = "utc"

            [map]
            tile_token = "pk.xyz"
            "#,
        )
        .unwrap();
        assert_eq!(config.feeds.events, FeedUrl::PastDay);
        assert_eq!(config.feeds.timeout_secs, 5);
        assert_eq!(config.feeds.boundaries_url, PLATE_BOUNDARIES_URL);
        assert_eq!(config.encoding.popup_time_zone, PopupTimeZone::Utc);
        assert_eq!(config.encoding.static_radius_scale, 3.5);
        assert_eq!(config.map.tile_token.as_deref(), Some("pk.xyz"));
    }

    #[test]
    fn test_custom_feed_url() {
        let config = AppConfig::from_toml_str(
            r#"
            [feeds]
            events = { custom = "https://example.org/feed.geojson" }
            "#,
        )
        .unwrap();
        assert_eq!(config.feeds.events.get_url(), "https://example.org/feed.geojson");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[feeds\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = AppConfig::load(Path::new("/nonexistent/quake_map.toml")).unwrap();
        assert_eq!(config.feeds.events, FeedUrl::PastWeek);
    }
}
