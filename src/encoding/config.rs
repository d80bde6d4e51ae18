use serde::{Deserialize, Serialize};

use crate::consts::{STATIC_RADIUS_SCALE, TIMELINE_RADIUS_SCALE};

/// Time zone used when rendering timestamps for people.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupTimeZone {
    /// Zone of the machine building the map
    #[default]
    Local,
    Utc,
    /// Minutes east of UTC
    FixedOffsetMinutes(i32),
}

/// Tunables for the encoding pipeline.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EncodingConfig {
    /// Marker radius per unit of magnitude on the static overlay
    #[serde(default = "default_static_radius_scale")]
    pub static_radius_scale: f64,

    /// Marker radius per unit of magnitude on the timeline
    #[serde(default = "default_timeline_radius_scale")]
    pub timeline_radius_scale: f64,

    #[serde(default)]
    pub popup_time_zone: PopupTimeZone,
}

fn default_static_radius_scale() -> f64 {
    STATIC_RADIUS_SCALE
}

fn default_timeline_radius_scale() -> f64 {
    TIMELINE_RADIUS_SCALE
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            static_radius_scale: default_static_radius_scale(),
            timeline_radius_scale: default_timeline_radius_scale(),
            popup_time_zone: PopupTimeZone::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scales() {
        let config = EncodingConfig::default();
        assert_eq!(config.static_radius_scale, 3.5);
        assert_eq!(config.timeline_radius_scale, 3.0);
        assert_eq!(config.popup_time_zone, PopupTimeZone::Local);
    }

    #[test]
    fn test_partial_toml() {
        let config: EncodingConfig = toml::from_str(
            r#"
            timeline_radius_scale = 4.0
            popup_time_zone = { fixed_offset_minutes = -480 }
            "#,
        )
        .unwrap();
        assert_eq!(config.static_radius_scale, 3.5);
        assert_eq!(config.timeline_radius_scale, 4.0);
        assert_eq!(
            config.popup_time_zone,
            PopupTimeZone::FixedOffsetMinutes(-480)
        );
    }
}
