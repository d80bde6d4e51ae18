//! Event to visual feature encoding.

use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    encoding::{
        classify, derive_interval, popup_html, Color, EncodingConfig, PopupTimeZone, TimeWindow,
    },
    prelude::*,
    Event, QuakeFeature,
};

/// Which rendering an encoded feature is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Always-visible marker overlay
    Static,
    /// Markers shown only inside their time window on the slider
    Timeline,
}

/// Circle marker stroke and fill settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn for_mode(mode: RenderMode) -> Self {
        let fill_opacity = match mode {
            RenderMode::Static => 0.8,
            RenderMode::Timeline => 1.0,
        };
        Self {
            weight: 1.0,
            opacity: 1.0,
            fill_opacity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

/// Fully derived visual representation of one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: Position,
    pub radius: f64,
    pub color: Color,
    pub style: MarkerStyle,
    pub popup_html: String,
    /// Only set in [`RenderMode::Timeline`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
}

impl EncodedFeature {
    /// GeoJSON `Point` feature carrying the marker style as properties.
    pub fn to_geojson(&self) -> Value {
        let mut properties = json!({
            "radius": self.radius,
            "color": self.color,
            "weight": self.style.weight,
            "opacity": self.style.opacity,
            "fillOpacity": self.style.fill_opacity,
            "popup": self.popup_html,
        });
        if let Some(window) = self.time_window {
            properties["start"] = json!(window.start);
            properties["end"] = json!(window.end);
        }
        let mut feature = json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [self.position.longitude, self.position.latitude],
            },
            "properties": properties,
        });
        if let Some(id) = &self.id {
            feature["id"] = json!(id);
        }
        feature
    }
}

/// Encodes feed records for one render mode.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTransformer {
    mode: RenderMode,
    radius_scale: f64,
    style: MarkerStyle,
    time_zone: PopupTimeZone,
}

impl FeatureTransformer {
    pub fn new(mode: RenderMode, config: &EncodingConfig) -> Self {
        let radius_scale = match mode {
            RenderMode::Static => config.static_radius_scale,
            RenderMode::Timeline => config.timeline_radius_scale,
        };
        Self {
            mode,
            radius_scale,
            style: MarkerStyle::for_mode(mode),
            time_zone: config.popup_time_zone,
        }
    }

    pub fn static_map(config: &EncodingConfig) -> Self {
        Self::new(RenderMode::Static, config)
    }

    pub fn timeline(config: &EncodingConfig) -> Self {
        Self::new(RenderMode::Timeline, config)
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn radius_scale(&self) -> f64 {
        self.radius_scale
    }

    /// Encode a raw feed record.
    ///
    /// Fails with [`crate::MissingFieldError`] when magnitude, time or geometry is absent.
    pub fn transform(&self, feature: &QuakeFeature) -> Result<EncodedFeature> {
        let event = Event::try_from(feature)?;
        let mut encoded = self.transform_event(&event);
        encoded.id = feature.id.clone();
        Ok(encoded)
    }

    /// Encode an already validated event.
    pub fn transform_event(&self, event: &Event) -> EncodedFeature {
        EncodedFeature {
            id: None,
            position: Position {
                longitude: event.longitude,
                latitude: event.latitude,
            },
            radius: (event.magnitude * self.radius_scale).max(0.0),
            color: classify(event.magnitude),
            style: self.style,
            popup_html: popup_html(event, self.time_zone),
            time_window: match self.mode {
                RenderMode::Static => None,
                RenderMode::Timeline => Some(derive_interval(event)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointGeometry, QuakeProperties};

    fn utc_config() -> EncodingConfig {
        EncodingConfig {
            popup_time_zone: PopupTimeZone::Utc,
            ..Default::default()
        }
    }

    fn quake(id: &str, mag: Option<f64>, time: Option<i64>) -> QuakeFeature {
        QuakeFeature {
            id: Some(id.to_string()),
            properties: QuakeProperties {
                place: Some(format!("near {id}")),
                mag,
                time,
                ..Default::default()
            },
            geometry: Some(PointGeometry {
                coordinates: vec![-122.4, 37.8, 10.0],
            }),
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_three_event_scenario() {
        let transformer = FeatureTransformer::static_map(&utc_config());
        let expected = [
            (0.5, "#86FF33", 1.75),
            (3.2, "#FFBB33", 11.2),
            (6.0, "#DE291D", 21.0),
        ];
        for (i, (mag, color, radius)) in expected.into_iter().enumerate() {
            let encoded = transformer
                .transform(&quake(&format!("e{i}"), Some(mag), Some(1_000)))
                .unwrap();
            assert_eq!(encoded.color.as_hex(), color);
            assert!(approx_eq(encoded.radius, radius), "radius {}", encoded.radius);
            assert!(encoded.time_window.is_none());
        }
    }

    #[test]
    fn test_timeline_mode_scale_and_window() {
        let transformer = FeatureTransformer::timeline(&utc_config());
        let encoded = transformer
            .transform(&quake("t", Some(5.0), Some(1_000_000)))
            .unwrap();
        assert!(approx_eq(encoded.radius, 15.0));
        assert_eq!(
            encoded.time_window,
            Some(TimeWindow {
                start: 1_000_000,
                end: 10_000_000
            })
        );
        assert_eq!(encoded.style.fill_opacity, 1.0);
    }

    #[test]
    fn test_scale_factors_are_configurable() {
        let config = EncodingConfig {
            static_radius_scale: 10.0,
            timeline_radius_scale: 1.0,
            ..utc_config()
        };
        let event = quake("s", Some(2.0), Some(0));
        let s = FeatureTransformer::static_map(&config).transform(&event).unwrap();
        let t = FeatureTransformer::timeline(&config).transform(&event).unwrap();
        assert!(approx_eq(s.radius, 20.0));
        assert!(approx_eq(t.radius, 2.0));
    }

    #[test]
    fn test_position_passes_through() {
        let encoded = FeatureTransformer::static_map(&utc_config())
            .transform(&quake("p", Some(1.0), Some(0)))
            .unwrap();
        assert_eq!(
            encoded.position,
            Position {
                longitude: -122.4,
                latitude: 37.8
            }
        );
        assert_eq!(encoded.id.as_deref(), Some("p"));
    }

    #[test]
    fn test_transform_is_deterministic() {
        let transformer = FeatureTransformer::timeline(&utc_config());
        let event = quake("d", Some(4.4), Some(1_700_000_000_000));
        assert_eq!(
            transformer.transform(&event).unwrap(),
            transformer.transform(&event).unwrap()
        );
    }

    #[test]
    fn test_missing_magnitude_is_an_error() {
        let err = FeatureTransformer::static_map(&utc_config())
            .transform(&quake("m", None, Some(0)))
            .unwrap_err();
        assert_eq!(err.missing_field(), Some("magnitude"));
    }

    #[test]
    fn test_missing_time_is_an_error() {
        let err = FeatureTransformer::timeline(&utc_config())
            .transform(&quake("m", Some(2.0), None))
            .unwrap_err();
        assert_eq!(err.missing_field(), Some("timestampMs"));
    }

    #[test]
    fn test_negative_magnitude_radius_clamps() {
        let encoded = FeatureTransformer::static_map(&utc_config())
            .transform(&quake("n", Some(-0.4), Some(0)))
            .unwrap();
        assert_eq!(encoded.radius, 0.0);
        assert_eq!(encoded.color.as_hex(), "#86FF33");
    }

    #[test]
    fn test_popup_renders_calendar_time() {
        let encoded = FeatureTransformer::static_map(&utc_config())
            .transform(&quake("x", Some(2.5), Some(1_000_000)))
            .unwrap();
        assert!(encoded.popup_html.contains("near x"));
        assert!(encoded.popup_html.contains("2.5"));
        assert!(encoded.popup_html.contains("Thu Jan 01 1970 00:16:40"));
        assert!(!encoded.popup_html.contains("1000000"));
    }

    #[test]
    fn test_geojson_shape() {
        let encoded = FeatureTransformer::timeline(&utc_config())
            .transform(&quake("g", Some(1.0), Some(0)))
            .unwrap();
        let geojson = encoded.to_geojson();
        assert_eq!(geojson["id"], "g");
        assert_eq!(geojson["geometry"]["coordinates"][0], -122.4);
        assert_eq!(geojson["properties"]["color"], "#86FF33");
        assert_eq!(geojson["properties"]["end"], 1_800_000);
    }
}
