//! USGS earthquake summary feed (GeoJSON) wire types.

use serde::{Deserialize, Serialize};

/// Top-level `FeatureCollection` returned by the summary feed.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct QuakeCollection {
    #[serde(default)]
    pub metadata: Option<FeedMetadata>,
    #[serde(default)]
    pub features: Vec<QuakeFeature>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FeedMetadata {
    /// Generation time in epoch milliseconds
    #[serde(default)]
    pub generated: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// One earthquake record.
///
/// Everything is optional on the wire; USGS does publish `mag: null` for some
/// events. Required fields are checked when converting into [`crate::Event`].
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct QuakeFeature {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: QuakeProperties,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct QuakeProperties {
    #[serde(default)]
    pub place: Option<String>,
    /// Magnitude
    #[serde(default)]
    pub mag: Option<f64>,
    /// Origin time in epoch milliseconds
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub updated: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tsunami: Option<u8>,
    #[serde(default)]
    pub sig: Option<i64>,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
}

/// GeoJSON point: `[longitude, latitude, depth_km]`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PointGeometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl PointGeometry {
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }

    pub fn depth_km(&self) -> Option<f64> {
        self.coordinates.get(2).copied()
    }
}
