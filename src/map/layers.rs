//! Base tile layers and overlay layers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    consts::{FAULT_LINE_COLOR, FAULT_LINE_WEIGHT},
    encoding::{EncodedFeature, FeatureSink},
    BoundaryCollection,
};

const TOKEN_PLACEHOLDER: &str = "{token}";

/// A raster base map.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TileLayer {
    pub name: String,
    /// `{z}/{x}/{y}` template, may contain `{token}`
    pub url_template: String,
}

impl TileLayer {
    pub fn needs_token(&self) -> bool {
        self.url_template.contains(TOKEN_PLACEHOLDER)
    }

    /// Copy with `{token}` replaced. A missing token leaves an empty value.
    pub fn with_token(&self, token: Option<&str>) -> TileLayer {
        TileLayer {
            name: self.name.clone(),
            url_template: self
                .url_template
                .replace(TOKEN_PLACEHOLDER, token.unwrap_or_default()),
        }
    }
}

/// Stroke for polyline overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
}

impl LineStyle {
    pub fn fault_lines() -> Self {
        Self {
            color: FAULT_LINE_COLOR.to_string(),
            weight: FAULT_LINE_WEIGHT,
        }
    }
}

/// Static circle markers, one per encoded event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    features: Vec<EncodedFeature>,
}

impl MarkerLayer {
    pub fn features(&self) -> &[EncodedFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn to_geojson(&self) -> Value {
        feature_collection(&self.features)
    }
}

impl FeatureSink for MarkerLayer {
    fn accept(&mut self, feature: EncodedFeature) {
        self.features.push(feature);
    }
}

/// Plate boundaries drawn as lines.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultLineLayer {
    pub style: LineStyle,
    pub boundaries: BoundaryCollection,
}

impl FaultLineLayer {
    pub fn new(boundaries: BoundaryCollection) -> Self {
        Self {
            style: LineStyle::fault_lines(),
            boundaries,
        }
    }

    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .boundaries
            .features
            .iter()
            .map(|f| {
                json!({
                    "type": "Feature",
                    "properties": f.properties,
                    "geometry": f.geometry,
                })
            })
            .collect();
        json!({ "type": "FeatureCollection", "features": features })
    }
}

/// A toggleable layer drawn above the base map.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Earthquakes(MarkerLayer),
    FaultLines(FaultLineLayer),
}

impl Overlay {
    pub fn name(&self) -> &'static str {
        match self {
            Overlay::Earthquakes(_) => "Earthquakes",
            Overlay::FaultLines(_) => "Fault Lines",
        }
    }
}

pub(crate) fn feature_collection(features: &[EncodedFeature]) -> Value {
    let features: Vec<Value> = features.iter().map(EncodedFeature::to_geojson).collect();
    json!({ "type": "FeatureCollection", "features": features })
}
