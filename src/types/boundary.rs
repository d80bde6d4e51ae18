//! Tectonic plate boundary (PB2002) wire types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Boundary features are passed through to the renderer untouched, so the
/// geometry stays an opaque JSON value.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct BoundaryCollection {
    #[serde(default)]
    pub features: Vec<BoundaryFeature>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct BoundaryFeature {
    #[serde(default)]
    pub properties: Value,
    pub geometry: Value,
}

impl BoundaryCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boundaries() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"LAYER": "plate boundary", "Name": "AF-AN", "Source": "Mueller et al. [1987]", "PlateA": "AF", "PlateB": "AN", "Type": ""},
                "geometry": {"type": "LineString", "coordinates": [[-0.4379, -54.8518], [-0.0381, -54.6772]]}
            }]
        }"#;
        let collection: BoundaryCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.features[0].properties["Name"], "AF-AN");
        assert_eq!(collection.features[0].geometry["type"], "LineString");
    }
}
