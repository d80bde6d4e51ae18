use serde::{Deserialize, Serialize};

use crate::{
    consts::{DEFAULT_CENTER, DEFAULT_ZOOM},
    map::TileLayer,
};

/// Map view and tile provider settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MapConfig {
    /// `[lat, lon]` of the initial view
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Substituted for `{token}` in tile URL templates
    #[serde(default)]
    pub tile_token: Option<String>,

    /// Selectable base maps; the first one is shown initially
    #[serde(default = "default_base_layers")]
    pub base_layers: Vec<TileLayer>,
}

fn default_center() -> [f64; 2] {
    DEFAULT_CENTER
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

fn default_base_layers() -> Vec<TileLayer> {
    [
        ("Satellite", "satellite-v9"),
        ("Grayscale", "dark-v9"),
        ("Outdoors", "outdoors-v11"),
    ]
    .into_iter()
    .map(|(name, style)| TileLayer {
        name: name.to_string(),
        url_template: format!(
            "https://api.mapbox.com/styles/v1/mapbox/{style}/tiles/256/{{z}}/{{x}}/{{y}}?access_token={{token}}"
        ),
    })
    .collect()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            tile_token: None,
            base_layers: default_base_layers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_layers() {
        let config = MapConfig::default();
        let names: Vec<&str> = config.base_layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Satellite", "Grayscale", "Outdoors"]);
        assert!(config.base_layers[1]
            .url_template
            .ends_with("/mapbox/dark-v9/tiles/256/{z}/{x}/{y}?access_token={token}"));
    }

    #[test]
    fn test_custom_layers_from_toml() {
        let config: MapConfig = toml::from_str(
            r#"
            zoom = 4
            [[base_layers]]
            name = "OSM"
            url_template = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
            "#,
        )
        .unwrap();
        assert_eq!(config.zoom, 4);
        assert_eq!(config.center, DEFAULT_CENTER);
        assert_eq!(config.base_layers.len(), 1);
    }
}
