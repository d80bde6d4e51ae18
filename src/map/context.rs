//! Explicit map context and its serialized document.
//!
//! Components that add layers or controls receive a `&mut MapContext` instead
//! of reaching for a shared global map instance.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::{
    consts::MAX_BOUNDS,
    map::{Legend, MapConfig, Overlay, TileLayer, TimelineControl},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub max_bounds: [[f64; 2]; 2],
}

/// Base-map radio buttons plus overlay checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapContext {
    view: MapView,
    base_layers: Vec<TileLayer>,
    overlays: Vec<Overlay>,
    default_layers: Vec<String>,
    legend: Option<Legend>,
    layer_control: Option<LayerControl>,
    timeline: Option<TimelineControl>,
}

impl MapContext {
    /// Empty map with the configured view and base layers, tokens resolved.
    pub fn new(config: &MapConfig) -> Self {
        let token = config.tile_token.as_deref().filter(|t| !t.is_empty());
        if token.is_none() && config.base_layers.iter().any(TileLayer::needs_token) {
            warn!("No tile token configured; tile layers that need one will not load");
        }
        let base_layers: Vec<TileLayer> = config
            .base_layers
            .iter()
            .map(|layer| layer.with_token(token))
            .collect();
        let default_layers = base_layers.first().map(|l| l.name.clone()).into_iter().collect();

        Self {
            view: MapView {
                center: config.center,
                zoom: config.zoom,
                max_bounds: MAX_BOUNDS,
            },
            base_layers,
            overlays: Vec::new(),
            default_layers,
            legend: None,
            layer_control: None,
            timeline: None,
        }
    }

    /// Add an overlay; `visible` makes it part of the initially shown layers.
    pub fn add_overlay(&mut self, overlay: Overlay, visible: bool) -> &mut Self {
        if visible {
            self.default_layers.push(overlay.name().to_string());
        }
        self.overlays.push(overlay);
        self
    }

    pub fn add_legend(&mut self, legend: Legend) -> &mut Self {
        self.legend = Some(legend);
        self
    }

    pub fn add_layer_control(&mut self, control: LayerControl) -> &mut Self {
        self.layer_control = Some(control);
        self
    }

    pub fn add_timeline(&mut self, timeline: TimelineControl) -> &mut Self {
        self.timeline = Some(timeline);
        self
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn default_layers(&self) -> &[String] {
        &self.default_layers
    }

    pub fn to_document(&self) -> MapDocument {
        MapDocument {
            view: self.view.clone(),
            base_layers: self.base_layers.clone(),
            overlays: self
                .overlays
                .iter()
                .map(|overlay| match overlay {
                    Overlay::Earthquakes(layer) => OverlayDocument {
                        name: overlay.name(),
                        style: None,
                        data: layer.to_geojson(),
                    },
                    Overlay::FaultLines(layer) => OverlayDocument {
                        name: overlay.name(),
                        style: serde_json::to_value(&layer.style).ok(),
                        data: layer.to_geojson(),
                    },
                })
                .collect(),
            default_layers: self.default_layers.clone(),
            legend: self.legend.clone(),
            layer_control: self.layer_control,
            timeline: self.timeline.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayDocument {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
    pub data: Value,
}

/// Renderer-agnostic description of the whole map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument {
    pub view: MapView,
    pub base_layers: Vec<TileLayer>,
    pub overlays: Vec<OverlayDocument>,
    pub default_layers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_control: Option<LayerControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineControl>,
}
