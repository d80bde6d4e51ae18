//! Map description handed to a rendering collaborator.

mod config;
mod context;
mod layers;
mod legend;
mod timeline;

pub use config::MapConfig;
pub use context::{LayerControl, MapContext, MapDocument, MapView, OverlayDocument};
pub use layers::{FaultLineLayer, LineStyle, MarkerLayer, Overlay, TileLayer};
pub use legend::{Legend, LegendEntry};
pub use timeline::{TimelineControl, TimelineLayer};
