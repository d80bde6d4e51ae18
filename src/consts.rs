/// USGS summary feed base; window files are appended to this.
pub const USGS_FEED_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// PB2002 plate boundaries as GeoJSON.
pub const PLATE_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Display duration on the timeline per unit of magnitude (30 minutes).
pub const MS_PER_MAGNITUDE: f64 = 1_800_000.0;

/// Marker radius per unit of magnitude on the static overlay.
pub const STATIC_RADIUS_SCALE: f64 = 3.5;

/// Marker radius per unit of magnitude on the timeline.
pub const TIMELINE_RADIUS_SCALE: f64 = 3.0;

pub(crate) const FAULT_LINE_COLOR: &str = "#FFC300";
pub(crate) const FAULT_LINE_WEIGHT: f64 = 2.0;

pub(crate) const DEFAULT_CENTER: [f64; 2] = [0.0, -3.9962];
pub(crate) const DEFAULT_ZOOM: u8 = 2;
pub(crate) const MAX_BOUNDS: [[f64; 2]; 2] = [[90.0, -180.0], [-90.0, 180.0]];

pub(crate) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
