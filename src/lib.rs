#![deny(unreachable_pub)]

// Core modules
mod consts;
mod errors;
mod helpers;
mod prelude;
mod req;

pub mod config;
pub mod types;

// Feature modules
pub mod encoding;
pub mod feed;
pub mod infra;
pub mod map;
pub mod pipeline;

// Re-exports
pub use config::{AppConfig, FeedConfig};
pub use consts::{
    MS_PER_MAGNITUDE, PLATE_BOUNDARIES_URL, STATIC_RADIUS_SCALE, TIMELINE_RADIUS_SCALE,
    USGS_FEED_BASE_URL,
};
pub use encoding::{classify, derive_interval, EncodedFeature, FeatureTransformer, TimeWindow};
pub use errors::{Error, MissingFieldError};
pub use feed::{FeedClient, FeedSource};
pub use helpers::FeedUrl;
pub use pipeline::{build_map, MapBuild};
pub use req::HttpClient;
pub use types::*;
