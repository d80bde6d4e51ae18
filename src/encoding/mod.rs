//! Data-to-visual encoding pipeline.
//!
//! Pure, synchronous functions from feed records to [`EncodedFeature`]s.
//! The only shared state is the immutable [`SEVERITY_BUCKETS`] table.

mod batch;
mod color;
mod config;
mod interval;
mod popup;
mod transform;

pub use batch::{transform_batch, BatchReport, FeatureSink};
pub use color::{bucket_for, classify, Color, SeverityBucket, SEVERITY_BUCKETS};
pub use config::{EncodingConfig, PopupTimeZone};
pub use interval::{derive_interval, TimeWindow};
pub use popup::{format_timestamp, popup_html};
pub use transform::{EncodedFeature, FeatureTransformer, MarkerStyle, Position, RenderMode};
