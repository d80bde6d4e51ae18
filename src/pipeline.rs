//! Fetch, encode and assemble the map.
//!
//! The event feed and the plate boundaries are fetched concurrently and are
//! only joined where the map controls are built. A failed fetch is treated as
//! an empty feed so the map still renders with whatever did arrive.

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    encoding::{transform_batch, BatchReport, EncodingConfig, FeatureTransformer},
    feed::FeedSource,
    map::{
        FaultLineLayer, LayerControl, Legend, MapConfig, MapContext, MapDocument, MarkerLayer,
        Overlay, TimelineControl, TimelineLayer,
    },
    BoundaryCollection, QuakeCollection,
};

/// Result of one map build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBuild {
    pub document: MapDocument,
    pub markers: BatchReport,
    pub timeline: BatchReport,
    pub events_fetched: bool,
    pub boundaries_fetched: bool,
}

/// Fetch both feeds concurrently, degrading each failure to an empty collection.
pub async fn fetch_feeds<S: FeedSource + ?Sized>(
    source: &S,
) -> (Option<QuakeCollection>, Option<BoundaryCollection>) {
    let (events, boundaries) = tokio::join!(source.fetch_events(), source.fetch_plate_boundaries());

    let events = events
        .inspect_err(|e| warn!(error = %e, "Earthquake feed unavailable, continuing without events"))
        .ok();
    let boundaries = boundaries
        .inspect_err(|e| {
            warn!(error = %e, "Plate boundaries unavailable, continuing without fault lines")
        })
        .ok();
    (events, boundaries)
}

/// Encode `events` and lay out the full map.
pub fn assemble_map(
    events: &QuakeCollection,
    boundaries: BoundaryCollection,
    encoding: &EncodingConfig,
    map: &MapConfig,
) -> (MapContext, BatchReport, BatchReport) {
    let mut markers = MarkerLayer::default();
    let marker_report = transform_batch(
        &FeatureTransformer::static_map(encoding),
        &events.features,
        &mut markers,
    );

    let mut timeline = TimelineLayer::default();
    let timeline_report = transform_batch(
        &FeatureTransformer::timeline(encoding),
        &events.features,
        &mut timeline,
    );

    let mut ctx = MapContext::new(map);
    ctx.add_overlay(Overlay::Earthquakes(markers), false)
        .add_overlay(Overlay::FaultLines(FaultLineLayer::new(boundaries)), true)
        .add_layer_control(LayerControl { collapsed: false })
        .add_legend(Legend::from_buckets())
        .add_timeline(TimelineControl::new(&timeline, encoding.popup_time_zone));

    (ctx, marker_report, timeline_report)
}

pub async fn build_map<S: FeedSource + ?Sized>(
    source: &S,
    encoding: &EncodingConfig,
    map: &MapConfig,
) -> MapBuild {
    let (events, boundaries) = fetch_feeds(source).await;
    let events_fetched = events.is_some();
    let boundaries_fetched = boundaries.is_some();

    let (ctx, markers, timeline) = assemble_map(
        &events.unwrap_or_default(),
        boundaries.unwrap_or_default(),
        encoding,
        map,
    );

    info!(
        markers = markers.encoded,
        skipped = markers.skipped_total(),
        timeline = timeline.encoded,
        events_fetched,
        boundaries_fetched,
        "Map assembled"
    );

    MapBuild {
        document: ctx.to_document(),
        markers,
        timeline,
        events_fetched,
        boundaries_fetched,
    }
}
