//! Temporal slider over timeline-mode features.

use serde::Serialize;
use serde_json::Value;

use crate::{
    encoding::{format_timestamp, EncodedFeature, FeatureSink, PopupTimeZone, TimeWindow},
    map::layers::feature_collection,
};

/// Markers that are only shown inside their [`TimeWindow`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineLayer {
    features: Vec<EncodedFeature>,
}

impl TimelineLayer {
    pub fn features(&self) -> &[EncodedFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Earliest start to latest end over all windows.
    pub fn extent(&self) -> Option<TimeWindow> {
        let mut windows = self.features.iter().filter_map(|f| f.time_window);
        let first = windows.next()?;
        Some(windows.fold(first, |acc, w| TimeWindow {
            start: acc.start.min(w.start),
            end: acc.end.max(w.end),
        }))
    }

    /// Features visible at `t_ms`.
    pub fn visible_at(&self, t_ms: i64) -> impl Iterator<Item = &EncodedFeature> {
        self.features
            .iter()
            .filter(move |f| f.time_window.is_some_and(|w| w.contains(t_ms)))
    }
}

impl FeatureSink for TimelineLayer {
    /// Features without a time window are never visible on a timeline, so they
    /// are dropped.
    fn accept(&mut self, feature: EncodedFeature) {
        if feature.time_window.is_some() {
            self.features.push(feature);
        }
    }
}

/// Serializable slider state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineControl {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub start_label: Option<String>,
    pub end_label: Option<String>,
    pub data: Value,
}

impl TimelineControl {
    pub fn new(layer: &TimelineLayer, zone: PopupTimeZone) -> Self {
        let extent = layer.extent();
        Self {
            start: extent.map(|w| w.start),
            end: extent.map(|w| w.end),
            start_label: extent.map(|w| format_timestamp(w.start, zone)),
            end_label: extent.map(|w| format_timestamp(w.end, zone)),
            data: feature_collection(layer.features()),
        }
    }
}
