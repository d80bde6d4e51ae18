use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    encoding::{EncodedFeature, FeatureTransformer},
    QuakeFeature,
};

/// Receives encoded features. Implemented by map layers.
pub trait FeatureSink {
    fn accept(&mut self, feature: EncodedFeature);
}

impl FeatureSink for Vec<EncodedFeature> {
    fn accept(&mut self, feature: EncodedFeature) {
        self.push(feature);
    }
}

/// Outcome of encoding one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub encoded: usize,
    /// Skipped records keyed by the missing field name
    pub skipped: BTreeMap<&'static str, usize>,
}

impl BatchReport {
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// Encode every record independently, handing successes to `sink`.
///
/// A record that fails is logged and counted, and the rest of the batch
/// carries on.
pub fn transform_batch<'a, I, S>(
    transformer: &FeatureTransformer,
    features: I,
    sink: &mut S,
) -> BatchReport
where
    I: IntoIterator<Item = &'a QuakeFeature>,
    S: FeatureSink + ?Sized,
{
    let mut report = BatchReport::default();
    for feature in features {
        match transformer.transform(feature) {
            Ok(encoded) => {
                sink.accept(encoded);
                report.encoded += 1;
            }
            Err(e) => {
                let field = e.missing_field().unwrap_or("unknown");
                warn!(
                    id = feature.id.as_deref().unwrap_or("-"),
                    field = field,
                    mode = ?transformer.mode(),
                    "Skipping event: {e}"
                );
                *report.skipped.entry(field).or_insert(0) += 1;
            }
        }
    }
    debug!(
        mode = ?transformer.mode(),
        encoded = report.encoded,
        skipped = report.skipped_total(),
        "Batch encoded"
    );
    report
}
