//! Validated earthquake event.

use serde::Serialize;

use crate::{MissingFieldError, QuakeFeature};

/// An earthquake with every field the encoder needs.
///
/// Geometry is flattened into `longitude`/`latitude`. Magnitude may be zero or
/// negative; range is not checked.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub place: String,
    pub magnitude: f64,
    pub timestamp_ms: i64,
    pub longitude: f64,
    pub latitude: f64,
}

impl TryFrom<&QuakeFeature> for Event {
    type Error = MissingFieldError;

    fn try_from(feature: &QuakeFeature) -> std::result::Result<Self, MissingFieldError> {
        let props = &feature.properties;
        let magnitude = props.mag.ok_or(MissingFieldError::MAGNITUDE)?;
        let timestamp_ms = props.time.ok_or(MissingFieldError::TIMESTAMP)?;
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or(MissingFieldError::GEOMETRY)?;
        let (longitude, latitude) = geometry
            .longitude()
            .zip(geometry.latitude())
            .ok_or(MissingFieldError::GEOMETRY)?;

        Ok(Event {
            place: props.place.clone().unwrap_or_default(),
            magnitude,
            timestamp_ms,
            longitude,
            latitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointGeometry, QuakeProperties};

    fn feature(mag: Option<f64>, time: Option<i64>, coords: Option<Vec<f64>>) -> QuakeFeature {
        QuakeFeature {
            id: Some("t1".into()),
            properties: QuakeProperties {
                place: Some("Ridgecrest, CA".into()),
                mag,
                time,
                ..Default::default()
            },
            geometry: coords.map(|coordinates| PointGeometry { coordinates }),
        }
    }

    #[test]
    fn test_flattens_geometry() {
        let event = Event::try_from(&feature(
            Some(4.1),
            Some(1_000),
            Some(vec![-117.6, 35.7, 8.0]),
        ))
        .unwrap();
        assert_eq!(event.longitude, -117.6);
        assert_eq!(event.latitude, 35.7);
        assert_eq!(event.place, "Ridgecrest, CA");
    }

    #[test]
    fn test_missing_magnitude() {
        let err = Event::try_from(&feature(None, Some(1_000), Some(vec![0.0, 0.0]))).unwrap_err();
        assert_eq!(err.field, "magnitude");
    }

    #[test]
    fn test_missing_time() {
        let err = Event::try_from(&feature(Some(2.0), None, Some(vec![0.0, 0.0]))).unwrap_err();
        assert_eq!(err.field, "timestampMs");
    }

    #[test]
    fn test_missing_or_short_geometry() {
        let err = Event::try_from(&feature(Some(2.0), Some(1), None)).unwrap_err();
        assert_eq!(err.field, "geometry");
        let err = Event::try_from(&feature(Some(2.0), Some(1), Some(vec![12.0]))).unwrap_err();
        assert_eq!(err.field, "geometry");
    }

    #[test]
    fn test_missing_place_is_empty() {
        let mut f = feature(Some(2.0), Some(1), Some(vec![1.0, 2.0]));
        f.properties.place = None;
        assert_eq!(Event::try_from(&f).unwrap().place, "");
    }
}
