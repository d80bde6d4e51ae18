//! Timeline display window per event.

use serde::Serialize;

use crate::{consts::MS_PER_MAGNITUDE, Event};

/// Half-open `[start, end)` window in epoch milliseconds. `end >= start` always.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub fn duration_ms(&self) -> i64 {
        self.end - self.start
    }

    pub fn contains(&self, t_ms: i64) -> bool {
        self.start <= t_ms && t_ms < self.end
    }
}

/// Window starting at the event time and lasting 30 minutes per unit of magnitude.
///
/// Non-positive magnitudes give an empty window at the event time instead of
/// an `end` before `start`. Any positive magnitude lasts at least 1 ms.
pub fn derive_interval(event: &Event) -> TimeWindow {
    let start = event.timestamp_ms;
    let mut span = (event.magnitude * MS_PER_MAGNITUDE).round();
    if event.magnitude > 0.0 {
        span = span.max(1.0);
    }
    // `as` saturates for out-of-range floats and maps NaN to 0.
    let end = start.saturating_add(span as i64).max(start);
    TimeWindow { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(timestamp_ms: i64, magnitude: f64) -> Event {
        Event {
            place: String::new(),
            magnitude,
            timestamp_ms,
            longitude: 0.0,
            latitude: 0.0,
        }
    }

    #[test]
    fn test_magnitude_five_lasts_two_and_a_half_hours() {
        let w = derive_interval(&event(1_000_000, 5.0));
        assert_eq!(
            w,
            TimeWindow {
                start: 1_000_000,
                end: 1_000_000 + 9_000_000
            }
        );
        assert_eq!(w.duration_ms(), 9_000_000);
    }

    #[test]
    fn test_fractional_magnitude() {
        let w = derive_interval(&event(0, 3.2));
        assert_eq!(w.end, 5_760_000);
    }

    #[test]
    fn test_negative_magnitude_is_normalized() {
        let w = derive_interval(&event(50_000, -1.2));
        assert_eq!(w.start, 50_000);
        assert_eq!(w.end, 50_000);
        assert!(!w.contains(50_000));
    }

    #[test]
    fn test_zero_magnitude_is_empty() {
        let w = derive_interval(&event(7, 0.0));
        assert_eq!(w.duration_ms(), 0);
    }

    #[test]
    fn test_tiny_positive_magnitude_is_not_empty() {
        let w = derive_interval(&event(0, 1e-7));
        assert_eq!(w, TimeWindow { start: 0, end: 1 });
        assert!(w.contains(0));
    }

    #[test]
    fn test_end_never_before_start() {
        for i in -50..100 {
            let m = i as f64 * 0.13;
            let w = derive_interval(&event(1_700_000_000_000, m));
            assert!(w.end >= w.start, "magnitude {m}");
            if m > 0.0 {
                assert!(w.end > w.start, "magnitude {m}");
            }
        }
    }

    #[test]
    fn test_saturates_near_i64_max() {
        let w = derive_interval(&event(i64::MAX - 10, 9.0));
        assert_eq!(w.end, i64::MAX);
        let w = derive_interval(&event(0, f64::NAN));
        assert_eq!(w.end, 0);
    }

    #[test]
    fn test_half_open_contains() {
        let w = derive_interval(&event(1_000, 1.0));
        assert!(w.contains(1_000));
        assert!(w.contains(1_800_999));
        assert!(!w.contains(1_801_000));
        assert!(!w.contains(999));
    }
}
