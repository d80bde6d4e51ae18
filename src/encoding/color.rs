//! Magnitude to severity color classification.
//!
//! Buckets are an ordered table of upper bounds. A magnitude lands in the first
//! bucket whose upper bound is >= the magnitude, which makes every range closed
//! on the high end and open on the low end, except the first (`[0, 1]`) and the
//! last (`(5, inf)`).
//!
//! Anything below zero, and `NaN`, falls into the lowest bucket.

use std::fmt;

use serde::{Serialize, Serializer};

/// A display color as a `#RRGGBB` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub const fn from_hex(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn as_hex(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeverityBucket {
    /// Inclusive upper bound of the magnitude range.
    pub upper_bound: f64,
    pub color: Color,
    /// Legend label, e.g. `"2-3"`.
    pub label: &'static str,
}

pub const SEVERITY_BUCKETS: [SeverityBucket; 6] = [
    SeverityBucket {
        upper_bound: 1.0,
        color: Color::from_hex("#86FF33"),
        label: "0-1",
    },
    SeverityBucket {
        upper_bound: 2.0,
        color: Color::from_hex("#F0FF33"),
        label: "1-2",
    },
    SeverityBucket {
        upper_bound: 3.0,
        color: Color::from_hex("#FFDA33"),
        label: "2-3",
    },
    SeverityBucket {
        upper_bound: 4.0,
        color: Color::from_hex("#FFBB33"),
        label: "3-4",
    },
    SeverityBucket {
        upper_bound: 5.0,
        color: Color::from_hex("#F48325"),
        label: "4-5",
    },
    SeverityBucket {
        upper_bound: f64::INFINITY,
        color: Color::from_hex("#DE291D"),
        label: "5+",
    },
];

/// Bucket for `magnitude`. Negative and `NaN` clamp to the lowest bucket.
pub fn bucket_for(magnitude: f64) -> &'static SeverityBucket {
    SEVERITY_BUCKETS
        .iter()
        .find(|bucket| magnitude <= bucket.upper_bound)
        .unwrap_or(&SEVERITY_BUCKETS[0])
}

/// Display color for `magnitude`.
pub fn classify(magnitude: f64) -> Color {
    bucket_for(magnitude).color
}
