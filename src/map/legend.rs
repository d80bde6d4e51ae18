use serde::Serialize;

use crate::encoding::{Color, SEVERITY_BUCKETS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: Color,
}

/// Magnitude color key, one entry per severity bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn from_buckets() -> Self {
        Self {
            position: "bottomright",
            entries: SEVERITY_BUCKETS
                .iter()
                .map(|b| LegendEntry {
                    label: b.label,
                    color: b.color,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::classify;

    #[test]
    fn test_legend_mirrors_buckets() {
        let legend = Legend::from_buckets();
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["0-1", "1-2", "2-3", "3-4", "4-5", "5+"]);
        assert_eq!(legend.entries[0].color, classify(0.5));
        assert_eq!(legend.entries[5].color, classify(7.0));
    }
}
