use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::USGS_FEED_BASE_URL;

/// Which USGS summary window to fetch, or an arbitrary GeoJSON URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedUrl {
    PastHour,
    PastDay,
    #[default]
    PastWeek,
    PastMonth,
    Custom(String),
}

impl FeedUrl {
    pub fn get_url(&self) -> String {
        let window = match self {
            FeedUrl::PastHour => "all_hour",
            FeedUrl::PastDay => "all_day",
            FeedUrl::PastWeek => "all_week",
            FeedUrl::PastMonth => "all_month",
            FeedUrl::Custom(url) => return url.clone(),
        };
        format!("{USGS_FEED_BASE_URL}/{window}.geojson")
    }
}

impl FromStr for FeedUrl {
    type Err = String;

    /// Accepts `hour`, `day`, `week`, `month` or an `http(s)://` URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "hour" => Ok(FeedUrl::PastHour),
            "day" => Ok(FeedUrl::PastDay),
            "week" => Ok(FeedUrl::PastWeek),
            "month" => Ok(FeedUrl::PastMonth),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(FeedUrl::Custom(trimmed.to_string()))
            }
            other => Err(format!(
                "unknown feed '{other}', expected hour|day|week|month or a URL"
            )),
        }
    }
}

impl fmt::Display for FeedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_url())
    }
}
