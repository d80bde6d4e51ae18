//! Popup text and human-readable timestamps.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

use crate::{encoding::PopupTimeZone, Event};

const DATE_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Calendar date-time for an epoch-millisecond timestamp, e.g.
/// `Thu Jan 01 1970 00:16:40 GMT+0000`.
pub fn format_timestamp(timestamp_ms: i64, zone: PopupTimeZone) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return "Invalid Date".to_string();
    };
    match zone {
        PopupTimeZone::Local => format_in(&utc, &Local),
        PopupTimeZone::Utc => format_in(&utc, &Utc),
        PopupTimeZone::FixedOffsetMinutes(minutes) => {
            match minutes.checked_mul(60).and_then(FixedOffset::east_opt) {
                Some(offset) => format_in(&utc, &offset),
                None => format_in(&utc, &Utc),
            }
        }
    }
}

fn format_in<Tz: TimeZone>(utc: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    utc.with_timezone(zone).format(DATE_TIME_FORMAT).to_string()
}

/// Place, magnitude and time lines separated by rules.
pub fn popup_html(event: &Event, zone: PopupTimeZone) -> String {
    format!(
        "<h5><strong>Place: </strong> {}</h5><hr>\
         <h5><strong>Magnitude: </strong> {}</h5><hr>\
         <h5><strong>Time: </strong> {}</h5>",
        escape_html(&event.place),
        event.magnitude,
        format_timestamp(event.timestamp_ms, zone),
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
