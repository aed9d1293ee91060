use super::{duty_status::DutyStatus, time_of_day::TimeOfDay};
use crate::models::time_of_day::deserialize_optional_time;
use serde::{Deserialize, Deserializer, Serialize};

/// One duty-status record as produced by the trip planner.
///
/// `date` is kept as the raw upstream text; it is parsed (and rejected if
/// malformed) when the stream is grouped by day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub date: String, // "YYYY-MM-DD"
    pub status: DutyStatus,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub start_time: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    pub end_time: Option<TimeOfDay>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub remarks: String,
    #[serde(default)]
    pub miles: f64,
}

/// Any JSON scalar as text: `null` becomes "", numbers and booleans keep
/// their literal form. A bad `date` is then rejected by grouping, with the
/// entry's index.
fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

impl LogEntry {
    pub fn new(
        date: &str,
        status: DutyStatus,
        start_time: Option<TimeOfDay>,
        end_time: Option<TimeOfDay>,
        remarks: &str,
    ) -> Self {
        Self {
            date: date.to_string(),
            status,
            start_time,
            end_time,
            remarks: remarks.to_string(),
            miles: 0.0,
        }
    }

    /// Both ends of the interval, if present.
    pub fn interval(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match (self.start_time, self.end_time) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }

    /// Interval length in minutes; 0 for missing or reversed intervals.
    pub fn duration_minutes(&self) -> u32 {
        match self.interval() {
            Some((s, e)) if e > s => (e.total_seconds() - s.total_seconds()) / 60,
            _ => 0,
        }
    }

    /// "HH:MM - HH:MM", with `--:--` for a missing end.
    pub fn time_range(&self) -> String {
        let fmt = |t: Option<TimeOfDay>| t.map(|t| t.short()).unwrap_or_else(|| "--:--".into());
        format!("{} - {}", fmt(self.start_time), fmt(self.end_time))
    }
}
