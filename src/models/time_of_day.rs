use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Wall-clock time inside a single day, `00:00:00..=24:00:00`.
///
/// Kept as seconds since midnight so the closing day boundary (`24:00:00`)
/// is representable, which `chrono::NaiveTime` cannot do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(SECONDS_PER_DAY);

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if hours > 24 || minutes >= 60 || seconds >= 60 {
            return None;
        }
        let total = hours * 3600 + minutes * 60 + seconds;
        (total <= SECONDS_PER_DAY).then_some(TimeOfDay(total))
    }

    pub fn hours(&self) -> u32 {
        self.0 / 3600
    }

    pub fn minutes(&self) -> u32 {
        (self.0 % 3600) / 60
    }

    pub fn seconds(&self) -> u32 {
        self.0 % 60
    }

    pub fn total_seconds(&self) -> u32 {
        self.0
    }

    pub fn total_minutes(&self) -> u32 {
        self.0 / 60
    }

    /// "HH:MM", used by list views.
    pub fn short(&self) -> String {
        format!("{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    /// Accepts `HH:MM:SS` and `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidTime(s.to_string());

        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(invalid());
        }

        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            if part.is_empty() || part.len() > 2 {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }

        TimeOfDay::from_hms(fields[0], fields[1], fields[2]).ok_or_else(invalid)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Lenient field deserializer: missing, `null` or malformed times become `None`.
/// Such entries stay in the listing but never reach the grid.
pub fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<TimeOfDay>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
