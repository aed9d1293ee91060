use super::{HOURS_PER_DAY, LANE_COUNT, SLOTS_PER_DAY, SLOTS_PER_HOUR};
use crate::models::duty_status::DutyStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourLine {
    pub hour: u32,
    pub slot: u32,
    pub label: String,
}

/// Label of an hour boundary on a 12-hour clock. Hour 24 wraps to "Mid".
pub fn hour_label(hour: u32) -> String {
    match hour % HOURS_PER_DAY {
        0 => "Mid".to_string(),
        12 => "Noon".to_string(),
        h if h > 12 => (h - 12).to_string(),
        h => h.to_string(),
    }
}

/// The 25 hour gridlines, midnight to midnight.
pub fn hour_lines() -> Vec<HourLine> {
    (0..=HOURS_PER_DAY)
        .map(|hour| HourLine {
            hour,
            slot: hour * SLOTS_PER_HOUR,
            label: hour_label(hour),
        })
        .collect()
}

/// Slots of the 96 quarter-hour ticks (1..=96).
pub fn quarter_ticks() -> Vec<u32> {
    (1..=SLOTS_PER_DAY).collect()
}

/// Row labels indexed by lane, top to bottom.
pub const LANE_LABELS: [&str; LANE_COUNT] = ["Off-Duty", "Sleeper Berth", "Driving", "On-Duty"];

/// Status drawn in `lane`, if any.
pub fn status_of_lane(lane: usize) -> Option<DutyStatus> {
    DutyStatus::LANES.get(lane).cloned()
}
