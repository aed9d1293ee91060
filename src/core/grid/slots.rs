use super::SLOTS_PER_HOUR;
use crate::models::time_of_day::TimeOfDay;

pub const MINUTES_PER_SLOT: u32 = 15;

/// Quarter-hour slot of `t`: `hours * 4 + minutes / 15`.
///
/// Seconds are ignored. `00:00:00` is slot 0 and `24:00:00` is slot 96.
pub fn slot_of(t: TimeOfDay) -> u32 {
    t.hours() * SLOTS_PER_HOUR + t.minutes() / MINUTES_PER_SLOT
}

/// `(start_slot, end_slot)` of an interval, mapped independently.
pub fn slot_span(start: TimeOfDay, end: TimeOfDay) -> (u32, u32) {
    (slot_of(start), slot_of(end))
}
