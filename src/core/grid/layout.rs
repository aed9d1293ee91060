use super::slots::slot_span;
use crate::models::{duty_status::DutyStatus, log_entry::LogEntry};
use serde::Serialize;

/// One bar of the log sheet, in slot space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRect {
    pub entry_index: usize, // position in the input slice
    pub status: DutyStatus,
    pub lane: usize,
    pub start_slot: u32,
    pub end_slot: u32,
}

impl GridRect {
    pub fn width(&self) -> u32 {
        self.end_slot - self.start_slot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Aggregate row, never drawn.
    TotalRow,
    /// Status without a lane.
    UnknownStatus,
    /// Start or end time absent.
    MissingTime,
    /// `end_slot <= start_slot` after slot mapping.
    EmptyInterval,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::TotalRow => "total row",
            SkipReason::UnknownStatus => "unknown duty status",
            SkipReason::MissingTime => "missing start or end time",
            SkipReason::EmptyInterval => "interval shorter than one slot or reversed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub entry_index: usize,
    pub reason: SkipReason,
}

/// Rectangles of one day, in encounter order (later ones paint over earlier).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub rectangles: Vec<GridRect>,
    pub skipped: Vec<SkippedEntry>,
}

impl GridLayout {
    pub fn in_lane(&self, lane: usize) -> impl Iterator<Item = &GridRect> {
        self.rectangles.iter().filter(move |r| r.lane == lane)
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }
}

/// Lay out one day's entries on the grid.
///
/// Never fails: entries that cannot be drawn are listed in `skipped`.
/// Same-lane overlaps are kept as-is.
pub fn layout(entries: &[LogEntry]) -> GridLayout {
    let mut out = GridLayout::default();

    for (i, entry) in entries.iter().enumerate() {
        match place(entry) {
            Ok((lane, start_slot, end_slot)) => out.rectangles.push(GridRect {
                entry_index: i,
                status: entry.status.clone(),
                lane,
                start_slot,
                end_slot,
            }),
            Err(reason) => out.skipped.push(SkippedEntry {
                entry_index: i,
                reason,
            }),
        }
    }

    out
}

fn place(entry: &LogEntry) -> Result<(usize, u32, u32), SkipReason> {
    let lane = match entry.status.lane() {
        Some(lane) => lane,
        None if entry.status == DutyStatus::Total => return Err(SkipReason::TotalRow),
        None => return Err(SkipReason::UnknownStatus),
    };

    let (start, end) = entry.interval().ok_or(SkipReason::MissingTime)?;
    let (start_slot, end_slot) = slot_span(start, end);

    if end_slot <= start_slot {
        return Err(SkipReason::EmptyInterval);
    }

    Ok((lane, start_slot, end_slot))
}
