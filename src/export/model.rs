// src/export/model.rs

use crate::core::grid::{GridRect, SkipReason};
use crate::core::logic::DailySheet;
use crate::core::totals::hours;
use crate::models::time_of_day::TimeOfDay;
use serde::Serialize;

/// Flat row per log entry (CSV).
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
    pub lane: Option<usize>,
    pub start_slot: Option<u32>,
    pub end_slot: Option<u32>,
    pub drawn: bool,
    pub skip_reason: String,
    pub remarks: String,
    pub miles: f64,
}

#[derive(Serialize, Clone, Debug)]
pub struct RectExport {
    pub entry_index: usize,
    pub status: String,
    pub lane: usize,
    pub start_slot: u32,
    pub end_slot: u32,
    pub width: u32,
}

#[derive(Serialize, Clone, Debug)]
pub struct TotalsExport {
    pub off_duty_hours: f64,
    pub sleeper_hours: f64,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub lines_3_4_hours: f64,
    pub miles: f64,
}

/// One day of the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub total_remarks: Option<String>,
    pub entry_count: usize,
    pub totals: TotalsExport,
    pub rectangles: Vec<RectExport>,
    pub skipped: Vec<SkippedExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct SkippedExport {
    pub entry_index: usize,
    pub reason: String,
}

fn time_str(t: Option<TimeOfDay>) -> String {
    t.map(|t| t.to_string()).unwrap_or_default()
}

fn rect_export(r: &GridRect) -> RectExport {
    RectExport {
        entry_index: r.entry_index,
        status: r.status.ds_as_str().to_string(),
        lane: r.lane,
        start_slot: r.start_slot,
        end_slot: r.end_slot,
        width: r.width(),
    }
}

pub(crate) fn day_export(sheet: &DailySheet) -> DayExport {
    let t = &sheet.totals;

    DayExport {
        date: sheet.group.date_str(),
        total_remarks: sheet.group.total.as_ref().map(|e| e.remarks.clone()),
        entry_count: sheet.group.entry_count(),
        totals: TotalsExport {
            off_duty_hours: hours(t.off_duty_minutes),
            sleeper_hours: hours(t.sleeper_minutes),
            driving_hours: hours(t.driving_minutes),
            on_duty_hours: hours(t.on_duty_minutes),
            lines_3_4_hours: hours(t.lines_3_4_minutes()),
            miles: t.miles,
        },
        rectangles: sheet.layout.rectangles.iter().map(rect_export).collect(),
        skipped: sheet
            .layout
            .skipped
            .iter()
            .map(|s| SkippedExport {
                entry_index: s.entry_index,
                reason: s.reason.describe().to_string(),
            })
            .collect(),
    }
}

/// Rows for every entry of the sheet, drawn or not.
pub(crate) fn entry_rows(sheet: &DailySheet) -> Vec<EntryExport> {
    let skip_of = |i: usize| -> Option<SkipReason> {
        sheet
            .layout
            .skipped
            .iter()
            .find(|s| s.entry_index == i)
            .map(|s| s.reason)
    };

    sheet
        .group
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let rect = sheet.layout.rectangles.iter().find(|r| r.entry_index == i);
            EntryExport {
                date: e.date.clone(),
                status: e.status.ds_as_str().to_string(),
                start_time: time_str(e.start_time),
                end_time: time_str(e.end_time),
                lane: e.status.lane(),
                start_slot: rect.map(|r| r.start_slot),
                end_slot: rect.map(|r| r.end_slot),
                drawn: rect.is_some(),
                skip_reason: skip_of(i)
                    .map(|r| r.describe().to_string())
                    .unwrap_or_default(),
                remarks: e.remarks.clone(),
                miles: e.miles,
            }
        })
        .collect()
}
