mod common;
use common::entry;

use rdutylog::core::grid::axis::{LANE_LABELS, hour_label, hour_lines, quarter_ticks};
use rdutylog::core::grid::slots::slot_of;
use rdutylog::core::grid::{GridScale, SkipReason, layout};
use rdutylog::models::duty_status::DutyStatus;
use rdutylog::models::time_of_day::TimeOfDay;

fn t(s: &str) -> TimeOfDay {
    s.parse().expect("valid time")
}

#[test]
fn test_driving_example_from_log_sheet() {
    let entries = vec![entry("2025-03-11", DutyStatus::Driving, "06:00:00", "08:30:00")];

    let grid = layout(&entries);

    assert_eq!(grid.rectangles.len(), 1);
    let r = &grid.rectangles[0];
    assert_eq!(r.lane, 2);
    assert_eq!(r.start_slot, 24);
    assert_eq!(r.end_slot, 34);
    assert_eq!(r.width(), 10);
}

#[test]
fn test_lanes_are_fixed_by_status() {
    let entries = vec![
        entry("2025-03-10", DutyStatus::OnDuty, "05:00:00", "06:00:00"),
        entry("2025-03-10", DutyStatus::OffDuty, "00:00:00", "05:00:00"),
        entry("2025-03-10", DutyStatus::Driving, "06:00:00", "10:00:00"),
        entry("2025-03-10", DutyStatus::SleeperBerth, "10:00:00", "18:00:00"),
    ];

    let grid = layout(&entries);
    let lanes: Vec<(DutyStatus, usize)> = grid
        .rectangles
        .iter()
        .map(|r| (r.status.clone(), r.lane))
        .collect();

    assert_eq!(
        lanes,
        vec![
            (DutyStatus::OnDuty, 3),
            (DutyStatus::OffDuty, 0),
            (DutyStatus::Driving, 2),
            (DutyStatus::SleeperBerth, 1),
        ]
    );

    // Reversing the input does not move anything between lanes
    let mut reversed = entries.clone();
    reversed.reverse();
    for r in layout(&reversed).rectangles {
        assert_eq!(Some(r.lane), r.status.lane());
    }
}

#[test]
fn test_slot_boundaries() {
    assert_eq!(slot_of(TimeOfDay::MIDNIGHT), 0);
    assert_eq!(slot_of(TimeOfDay::END_OF_DAY), 96);
    assert_eq!(slot_of(t("24:00:00")), 96);
    assert_eq!(slot_of(t("00:14:59")), 0);
    assert_eq!(slot_of(t("00:15:00")), 1);
    assert_eq!(slot_of(t("08:30")), 34);
    assert_eq!(slot_of(t("23:59:59")), 95);
}

#[test]
fn test_slot_is_monotonic() {
    let mut prev = 0;
    for minute in 0..=(24 * 60) {
        let tod = TimeOfDay::from_hms(minute / 60, minute % 60, 0).expect("in range");
        let slot = slot_of(tod);
        assert!(slot >= prev, "slot went back at minute {minute}");
        assert_eq!(slot, minute / 15);
        prev = slot;
    }
}

#[test]
fn test_total_only_day_has_no_rectangles() {
    let entries = vec![common::total("2025-03-12", "11 hrs")];

    let grid = layout(&entries);

    assert!(grid.rectangles.is_empty());
    assert_eq!(grid.skipped[0].reason, SkipReason::TotalRow);
}

#[test]
fn test_missing_times_are_skipped_not_fatal() {
    let entries = vec![
        entry("2025-03-10", DutyStatus::Driving, "06:00:00", ""),
        entry("2025-03-10", DutyStatus::OnDuty, "", "07:00:00"),
        entry("2025-03-10", DutyStatus::OffDuty, "07:00:00", "09:00:00"),
    ];

    let grid = layout(&entries);

    assert_eq!(grid.rectangles.len(), 1);
    assert_eq!(grid.rectangles[0].entry_index, 2);
    assert_eq!(grid.skipped.len(), 2);
    assert!(
        grid.skipped
            .iter()
            .all(|s| s.reason == SkipReason::MissingTime)
    );
}

#[test]
fn test_unknown_status_is_skipped() {
    let entries = vec![
        entry(
            "2025-03-10",
            DutyStatus::Unknown("Yard Move".into()),
            "06:00:00",
            "07:00:00",
        ),
        entry("2025-03-10", DutyStatus::Driving, "07:00:00", "08:00:00"),
    ];

    let grid = layout(&entries);

    assert_eq!(grid.rectangles.len(), 1);
    assert_eq!(grid.skipped[0].entry_index, 0);
    assert_eq!(grid.skipped[0].reason, SkipReason::UnknownStatus);
}

#[test]
fn test_degenerate_intervals_are_rejected() {
    let entries = vec![
        // same quarter hour
        entry("2025-03-10", DutyStatus::OnDuty, "06:05:00", "06:10:00"),
        // reversed
        entry("2025-03-10", DutyStatus::Driving, "10:00:00", "08:00:00"),
        // zero length
        entry("2025-03-10", DutyStatus::OffDuty, "12:00:00", "12:00:00"),
    ];

    let grid = layout(&entries);

    assert!(grid.is_empty());
    assert_eq!(grid.skipped.len(), 3);
    assert!(
        grid.skipped
            .iter()
            .all(|s| s.reason == SkipReason::EmptyInterval)
    );
}

#[test]
fn test_overlaps_in_same_lane_keep_encounter_order() {
    let entries = vec![
        entry("2025-03-10", DutyStatus::Driving, "06:00:00", "10:00:00"),
        entry("2025-03-10", DutyStatus::Driving, "08:00:00", "12:00:00"),
    ];

    let grid = layout(&entries);
    let driving: Vec<_> = grid.in_lane(2).collect();

    assert_eq!(driving.len(), 2);
    assert_eq!((driving[0].start_slot, driving[0].end_slot), (24, 40));
    assert_eq!((driving[1].start_slot, driving[1].end_slot), (32, 48));
}

#[test]
fn test_layout_is_idempotent() {
    let entries = vec![
        entry("2025-03-10", DutyStatus::OffDuty, "00:00:00", "06:00:00"),
        entry("2025-03-10", DutyStatus::Driving, "06:00:00", "11:45:00"),
        entry("2025-03-10", DutyStatus::OnDuty, "11:45:00", ""),
    ];

    assert_eq!(layout(&entries), layout(&entries));
}

#[test]
fn test_day_boundary_entry_fills_last_slot() {
    let entries = vec![entry("2025-03-10", DutyStatus::OffDuty, "23:00:00", "24:00:00")];

    let grid = layout(&entries);

    assert_eq!(grid.rectangles[0].start_slot, 92);
    assert_eq!(grid.rectangles[0].end_slot, 96);
}

#[test]
fn test_hour_labels() {
    assert_eq!(hour_label(0), "Mid");
    assert_eq!(hour_label(1), "1");
    assert_eq!(hour_label(11), "11");
    assert_eq!(hour_label(12), "Noon");
    assert_eq!(hour_label(13), "1");
    assert_eq!(hour_label(23), "11");
    assert_eq!(hour_label(24), "Mid");
}

#[test]
fn test_axis_counts() {
    let lines = hour_lines();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0].slot, 0);
    assert_eq!(lines[24].slot, 96);
    assert_eq!(lines[12].label, "Noon");

    let ticks = quarter_ticks();
    assert_eq!(ticks.len(), 96);
    assert_eq!(ticks.first(), Some(&1));
    assert_eq!(ticks.last(), Some(&96));

    assert_eq!(LANE_LABELS, ["Off-Duty", "Sleeper Berth", "Driving", "On-Duty"]);
}

#[test]
fn test_scale_on_reference_canvas() {
    let scale = GridScale::with_margins(800.0, 400.0, 100.0, 40.0, 40.0, 40.0);
    assert_eq!(scale.width, 660.0);
    assert_eq!(scale.height, 320.0);

    let entries = vec![entry("2025-03-11", DutyStatus::Driving, "06:00:00", "08:30:00")];
    let grid = layout(&entries);
    let r = scale.rect(&grid.rectangles[0]);

    assert!((r.x - 265.0).abs() < 1e-9);
    assert!((r.width - 68.75).abs() < 1e-9);
    assert!((r.y - 200.0).abs() < 1e-9);
    assert!((r.height - 80.0).abs() < 1e-9);
}

#[test]
fn test_scale_is_resolution_independent() {
    let entries = vec![entry("2025-03-11", DutyStatus::OffDuty, "00:00:00", "12:00:00")];
    let grid = layout(&entries);

    for width in [96.0, 480.0, 1920.0] {
        let scale = GridScale::new(0.0, 0.0, width, 4.0);
        let r = scale.rect(&grid.rectangles[0]);
        assert!((r.width - width / 2.0).abs() < 1e-9);
        assert_eq!(r.x, 0.0);
    }
}
