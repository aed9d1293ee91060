mod common;
use common::sample_trip_json;

use rdutylog::core::loader::parse_trip_result;
use rdutylog::models::duty_status::DutyStatus;
use rdutylog::models::location::GeoPoint;
use rdutylog::models::log_entry::LogEntry;
use rdutylog::models::time_of_day::TimeOfDay;

#[test]
fn test_time_of_day_parsing() {
    let t: TimeOfDay = "08:30:15".parse().expect("valid");
    assert_eq!((t.hours(), t.minutes(), t.seconds()), (8, 30, 15));
    assert_eq!(t.to_string(), "08:30:15");
    assert_eq!(t.short(), "08:30");

    let short: TimeOfDay = "06:45".parse().expect("valid");
    assert_eq!(short.total_minutes(), 6 * 60 + 45);

    let end: TimeOfDay = "24:00:00".parse().expect("day boundary");
    assert_eq!(end, TimeOfDay::END_OF_DAY);

    for bad in ["24:00:01", "25:00", "12:60", "12", "ab:cd", "", "1:2:3:4", "123:00"] {
        assert!(bad.parse::<TimeOfDay>().is_err(), "{bad} should not parse");
    }
}

#[test]
fn test_status_wire_names() {
    assert_eq!(DutyStatus::ds_from_str("Off-Duty"), DutyStatus::OffDuty);
    assert_eq!(DutyStatus::ds_from_str("Sleeper Berth"), DutyStatus::SleeperBerth);
    assert_eq!(DutyStatus::ds_from_str("Driving"), DutyStatus::Driving);
    assert_eq!(DutyStatus::ds_from_str("On-Duty"), DutyStatus::OnDuty);
    assert_eq!(
        DutyStatus::ds_from_str("On-Duty (Not Driving)"),
        DutyStatus::OnDuty
    );
    assert_eq!(DutyStatus::ds_from_str("Total"), DutyStatus::Total);
    assert_eq!(
        DutyStatus::ds_from_str("Personal Conveyance"),
        DutyStatus::Unknown("Personal Conveyance".into())
    );
}

#[test]
fn test_unknown_status_round_trips() {
    let json = r#"{"date":"2025-03-10","status":"Yard Move","start_time":"06:00:00","end_time":"07:00:00","remarks":""}"#;

    let e: LogEntry = serde_json::from_str(json).expect("entry");
    assert_eq!(e.status, DutyStatus::Unknown("Yard Move".into()));
    assert_eq!(e.status.lane(), None);

    let back = serde_json::to_value(&e).expect("serialize");
    assert_eq!(back["status"], "Yard Move");
    assert_eq!(back["start_time"], "06:00:00");
}

#[test]
fn test_entry_times_are_lenient() {
    let json = r#"[
        {"date":"2025-03-10","status":"Total","start_time":null,"end_time":null,"remarks":"x"},
        {"date":"2025-03-10","status":"Driving","remarks":"no times"},
        {"date":"2025-03-10","status":"Driving","start_time":"6 am","end_time":"07:00:00"}
    ]"#;

    let entries: Vec<LogEntry> = serde_json::from_str(json).expect("entries");

    assert_eq!(entries[0].interval(), None);
    assert_eq!(entries[1].interval(), None);
    assert_eq!(entries[1].time_range(), "--:-- - --:--");
    assert_eq!(entries[2].start_time, None);
    assert!(entries[2].end_time.is_some());
    assert_eq!(entries[2].remarks, "");
    assert_eq!(entries[2].duration_minutes(), 0);
}

#[test]
fn test_trip_result_payload() {
    let trip = parse_trip_result(sample_trip_json()).expect("trip");

    assert_eq!(trip.logs.len(), 7);
    assert_eq!(trip.logs[2].miles, 180.0);
    assert!(trip.is_compliant());
    assert_eq!(trip.pdf_url.as_deref(), Some("logs/trip_12.pdf"));
    assert_eq!(trip.route_positions().len(), 3);
}

#[test]
fn test_route_positions_fall_back_to_locations() {
    let json = r#"{
        "logs": [],
        "route_coordinates": [],
        "locations": [
            {"name": "A", "lat": 1.0, "lon": 2.0},
            {"name": "B", "lat": 3.0, "lon": 4.0}
        ]
    }"#;

    let trip = parse_trip_result(json).expect("trip");

    assert_eq!(
        trip.route_positions(),
        vec![GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)]
    );
    // missing hos flag reads as compliant
    assert!(trip.is_compliant());
}

#[test]
fn test_bare_log_array_is_accepted() {
    let json = r#"[{"date":"2025-03-10","status":"Driving","start_time":"06:00:00","end_time":"07:00:00","remarks":""}]"#;

    let trip = parse_trip_result(json).expect("trip");

    assert_eq!(trip.logs.len(), 1);
    assert!(trip.route_positions().is_empty());
}

#[test]
fn test_range_forms() {
    use chrono::NaiveDate;
    use rdutylog::utils::range::{optional_range, parse_range};

    let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date");

    assert_eq!(
        parse_range("2024-02").expect("month"),
        (d("2024-02-01"), d("2024-02-29"))
    );
    assert_eq!(
        parse_range("2025").expect("year"),
        (d("2025-01-01"), d("2025-12-31"))
    );
    assert_eq!(
        parse_range("2025-03-10:2025-03-12").expect("span"),
        (d("2025-03-10"), d("2025-03-12"))
    );
    assert!(parse_range("2025-03:2025-03-12").is_err());
    assert!(parse_range("2025-03-12:2025-03-10").is_err());
    assert_eq!(optional_range(&Some("all".into())).expect("all"), None);
}

#[test]
fn test_from_hms_rejects_out_of_range_hours() {
    assert_eq!(TimeOfDay::from_hms(24, 0, 0), Some(TimeOfDay::END_OF_DAY));
    assert_eq!(TimeOfDay::from_hms(25, 0, 0), None);
    assert_eq!(TimeOfDay::from_hms(2_000_000, 0, 0), None);
    assert_eq!(TimeOfDay::from_hms(u32::MAX, 59, 59), None);
}

#[test]
fn test_null_date_is_rejected_with_its_index() {
    use rdutylog::core::grouping::group_by_day;
    use rdutylog::errors::AppError;

    let json = r#"{"logs":[
        {"date":"2025-03-10","status":"Driving","start_time":"06:00:00","end_time":"07:00:00","remarks":""},
        {"date":null,"status":"Driving","remarks":null}
    ]}"#;

    let trip = parse_trip_result(json).expect("payload parses");
    assert_eq!(trip.logs[1].date, "");
    assert_eq!(trip.logs[1].remarks, "");

    match group_by_day(&trip.logs) {
        Err(AppError::InvalidEntry { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected InvalidEntry, got {other:?}"),
    }
}

#[test]
fn test_numeric_date_is_rejected_with_its_index() {
    use rdutylog::core::grouping::group_by_day;
    use rdutylog::errors::AppError;

    let trip = parse_trip_result(r#"[{"date":20250310,"status":"Driving"}]"#)
        .expect("payload parses");
    assert_eq!(trip.logs[0].date, "20250310");

    match group_by_day(&trip.logs) {
        Err(AppError::InvalidEntry { index, reason }) => {
            assert_eq!(index, 0);
            assert!(reason.contains("20250310"));
        }
        other => panic!("expected InvalidEntry, got {other:?}"),
    }
}

#[test]
fn test_field_errors_keep_their_message() {
    let err = parse_trip_result(r#"{"logs":[{"date":"2025-03-10"}]}"#)
        .expect_err("status is required");
    assert!(err.to_string().contains("missing field `status`"), "{err}");

    let err = parse_trip_result(r#"[{"date":"2025-03-10"}]"#).expect_err("status is required");
    assert!(err.to_string().contains("missing field `status`"), "{err}");
}
