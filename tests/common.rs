#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rdutylog::models::{duty_status::DutyStatus, log_entry::LogEntry, time_of_day::TimeOfDay};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rdl() -> Command {
    cargo_bin_cmd!("rdutylog")
}

/// Unique path inside the system temp dir; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rdutylog_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the CLI runs with defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
}

pub fn write_fixture(name: &str, json: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, json).expect("write fixture");
    p
}

/// Two days: the first with a Total row, the second without.
pub fn sample_trip_json() -> &'static str {
    r#"{
  "route": ["Chicago, IL", "Indianapolis, IN", "Nashville, TN"],
  "route_coordinates": [[41.8781, -87.6298], [39.7684, -86.1581], [36.1627, -86.7816]],
  "logs": [
    {"date": "2025-03-10", "status": "Off-Duty", "start_time": "00:00:00", "end_time": "06:00:00", "remarks": "Home terminal time base"},
    {"date": "2025-03-10", "status": "On-Duty", "start_time": "06:00:00", "end_time": "06:30:00", "remarks": "Pre-trip inspection"},
    {"date": "2025-03-10", "status": "Driving", "start_time": "06:30:00", "end_time": "12:00:00", "remarks": "Chicago to Indianapolis", "miles": 180},
    {"date": "2025-03-10", "status": "Off-Duty", "start_time": "12:00:00", "end_time": "24:00:00", "remarks": "10-hour break"},
    {"date": "2025-03-10", "status": "Total", "start_time": null, "end_time": null, "remarks": "Daily Total - Lines 3+4: 6.0 hrs (Driving: 5.5 hrs, On-Duty Not Driving: 0.5 hrs), Off-Duty: 18.0 hrs, Sleeper Berth: 0.0 hrs"},
    {"date": "2025-03-11", "status": "Driving", "start_time": "06:00:00", "end_time": "08:30:00", "remarks": "Indianapolis to Nashville"},
    {"date": "2025-03-11", "status": "Sleeper Berth", "start_time": "08:30:00", "end_time": "16:30:00", "remarks": "Sleeper Berth"}
  ],
  "total_distance": 470.5,
  "total_duration": 32.5,
  "hos_compliant": true,
  "violations": [],
  "pdf_url": "logs/trip_12.pdf"
}"#
}

/// Entry helper for library tests; times are "HH:MM:SS" or "" for missing.
pub fn entry(date: &str, status: DutyStatus, start: &str, end: &str) -> LogEntry {
    let t = |s: &str| -> Option<TimeOfDay> {
        if s.is_empty() {
            None
        } else {
            Some(s.parse().expect("valid time"))
        }
    };
    LogEntry::new(date, status, t(start), t(end), "")
}

pub fn total(date: &str, remarks: &str) -> LogEntry {
    LogEntry::new(date, DutyStatus::Total, None, None, remarks)
}
