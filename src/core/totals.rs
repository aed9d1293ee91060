//! Per-day duty totals: computed from the entries, or read back from the
//! remarks of a producer's `Total` row.

use crate::models::{duty_status::DutyStatus, log_entry::LogEntry};
use regex::Regex;
use std::sync::LazyLock;

/// Reported and computed hours closer than this are considered equal.
pub const TOTALS_TOLERANCE_HOURS: f64 = 0.1;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DayTotals {
    pub off_duty_minutes: u32,
    pub sleeper_minutes: u32,
    pub driving_minutes: u32,
    pub on_duty_minutes: u32,
    pub miles: f64,
}

impl DayTotals {
    /// Sum the entries' durations per status. Entries without a valid
    /// interval and statuses without a lane add nothing but their miles.
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut t = DayTotals::default();

        for e in entries {
            let m = e.duration_minutes();
            match e.status {
                DutyStatus::OffDuty => t.off_duty_minutes += m,
                DutyStatus::SleeperBerth => t.sleeper_minutes += m,
                DutyStatus::Driving => t.driving_minutes += m,
                DutyStatus::OnDuty => t.on_duty_minutes += m,
                DutyStatus::Total | DutyStatus::Unknown(_) => continue,
            }
            t.miles += e.miles;
        }

        t
    }

    /// Lines 3+4 of the paper log: driving plus on-duty (not driving).
    pub fn lines_3_4_minutes(&self) -> u32 {
        self.driving_minutes + self.on_duty_minutes
    }

    pub fn recorded_minutes(&self) -> u32 {
        self.off_duty_minutes + self.sleeper_minutes + self.lines_3_4_minutes()
    }

    pub fn minutes_for(&self, status: &DutyStatus) -> u32 {
        match status {
            DutyStatus::OffDuty => self.off_duty_minutes,
            DutyStatus::SleeperBerth => self.sleeper_minutes,
            DutyStatus::Driving => self.driving_minutes,
            DutyStatus::OnDuty => self.on_duty_minutes,
            DutyStatus::Total => self.recorded_minutes(),
            DutyStatus::Unknown(_) => 0,
        }
    }

    /// Text in the same shape the trip planner writes into `Total` rows.
    pub fn remarks(&self) -> String {
        format!(
            "Daily Total - Lines 3+4: {:.1} hrs (Driving: {:.1} hrs, On-Duty Not Driving: {:.1} hrs), Off-Duty: {:.1} hrs, Sleeper Berth: {:.1} hrs",
            hours(self.lines_3_4_minutes()),
            hours(self.driving_minutes),
            hours(self.on_duty_minutes),
            hours(self.off_duty_minutes),
            hours(self.sleeper_minutes),
        )
    }
}

pub fn hours(minutes: u32) -> f64 {
    minutes as f64 / 60.0
}

/// Hours found in a `Total` row's remarks. Missing labels stay `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ReportedTotals {
    pub driving: Option<f64>,
    pub on_duty: Option<f64>,
    pub off_duty: Option<f64>,
    pub sleeper: Option<f64>,
}

static DRIVING_RE: LazyLock<Regex> = LazyLock::new(|| hours_re("Driving"));
static ON_DUTY_RE: LazyLock<Regex> = LazyLock::new(|| hours_re("On-Duty Not Driving"));
static OFF_DUTY_RE: LazyLock<Regex> = LazyLock::new(|| hours_re("Off-Duty"));
static SLEEPER_RE: LazyLock<Regex> = LazyLock::new(|| hours_re("Sleeper Berth"));

fn hours_re(label: &str) -> Regex {
    // label must start a clause, so "Driving" does not match "On-Duty Not Driving"
    Regex::new(&format!(
        r"(?:^|[(,]\s*){}: ([\d.]+) hrs",
        regex::escape(label)
    ))
    .expect("static totals regex")
}

fn capture_hours(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

impl ReportedTotals {
    /// Returns `None` when no known label is present at all.
    pub fn parse(remarks: &str) -> Option<Self> {
        let r = ReportedTotals {
            driving: capture_hours(&DRIVING_RE, remarks),
            on_duty: capture_hours(&ON_DUTY_RE, remarks),
            off_duty: capture_hours(&OFF_DUTY_RE, remarks),
            sleeper: capture_hours(&SLEEPER_RE, remarks),
        };

        let any = r.driving.is_some()
            || r.on_duty.is_some()
            || r.off_duty.is_some()
            || r.sleeper.is_some();
        any.then_some(r)
    }

    /// Statuses whose reported hours differ from `computed` beyond the tolerance.
    pub fn mismatches(&self, computed: &DayTotals) -> Vec<DutyStatus> {
        let pairs = [
            (DutyStatus::OffDuty, self.off_duty),
            (DutyStatus::SleeperBerth, self.sleeper),
            (DutyStatus::Driving, self.driving),
            (DutyStatus::OnDuty, self.on_duty),
        ];

        pairs
            .into_iter()
            .filter_map(|(status, reported)| {
                let reported = reported?;
                let actual = hours(computed.minutes_for(&status));
                ((reported - actual).abs() > TOTALS_TOLERANCE_HOURS).then_some(status)
            })
            .collect()
    }
}
