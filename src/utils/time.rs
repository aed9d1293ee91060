//! Duration formatting for the summary views.

/// 630 → "10:30".
pub fn format_minutes(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// 630 → "10.5 h".
pub fn format_hours(mins: u32) -> String {
    format!("{:.1} h", mins as f64 / 60.0)
}
