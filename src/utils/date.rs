use chrono::{Datelike, NaiveDate, Weekday};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Weekday name in the style configured by `show_weekday`.
/// `None` (or an unknown style) yields no label.
pub fn weekday_label(date: NaiveDate, style: &str) -> Option<String> {
    let wd = date.weekday();
    match style {
        "Short" => Some(two_letter(wd).to_string()),
        "Medium" => Some(date.format("%a").to_string()),
        "Long" => Some(date.format("%A").to_string()),
        _ => None,
    }
}

fn two_letter(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// "2025-03-10" or "2025-03-10 (Monday)".
pub fn date_heading(date: NaiveDate, style: &str) -> String {
    match weekday_label(date, style) {
        Some(wd) => format!("{} ({})", date.format("%Y-%m-%d"), wd),
        None => date.format("%Y-%m-%d").to_string(),
    }
}
