use super::log_entry::LogEntry;
use chrono::NaiveDate;

/// Shown in place of the daily total when the producer sent none.
pub const NO_TOTAL_PLACEHOLDER: &str = "No daily total";

/// All entries sharing one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub entries: Vec<LogEntry>, // non-Total entries, input order
    pub total: Option<LogEntry>,
    pub expanded: bool,
}

impl DayGroup {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            total: None,
            expanded: false,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Total row remarks, or the neutral placeholder.
    pub fn summary_text(&self) -> &str {
        self.total
            .as_ref()
            .map(|t| t.remarks.as_str())
            .unwrap_or(NO_TOTAL_PLACEHOLDER)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
