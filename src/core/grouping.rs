use crate::errors::{AppError, AppResult};
use crate::models::{day_group::DayGroup, log_entry::LogEntry};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Split a flat log stream into per-day groups.
///
/// Groups appear in first-occurrence order of their date. Inside a group the
/// first `Total` row becomes `total`; any further `Total` rows are dropped and
/// the other entries keep their input order. Every group starts collapsed.
///
/// A malformed `date` rejects the whole batch with `InvalidEntry`.
pub fn group_by_day(entries: &[LogEntry]) -> AppResult<Vec<DayGroup>> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut index_of: HashMap<NaiveDate, usize> = HashMap::new();

    for (i, entry) in entries.iter().enumerate() {
        let date = parse_date(&entry.date).ok_or_else(|| AppError::InvalidEntry {
            index: i,
            reason: format!("unparseable date '{}'", entry.date),
        })?;

        let slot = *index_of.entry(date).or_insert_with(|| {
            groups.push(DayGroup::new(date));
            groups.len() - 1
        });
        let group = &mut groups[slot];

        if entry.status.is_total() {
            if group.total.is_none() {
                group.total = Some(entry.clone());
            }
        } else {
            group.entries.push(entry.clone());
        }
    }

    Ok(groups)
}
