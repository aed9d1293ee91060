use crate::core::expansion::ExpansionState;
use crate::core::grid::{GridLayout, layout};
use crate::core::grouping::group_by_day;
use crate::core::totals::{DayTotals, ReportedTotals};
use crate::errors::AppResult;
use crate::models::{day_group::DayGroup, duty_status::DutyStatus, log_entry::LogEntry};
use crate::utils::range::in_range;
use chrono::NaiveDate;

/// One day ready for display: the group, its grid and its totals.
#[derive(Debug, Clone)]
pub struct DailySheet {
    pub group: DayGroup,
    pub layout: GridLayout,
    pub totals: DayTotals,
    pub reported: Option<ReportedTotals>,
}

impl DailySheet {
    pub fn build(group: DayGroup) -> Self {
        let layout = layout(&group.entries);
        let totals = DayTotals::from_entries(&group.entries);
        let reported = group
            .total
            .as_ref()
            .and_then(|t| ReportedTotals::parse(&t.remarks));

        Self {
            group,
            layout,
            totals,
            reported,
        }
    }

    /// Statuses whose reported hours disagree with the entries.
    pub fn totals_mismatch(&self) -> Vec<DutyStatus> {
        self.reported
            .map(|r| r.mismatches(&self.totals))
            .unwrap_or_default()
    }
}

pub struct Core;

impl Core {
    /// Group the stream by day and attach the caller's expansion flags.
    /// The state learns the new dates and forgets vanished ones.
    pub fn build_day_groups(
        logs: &[LogEntry],
        state: &mut ExpansionState,
    ) -> AppResult<Vec<DayGroup>> {
        let groups = group_by_day(logs)?;
        state.sync(&groups);
        Ok(state.apply(groups))
    }

    /// Grouping plus layout for every day inside `bounds`.
    pub fn build_daily_sheets(
        logs: &[LogEntry],
        state: &mut ExpansionState,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<DailySheet>> {
        Ok(Self::build_day_groups(logs, state)?
            .into_iter()
            .filter(|g| in_range(g.date, bounds))
            .map(DailySheet::build)
            .collect())
    }
}
