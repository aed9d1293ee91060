use crate::models::day_group::DayGroup;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Open/collapsed flag per day, owned by the presentation layer.
///
/// Only dates registered through [`ExpansionState::sync`] are known; toggling
/// anything else is a no-op.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExpansionState {
    flags: HashMap<NaiveDate, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the dates of `groups`. Known dates keep their flag, new ones
    /// start collapsed, dates no longer displayed are forgotten.
    pub fn sync(&mut self, groups: &[DayGroup]) {
        let mut next = HashMap::with_capacity(groups.len());
        for g in groups {
            let flag = self.flags.get(&g.date).copied().unwrap_or(false);
            next.insert(g.date, flag);
        }
        self.flags = next;
    }

    /// Flip one date and return its new state, `None` if the date is unknown.
    pub fn toggle(&mut self, date: NaiveDate) -> Option<bool> {
        let flag = self.flags.get_mut(&date)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_expanded(&self, date: NaiveDate) -> bool {
        self.flags.get(&date).copied().unwrap_or(false)
    }

    pub fn is_known(&self, date: NaiveDate) -> bool {
        self.flags.contains_key(&date)
    }

    pub fn expand_all(&mut self) {
        self.flags.values_mut().for_each(|f| *f = true);
    }

    pub fn collapse_all(&mut self) {
        self.flags.values_mut().for_each(|f| *f = false);
    }

    /// Rebuild `groups` with their `expanded` flag taken from this state.
    pub fn apply(&self, groups: Vec<DayGroup>) -> Vec<DayGroup> {
        groups
            .into_iter()
            .map(|g| DayGroup {
                expanded: self.is_expanded(g.date),
                ..g
            })
            .collect()
    }
}
