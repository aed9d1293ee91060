use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::expansion::ExpansionState;
use crate::core::grid::axis::{LANE_LABELS, hour_lines, status_of_lane};
use crate::core::grid::{GridScale, LANE_COUNT};
use crate::core::loader::load_trip_result;
use crate::core::logic::{Core, DailySheet};
use crate::errors::{AppError, AppResult};
use crate::models::duty_status::DutyStatus;
use crate::ui::messages::{detail, header, warning};
use crate::utils::colors::paint_status;
use crate::utils::date::{date_heading, parse_date};
use crate::utils::formatting::pad_right;
use crate::utils::time::format_minutes;

const LABEL_WIDTH: usize = 14;
const EMPTY_CELL: char = '·';
const BAR_CELL: &str = "█";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid {
        input,
        date,
        columns,
    } = cmd
    {
        let trip = load_trip_result(input)?;

        let bounds = match date {
            Some(raw) => {
                let d = parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
                Some((d, d))
            }
            None => None,
        };

        let mut state = ExpansionState::new();
        let sheets = Core::build_daily_sheets(&trip.logs, &mut state, bounds)?;

        if sheets.is_empty() {
            warning("No log days to draw.");
            return Ok(());
        }

        let cols = columns.unwrap_or(cfg.terminal_columns).max(24);
        for sheet in &sheets {
            header(date_heading(sheet.group.date, &cfg.show_weekday));
            print!("{}", render_terminal_grid(sheet, cols));

            for s in &sheet.layout.skipped {
                if let Some(e) = sheet.group.entries.get(s.entry_index) {
                    detail(format!(
                        "not drawn: {} {} ({})",
                        e.status.ds_as_str(),
                        e.time_range(),
                        s.reason.describe()
                    ));
                }
            }
        }
    }
    Ok(())
}

/// Text rendering of one sheet, `columns` cells wide, lane totals on the right.
pub fn render_terminal_grid(sheet: &DailySheet, columns: usize) -> String {
    let scale = GridScale::new(0.0, 0.0, columns as f64, LANE_COUNT as f64);
    let mut out = String::new();

    out.push_str(&" ".repeat(LABEL_WIDTH));
    out.push_str(&hour_ruler(&scale, columns));
    out.push('\n');

    for (lane, label) in LANE_LABELS.iter().enumerate() {
        // later rectangles overwrite earlier ones
        let mut cells: Vec<Option<DutyStatus>> = vec![None; columns];
        for rect in sheet.layout.in_lane(lane) {
            let r = scale.rect(rect);
            let from = (r.x.round() as usize).min(columns - 1);
            let to = ((r.x + r.width).round() as usize).clamp(from + 1, columns);
            for cell in cells.iter_mut().take(to).skip(from) {
                *cell = Some(rect.status.clone());
            }
        }

        out.push_str(&pad_right(label, LABEL_WIDTH));
        out.push('|');
        for cell in &cells {
            match cell {
                Some(status) => out.push_str(&paint_status(status, BAR_CELL)),
                None => out.push(EMPTY_CELL),
            }
        }
        out.push('|');

        let minutes = status_of_lane(lane)
            .map(|s| sheet.totals.minutes_for(&s))
            .unwrap_or(0);
        out.push_str(&format!(" {}\n", format_minutes(minutes)));
    }

    out
}

/// Hour labels placed at their gridline column; labels that would collide
/// with the previous one are left out.
fn hour_ruler(scale: &GridScale, columns: usize) -> String {
    let mut ruler = vec![' '; columns + 6];
    let mut next_free = 0usize;

    for line in hour_lines() {
        // +1 for the opening '|'
        let col = scale.x_for_slot(line.slot as f64).round() as usize + 1;
        let start = col.saturating_sub(line.label.len() / 2);
        if start < next_free || start + line.label.len() > ruler.len() {
            continue;
        }
        for (i, ch) in line.label.chars().enumerate() {
            ruler[start + i] = ch;
        }
        next_free = start + line.label.len() + 1;
    }

    ruler.into_iter().collect::<String>().trim_end().to_string()
}
