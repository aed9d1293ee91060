use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::expansion::ExpansionState;
use crate::core::loader::load_trip_result;
use crate::core::logic::{Core, DailySheet};
use crate::errors::{AppError, AppResult};
use crate::models::trip_result::TripResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{GREY, RESET, colorize_compliance, colorize_optional, paint_status};
use crate::utils::date::{date_heading, parse_date};
use crate::utils::formatting::{bold, separator, wrap_remarks};
use crate::utils::range::optional_range;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        input,
        range,
        expand,
        expand_all,
    } = cmd
    {
        let trip = load_trip_result(input)?;
        let bounds = optional_range(range)?;

        // 1️⃣ first pass: learn the dates on display
        let mut state = ExpansionState::new();
        let groups = Core::build_day_groups(&trip.logs, &mut state)?;

        // 2️⃣ user toggles; --expand flips a day after --expand-all
        if *expand_all {
            state.expand_all();
        }
        for raw in expand {
            let date = parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            if state.toggle(date).is_none() {
                warning(format!("No log entries for {date}, nothing to expand"));
            }
        }

        // 3️⃣ re-render with the new state
        let sheets = Core::build_daily_sheets(&trip.logs, &mut state, bounds)?;

        print_stats(&trip, groups.len());

        header("Daily Logs Summary");
        if sheets.is_empty() {
            println!("No log days for the selected range.");
        }
        for sheet in &sheets {
            print_day(sheet, cfg);
        }

        println!(
            "\n⚠️  This is a simulation tool. Always verify with official FMCSA guidelines."
        );
    }
    Ok(())
}

fn print_stats(trip: &TripResult, days: usize) {
    header("Trip");
    println!("Total Distance : {:.1} miles", trip.total_distance);
    println!("Total Duration : {:.1} hours", trip.total_duration);
    println!("HOS Status     : {}", colorize_compliance(trip.is_compliant()));
    println!("Days           : {days}");

    for v in &trip.violations {
        println!("  - {v}");
    }
    if let Some(pdf) = &trip.pdf_url {
        println!("📄 PDF log      : {pdf}");
    }
}

fn print_day(sheet: &DailySheet, cfg: &Config) {
    let group = &sheet.group;
    let width = cfg.remarks_width + 30;

    println!("\n{}", bold(&date_heading(group.date, &cfg.show_weekday)));
    println!("{}", separator(&cfg.separator_char, width));

    let summary = group.summary_text();
    if group.total.is_some() {
        println!("{summary}");
    } else {
        println!("{GREY}({summary}){RESET}");
    }

    for status in sheet.totals_mismatch() {
        warning(format!(
            "{}: reported total differs from entries ({} recorded)",
            status.ds_as_str(),
            format_hours(sheet.totals.minutes_for(&status))
        ));
    }

    let marker = if group.expanded { "▼ Hide" } else { "▶ Show" };
    println!("{marker} Details ({} entries)", group.entry_count());

    if group.expanded {
        println!("{}", entries_table(sheet, cfg).render());
    }
}

fn entries_table(sheet: &DailySheet, cfg: &Config) -> Table {
    let mut table = Table::new(vec![
        Column::new("TIME", 13),
        Column::new("STATUS", 13),
        Column::new("REMARKS", 10),
    ]);

    for e in &sheet.group.entries {
        let mut lines = wrap_remarks(&e.remarks, cfg.remarks_width).into_iter();
        table.add_row(vec![
            colorize_optional(&e.time_range()),
            paint_status(&e.status, e.status.ds_as_str()),
            lines.next().unwrap_or_default(),
        ]);
        for cont in lines {
            table.add_row(vec![String::new(), String::new(), cont]);
        }
    }

    table
}
