// src/export/logic.rs

use crate::config::Config;
use crate::core::expansion::ExpansionState;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{day_export, entry_rows};
use crate::export::svg::export_svg;
use crate::models::trip_result::TripResult;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};
use crate::utils::range::optional_range;

/// High-level export driver.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the daily sheets of `trip`.
    ///
    /// - `format`: json (per-day layout) | csv (one row per entry) | svg (log sheets)
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B`
    pub fn export(
        trip: &TripResult,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }
        let path = expand_tilde(file);

        let bounds = optional_range(range)?;
        let mut state = ExpansionState::new();
        let sheets = Core::build_daily_sheets(&trip.logs, &mut state, bounds)?;

        if sheets.is_empty() {
            warning(format!(
                "No log days found for selected range, no {} file written.",
                format.as_str()
            ));
            return Ok(());
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Json => {
                let days: Vec<_> = sheets.iter().map(day_export).collect();
                export_json(&days, &path)?
            }
            ExportFormat::Csv => {
                let rows: Vec<_> = sheets.iter().flat_map(entry_rows).collect();
                export_csv(&rows, &path)?
            }
            ExportFormat::Svg => export_svg(&sheets, cfg, &path)?,
        }

        Ok(())
    }
}
