use crate::errors::{AppError, AppResult};
use crate::models::{log_entry::LogEntry, trip_result::TripResult};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Read};

/// Parse either the full planner response (`{...}`) or just its `logs`
/// array (`[...]`). The first token decides, so field errors keep their
/// serde message and position.
pub fn parse_trip_result(json: &str) -> AppResult<TripResult> {
    if json.trim_start().starts_with('[') {
        let logs: Vec<LogEntry> = serde_json::from_str(json)?;
        return Ok(TripResult {
            logs,
            ..TripResult::default()
        });
    }

    Ok(serde_json::from_str(json)?)
}

/// Read a trip result from `path`, or from stdin when `path` is `-`.
pub fn load_trip_result(path: &str) -> AppResult<TripResult> {
    let content = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        let p = expand_tilde(path);
        fs::read_to_string(&p).map_err(|e| {
            AppError::from(io::Error::new(
                e.kind(),
                format!("cannot read {}: {e}", p.display()),
            ))
        })?
    };

    parse_trip_result(&content)
}
