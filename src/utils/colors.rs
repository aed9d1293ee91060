/// ANSI color helper utilities for terminal output.
use crate::models::duty_status::DutyStatus;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Terminal colour of a duty lane, close to the log-sheet fill colours.
pub fn colour_for_status(status: &DutyStatus) -> Colour {
    match status {
        DutyStatus::OffDuty => Colour::RGB(231, 76, 60),
        DutyStatus::SleeperBerth => Colour::RGB(243, 156, 18),
        DutyStatus::Driving => Colour::RGB(39, 174, 96),
        DutyStatus::OnDuty => Colour::RGB(52, 152, 219),
        DutyStatus::Total => Colour::White,
        DutyStatus::Unknown(_) => Colour::Purple,
    }
}

pub fn paint_status(status: &DutyStatus, text: &str) -> String {
    colour_for_status(status).paint(text).to_string()
}

/// Grey for empty placeholders ("", "--:--"), plain otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "--:-- - --:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// HOS compliance flag: green tick or red cross.
pub fn colorize_compliance(compliant: bool) -> String {
    if compliant {
        format!("{GREEN}✓ Compliant{RESET}")
    } else {
        format!("{RED}✗ Non-compliant{RESET}")
    }
}
