//! rDutyLog main entrypoint.

use rdutylog::run;
use rdutylog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
