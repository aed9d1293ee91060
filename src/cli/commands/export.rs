use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader::load_trip_result;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let trip = load_trip_result(input)?;
        ExportLogic::export(&trip, cfg, *format, file, range, *force)?;
    }
    Ok(())
}
