use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDutyLog
/// CLI application to review driver duty logs produced by a trip planner
#[derive(Parser)]
#[command(
    name = "rdutylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Review driver duty logs: daily summaries and 24-hour log grids",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show trip statistics and the daily log summaries
    Summary {
        /// Trip result JSON file (`-` for stdin)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(
            long = "expand",
            value_name = "DATE",
            help = "Toggle the details of a day (YYYY-MM-DD), repeatable; applied after --expand-all"
        )]
        expand: Vec<String>,

        #[arg(long = "expand-all", help = "Show the details of every day")]
        expand_all: bool,
    },

    /// Draw the 24-hour log grid in the terminal
    Grid {
        /// Trip result JSON file (`-` for stdin)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, value_name = "DATE", help = "Only this day (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Grid width in terminal columns")]
        columns: Option<usize>,
    },

    /// Show the route extent the map recenters on
    Route {
        /// Trip result JSON file (`-` for stdin)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,
    },

    /// Export daily log sheets
    Export {
        /// Trip result JSON file (`-` for stdin)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
