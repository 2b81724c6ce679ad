use crate::export::ExportFormat;
use crate::models::DateMode;
use clap::{Parser, Subcommand};

/// Command-line interface definition for acadcal
/// Terminal academic calendar and timetable viewer
#[derive(Parser)]
#[command(
    name = "acadcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Academic calendar and timetable viewer: month grid, daily agenda and course lookup from a workbook",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// University label stamped on timetable rows (overrides the config file)
    #[arg(global = true, long = "university", value_name = "NAME")]
    pub university: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Show how each sheet of the workbook was classified and what was dropped
    Sheets {
        /// Workbook file (xlsx, xls, xlsb, ods)
        file: String,
    },

    /// Month grid with markers, legend and the selected day's events
    Calendar {
        /// Workbook file (xlsx, xls, xlsb, ods)
        file: String,

        #[arg(long, help = "Year to display (defaults to the selected date's year)")]
        year: Option<i32>,

        #[arg(
            long,
            help = "Month to display: 1-12 or a month name (defaults to the selected date's month)"
        )]
        month: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Selected date (default: today)")]
        select: Option<String>,
    },

    /// Events of a single day (detail panel only)
    Day {
        /// Workbook file (xlsx, xls, xlsb, ods)
        file: String,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Date to show (default: today)")]
        date: Option<String>,
    },

    /// Resolve the class schedule of a day or a Monday-Saturday week
    Schedule {
        /// Workbook file (xlsx, xls, xlsb, ods)
        file: String,

        #[arg(long, value_enum, default_value = "today")]
        mode: DateMode,

        #[arg(
            long,
            value_name = "YYYY-MM-DD",
            help = "Date for custom mode, or reference date for week mode"
        )]
        date: Option<String>,

        #[arg(long, value_enum, help = "Export the resolved rows")]
        export: Option<ExportFormat>,

        #[arg(
            long = "file",
            value_name = "FILE",
            requires = "export",
            help = "Output file (default: name built from the date range)"
        )]
        file_out: Option<String>,

        #[arg(long, short = 'f', requires = "export")]
        force: bool,
    },

    /// Look up a course by free-text search (first match only)
    Course {
        /// Workbook file (xlsx, xls, xlsb, ods)
        file: String,

        /// Search term, matched case-insensitively against every column
        term: String,
    },

    /// Interactive session: navigate months, select days, search courses
    Browse {
        /// Workbook file (xlsx, xls, xlsb, ods)
        file: String,
    },
}
