use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for timebank
/// CLI application to track punches and keep a monthly time bank with SQLite
#[derive(Parser)]
#[command(
    name = "timebank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work punches and absences, and keep a signed monthly time bank",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Freeze "now" (DD/MM/YYYY HH:MM[:SS]) for reproducible output
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Enable debug logging (otherwise TIMEBANK_LOG / RUST_LOG)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        /// Contractual work per day in minutes (e.g. 480)
        #[arg(long = "work-hours")]
        work_hours: Option<i64>,

        /// Tolerance band in minutes (default 10)
        #[arg(long = "tolerance")]
        tolerance: Option<i64>,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Fill missing configuration fields with defaults")]
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only rows of this operation (add, edit, del, init, migration_applied)")]
        operation: Option<String>,

        #[arg(long = "limit", help = "Only the most recent N rows")]
        limit: Option<usize>,
    },

    /// Record a clock-in or clock-out punch
    Punch {
        /// Date of the punch (DD/MM/YYYY)
        date: String,

        /// Time of the punch (HH:MM)
        time: String,

        #[arg(long = "desc", help = "Free-text description")]
        description: Option<String>,

        #[arg(long = "location", help = "Where the punch happened")]
        location: Option<String>,

        #[arg(long = "nsr", help = "Receipt sequence number printed by the time clock")]
        nsr: Option<String>,

        #[arg(long = "photo", help = "Path or reference of a receipt photo")]
        photo: Option<String>,
    },

    /// Record an absence or a manual balance adjustment
    #[command(group(
        ArgGroup::new("amount")
            .required(true)
            .args(["minutes", "full_day"]),
    ))]
    Absence {
        /// Date of the absence (DD/MM/YYYY)
        date: String,

        /// day-off, medical-leave, adjustment, or any custom name
        #[arg(long = "kind", default_value = "day-off")]
        kind: String,

        /// Duration in minutes (adjustments may be negative)
        #[arg(long = "minutes", allow_hyphen_values = true)]
        minutes: Option<i64>,

        /// Credit the whole contractual day
        #[arg(long = "full-day")]
        full_day: bool,

        #[arg(long = "desc", help = "Free-text description")]
        description: Option<String>,
    },

    /// Change the time of a punch (or the minutes of an absence)
    Edit {
        /// Record id
        id: i64,

        /// New punch time (HH:MM)
        #[arg(long = "time", conflicts_with = "minutes")]
        time: Option<String>,

        /// New duration in minutes
        #[arg(long = "minutes", allow_hyphen_values = true)]
        minutes: Option<i64>,
    },

    /// Delete a record by id, or every record of a date
    #[command(group(
        ArgGroup::new("target")
            .required(true)
            .args(["id", "date"]),
    ))]
    Del {
        /// Record id
        id: Option<i64>,

        #[arg(long = "date", help = "Delete all records of this date (DD/MM/YYYY)")]
        date: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show punches, intervals, worked time and balance of one day
    Day {
        /// Date (DD/MM/YYYY); defaults to today
        date: Option<String>,
    },

    /// Show the daily balances and totals of one month
    Month {
        /// Month (MM/YYYY); defaults to the current month
        month: Option<String>,
    },

    /// Cumulative time bank over a range of months
    Bank {
        #[arg(long = "from", help = "First month (MM/YYYY)")]
        from: String,

        #[arg(long = "to", help = "Last month (MM/YYYY); defaults to the current month")]
        to: Option<String>,
    },

    /// Export a month's daily balances (or its raw records)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "MM/YYYY", help = "Month to export; defaults to the current month")]
        month: Option<String>,

        #[arg(long, short = 'r', help = "Export raw records instead of balances")]
        records: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
