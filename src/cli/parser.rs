use crate::core::analyze::{PeriodFilter, SortKey};
use crate::export::ExportFormat;
use crate::models::periodicity::Periodicity;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabits
/// CLI application to track daily and weekly habits with SQLite
#[derive(Parser)]
#[command(
    name = "rhabits",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracker CLI: check-off daily and weekly habits and analyze your streaks",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the reference clock (RFC 3339 or YYYY-MM-DD)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing configuration fields with default values")]
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
    },

    /// Create a new habit
    Add {
        /// Unique habit name
        name: String,

        #[arg(long = "spec", default_value = "", help = "Free-text description of the habit")]
        spec: String,

        #[arg(
            long = "period",
            value_enum,
            help = "Periodicity: daily or weekly (default from config)"
        )]
        period: Option<Periodicity>,
    },

    /// Check-off a habit for its running period
    Check {
        /// Habit name
        name: String,
    },

    /// Delete a habit and all its recorded periods
    Del {
        /// Habit name
        name: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List habits (missed periods are registered first)
    List,

    /// Overview analysis of all habits
    Analyze {
        #[arg(long = "period", value_enum, default_value = "all")]
        period: PeriodFilter,

        #[arg(long = "sort", value_enum, default_value = "name")]
        sort: SortKey,
    },

    /// Detailed analysis of one habit
    Details {
        /// Habit name
        name: String,
    },

    /// Create a random, read-only demo habit
    Demo {
        #[arg(long = "period", value_enum, default_value = "daily")]
        period: Periodicity,

        #[arg(long = "seed", help = "Seed for reproducible demo data")]
        seed: Option<u64>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export recorded periods
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "NAME", help = "Export a single habit")]
        habit: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
