use clap::{Parser, Subcommand};

/// Command-line interface definition for dailypay
/// CLI application to track daily gig earnings with SQLite
#[derive(Parser)]
#[command(
    name = "dailypay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily gig earnings: net income after expenses and platform fees, goals and a health score",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user id instead of the signed-in one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Sign in: following commands act on this user's records
    Login {
        /// Stable user id (namespaces all stored records)
        #[arg(value_name = "ID")]
        id: String,

        /// Email shown in output
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out (stored records are kept)
    Logout,

    /// Record a day's earnings
    Add {
        /// Gross amount earned
        #[arg(long, short = 'g')]
        gross: String,

        /// Expenses for the day
        #[arg(long, short = 'e')]
        expenses: Option<String>,

        /// Platform fee in percent (0-100)
        #[arg(long, short = 'f')]
        fee: Option<String>,

        /// Hours worked (informational)
        #[arg(long)]
        hours: Option<String>,

        /// Work date (YYYY-MM-DD, default today)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Only show the resulting net income, do not save
        #[arg(long)]
        preview: bool,
    },

    /// Delete an entry by id
    Del {
        /// Entry id as shown by `list`
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List entries, newest first
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range (e.g. "2025-06:2025-08")
        ///
        /// Special value:
        /// - all                   → every entry (default)
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,
    },

    /// Show statistics and the health score
    Stats {
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the signed-in user's settings
    Settings {
        /// Currency symbol (e.g. $, €, £, ¥)
        #[arg(long)]
        currency: Option<String>,

        /// Estimated tax percent (display only)
        #[arg(long)]
        tax: Option<String>,

        /// Savings target percent of total net
        #[arg(long)]
        savings: Option<String>,

        /// Daily net income goal
        #[arg(long = "daily-goal")]
        daily_goal: Option<String>,

        /// light or dark
        #[arg(long)]
        theme: Option<String>,
    },

    /// Delete all entries of the signed-in user (settings are kept)
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
