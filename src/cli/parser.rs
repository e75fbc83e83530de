use crate::export::ExportFormat;
use crate::models::EventSource;
use clap::{Parser, Subcommand};

/// Command-line interface definition for flinta
#[derive(Parser)]
#[command(
    name = "flinta",
    version = env!("CARGO_PKG_VERSION"),
    about = "FLINTA Space events: keep the community event list and render it as a looping carousel",
    long_about = None
)]
pub struct Cli {
    /// Override the events file path (useful for tests or a custom list)
    #[arg(global = true, long = "events-file", value_name = "FILE")]
    pub events_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Verbose diagnostic logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the events file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
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

    /// Submit a new event (all four fields are required)
    Add {
        /// Event title
        #[arg(long)]
        title: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Event address
        #[arg(long)]
        address: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Record the event as an official one instead of user-submitted
        #[arg(long)]
        official: bool,
    },

    /// List events in file order
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY            → year range           (e.g. "2024:2025")
        /// - YYYY-MM:YYYY-MM      → month range          (e.g. "2025-06:2025-08")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range           (e.g. "2025-06-01:2025-06-10")
        ///
        /// Special value:
        /// - all                   → every event (default)
        #[arg(long, short)]
        period: Option<String>,

        /// Only events of this source (official, user)
        #[arg(long)]
        source: Option<EventSource>,
    },

    /// Render the event carousel to an HTML file
    Render {
        /// Output file (default: `carousel_file` from the configuration)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Wrap the fragment in a standalone HTML page
        #[arg(long)]
        page: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export events in various formats
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same syntax as `list --period`)
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Only events of this source (official, user)
        #[arg(long)]
        source: Option<EventSource>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the events file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,

        /// Overwrite destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
