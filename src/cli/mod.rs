//! Command-line surface of the console

mod run;

pub use run::{build_console, run};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Batch upload console for the T24 integration backend
#[derive(Parser, Debug)]
#[command(name = "batch-console", version, about = "Batch upload console")]
pub struct Cli {
    /// Configuration file (default: config/console.yaml when present)
    #[arg(long, short = 'c', global = true, env = "BATCH_CONSOLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Batch list to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    /// Your uploads
    Mine,
    /// Batches waiting for validation
    Pending,
    /// Validated batches and their execution
    Validated,
}

/// Report export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Pdf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(long, short = 'u')]
        username: String,
        #[arg(long, short = 'p', env = "BATCH_CONSOLE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Drop the stored session
    Logout,

    /// Show who is logged in
    Whoami,

    /// List upload applications
    Apps,

    /// Show the CSV header expected by an application
    Fields {
        application: String,
        /// Header order, comma separated
        #[arg(long, value_delimiter = ',')]
        order: Vec<String>,
    },

    /// Preview a CSV file and upload it
    Upload {
        application: String,
        file: PathBuf,
        /// Show every row of the preview
        #[arg(long)]
        full: bool,
        /// Only preview, do not upload
        #[arg(long)]
        dry_run: bool,
    },

    /// List batches
    Batches {
        #[arg(long, value_enum, default_value = "mine")]
        list: ListKind,
    },

    /// Show the first rows of a batch
    Show { batch_id: String },

    /// Download a batch as CSV
    Download {
        batch_id: String,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Execution summary of a processed batch
    Summary {
        batch_id: String,
        /// Write the execution report CSV
        #[arg(long)]
        export: bool,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Delete an uploaded batch
    Delete {
        batch_id: String,
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Validate an uploaded batch
    Validate {
        batch_id: String,
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Processed batches over a date window
    Reports {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        inputter: Option<String>,
        #[arg(long)]
        validator: Option<String>,
        /// Search within the displayed page
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Export the filtered batches
        #[arg(long, value_enum)]
        export: Option<ReportFormat>,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Countries, departments and users
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Admin dashboard
    Admin {
        #[command(subcommand)]
        action: Option<AdminAction>,
        /// Logs of one batch only
        #[arg(long, global = true)]
        batch: Option<String>,
        /// Log level filter (INFO, WARN, ERROR)
        #[arg(long, global = true)]
        level: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    AddCountry {
        code: String,
        company_id: String,
    },
    DeleteCountry {
        code: String,
        #[arg(long, short = 'y')]
        yes: bool,
    },
    AddDepartment {
        code: String,
        description: String,
    },
    DeleteDepartment {
        code: i64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
    AddUser {
        username: String,
        #[arg(long, env = "BATCH_CONSOLE_NEW_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        country: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Flip a feature flag
    Toggle { key: String },
    /// Write the displayed processing logs as CSV
    ExportLogs {
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Refresh the dashboard until Ctrl-C
    Watch {
        /// Seconds between refreshes (default from configuration)
        #[arg(long)]
        interval: Option<u64>,
    },
}
