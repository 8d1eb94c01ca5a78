use crate::config::Config;
use crate::core::stats::{Dataset, Field};
use crate::export::{ExportDataset, ExportFormat};
use crate::models::alert::Severity;
use crate::models::float::{FloatStatus, QcFlag};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for FloatChat
/// Terminal dashboard and scripted assistant for sample Argo float data
#[derive(Parser)]
#[command(
    name = "floatchat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore sample Argo float data: dashboard, statistics, exports and a chat assistant",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.floatchat/floatchat.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Skip the simulated response delay of the assistant
    #[arg(global = true, long = "no-delay")]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
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

    /// Show the overview: metrics, system status, alerts, regions, activity
    Dashboard {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// List the sample Argo floats
    Floats {
        #[arg(long, help = "Only floats in this region (exact name)")]
        region: Option<String>,

        #[arg(long, value_enum)]
        status: Option<FloatStatus>,

        #[arg(long, value_enum)]
        qc: Option<QcFlag>,
    },

    /// Regional summaries with trend and coverage
    Regions,

    /// Recent notifications, newest first
    Alerts {
        #[arg(long, short = 'n', help = "Show at most N alerts")]
        count: Option<usize>,

        #[arg(long, value_enum, help = "Only alerts of this severity")]
        severity: Option<Severity>,
    },

    /// Temperature / salinity / oxygen depth profile
    Profile,

    /// Caribbean station measurements with temperature bands and map position
    Measurements,

    /// Ocean dashboard: conditions per ocean or sea
    Oceans {
        #[arg(long, short = 's', help = "Filter by name or region (case-insensitive)")]
        search: Option<String>,

        #[arg(long = "watchlist", help = "Only watchlisted oceans")]
        watchlist: bool,

        #[arg(long = "show", value_name = "NAME", help = "Show the information card of one ocean")]
        show: Option<String>,
    },

    /// Compare two oceans (second minus first)
    Compare { first: String, second: String },

    /// Min / max / mean of a numeric field
    Stats {
        #[arg(long, value_enum, default_value = "measurements")]
        dataset: Dataset,

        #[arg(long, value_enum, default_value = "temperature")]
        field: Field,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Ask the assistant; without a message starts an interactive session
    Chat {
        /// Message to send (words are joined with spaces)
        message: Vec<String>,

        #[arg(long, help = "Print the reply as JSON")]
        json: bool,
    },

    /// Suggested questions and conversation starters
    Prompts,

    /// Export data to CSV, NetCDF (JSON), JSON, XLSX or PDF
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "oceans")]
        dataset: ExportDataset,

        #[arg(long, value_name = "FILE", help = "Absolute output path (default: export_dir)")]
        file: Option<String>,

        #[arg(long, short = 's', help = "Filter by name or region")]
        search: Option<String>,

        #[arg(long = "watchlist", help = "Only watchlisted oceans")]
        watchlist: bool,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },
}
