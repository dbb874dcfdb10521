use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "isbnscan")]
#[command(about = "Look up books by ISBN and keep a history of your scans", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up an ISBN and record the scan
    #[command(alias = "l")]
    Lookup {
        /// The ISBN to look up
        isbn: String,

        /// Show the result without adding it to the history
        #[arg(long)]
        no_record: bool,
    },

    /// List scanned ISBNs, most recent first
    #[command(alias = "ls")]
    List {
        /// Show book details for every scan
        #[arg(short, long)]
        long: bool,

        /// Print the history as JSON
        #[arg(long, conflicts_with = "long")]
        json: bool,
    },

    /// Import scans from a JSON file (imported entries win over existing ones)
    Import { file: PathBuf },

    /// Export scans to isbn-scans-<timestamp>.json
    Export {
        /// Output directory (defaults to config `export_dir`, then the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Remove every scan from the history
    Clear,

    /// Merge the remote mirror's scans into the local history
    Pull,

    /// Replace the remote mirror's scans with the local history
    Push,

    /// Get or set configuration
    Config {
        /// Configuration key (lookup_url, remote_url, export_dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
