use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "found-files")]
#[command(about = "Catalog of discovered files keyed by source, path and content hash", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./Config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog database, overriding the configured path
    #[arg(long, global = true)]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the catalog table if it does not exist
    Init,
    /// Insert or refresh the entry for one file version
    Record(RecordArgs),
    /// Show the latest entry stored at a path
    Show(LookupArgs),
    /// List every content version stored at a path
    History(LookupArgs),
    /// Print catalog row counts
    Stats,
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// File path within the source
    pub path: String,
    /// Content checksum (MD5) of the file
    #[arg(long)]
    pub hash: String,
    /// Size in bytes
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub size: i64,
    /// Source identifier (defaults to the configured source)
    #[arg(long)]
    pub source: Option<String>,
    /// Modification time, RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub modified: Option<DateTime<Utc>>,
    #[arg(long = "type", default_value = "")]
    pub file_type: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub label: String,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// File path within the source
    pub path: String,
    /// Source identifier (defaults to the configured source)
    #[arg(long)]
    pub source: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", value, e))
}
