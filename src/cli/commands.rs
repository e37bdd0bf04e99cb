//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "In-memory diary with an interactive menu", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "DIARY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty diary instead of the sample authors and entries
    #[arg(long)]
    pub no_sample_data: bool,

    /// Log filter used when RUST_LOG is unset (e.g. warn, debug)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
