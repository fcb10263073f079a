use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pack", about = concat!("pack v", env!("CARGO_PKG_VERSION"), " - a packing list for your terminal"), version)]
pub struct Cli {
    /// Title shown above the list (overrides the config file)
    #[arg(long)]
    pub title: Option<String>,

    /// Config file (default: ./pack.toml when present)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}
