use std::path::PathBuf;

use clap::Parser;

/// Replay pointer and toggle events against an exhibit's drag box and
/// report the resulting arrangement.
#[derive(Parser, Debug)]
#[command(name = "exhibit-layout", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file with the initial arrangement. Defaults to all blocks shown.
    #[arg(long)]
    pub initial: Option<PathBuf>,

    /// JSON array of events to replay.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Container width in pixels.
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Container height in pixels.
    #[arg(long, default_value_t = 600.0)]
    pub height: f64,

    /// Append each save to this JSON-lines file instead of keeping it in memory.
    #[arg(long)]
    pub save_to: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a filter directive).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
