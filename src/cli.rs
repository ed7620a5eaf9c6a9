use clap::Parser;
use std::path::PathBuf;

use crate::navigator::DEFAULT_MAX_HOPS;

#[derive(Parser, Debug)]
#[command(name = "philosophy-walk")]
#[command(about = "Follows first links on Wikipedia until reaching the Philosophy article")]
#[command(version)]
pub struct Cli {
    /// Article to start from, e.g. https://en.wikipedia.org/wiki/Rust_(programming_language)
    pub start_url: String,

    /// Give up after this many hops
    #[arg(long, default_value_t = DEFAULT_MAX_HOPS)]
    pub max_hops: usize,

    /// Pause between fetches, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Write the visited chain as a Graphviz DOT file
    #[arg(long)]
    pub export_dot: Option<PathBuf>,

    /// Write the visited chain, outcome and stats as JSON
    #[arg(long)]
    pub export_json: Option<PathBuf>,
}
