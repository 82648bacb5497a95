use std::path::PathBuf;

use clap::Parser;

/// Main CLI application arguments
#[derive(Parser)]
#[clap(
    version,
    about = "Sticky notes on your terminal, stored as plain JSON files"
)]
pub struct Cli {
    /// Path to the notes directory
    #[clap(long, value_parser)]
    pub notes_dir: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,
}
