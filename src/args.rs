use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "steam-tag-snagger")]
#[command(about = "Reads Steam store URLs and prints each game's name, developers, publishers and tags")]
#[command(version)]
pub struct Args {
    /// Request timeout in seconds (overrides the config file)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of the text block
    #[arg(long)]
    pub json: bool,
}
