//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render an image file or URL as ASCII art
#[derive(Parser, Debug)]
#[command(name = "image-to-ascii")]
#[command(version, about = "Render an image as ASCII art", long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
#[command(after_help = "EXAMPLES:
    image-to-ascii photo.jpg
    image-to-ascii -W 4 -H 8 --reverse photo.png
    image-to-ascii https://example.com/logo.png -o logo.txt")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file path or http(s) URL
    #[arg(required = true)]
    pub image: Option<String>,

    /// Width of each pixel chunk, one character per chunk (default: 10)
    #[arg(short = 'W', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_width: Option<u32>,

    /// Height of each pixel chunk, one line per chunk row (default: 20)
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_height: Option<u32>,

    /// Reverse the ramp (sparse glyphs for dark areas, for dark terminals)
    #[arg(short, long)]
    pub reverse: bool,

    /// Write the art to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// HTTP timeout in seconds for URL sources
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Config file path
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
    /// Create default config file
    Init {
        /// Where to write the file (default: the standard config path)
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}
