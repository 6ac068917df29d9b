//! OxiDoc CLI - document stream encoder
//!
//! Compresses files into `/FlateDecode` or `/LZWDecode` streams ready to be
//! embedded in a document.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{FilterArg, cmd_checksum, cmd_encode, cmd_filters};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxidoc")]
#[command(author, version, about = "Pure Rust document stream encoder")]
#[command(long_about = "
OxiDoc compresses raw stream contents with the filters document readers
understand: FlateDecode (zlib) and LZWDecode (early change).

Examples:
  oxidoc encode page1.txt page2.txt
  oxidoc encode -f lzw -o out/ content.bin
  oxidoc encode --json *.txt
  oxidoc checksum page1.txt
  oxidoc filters
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode files into compressed streams
    #[command(alias = "e")]
    Encode {
        /// Files to encode
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Stream filter
        #[arg(short, long, value_enum, default_value = "flate")]
        filter: FilterArg,

        /// Output directory (defaults to each input's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output statistics as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the Adler-32 checksum of files
    #[command(alias = "c")]
    Checksum {
        /// Files to checksum
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List supported stream filters
    Filters,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            files,
            filter,
            output,
            json,
            progress,
            verbose,
        } => cmd_encode(
            &files,
            filter.into(),
            output.as_deref(),
            json,
            progress,
            verbose,
        ),
        Commands::Checksum { files, verbose } => cmd_checksum(&files, verbose),
        Commands::Filters => cmd_filters(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
