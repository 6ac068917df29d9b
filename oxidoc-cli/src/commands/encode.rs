//! Encode command implementation.

use crate::utils::{create_progress_bar, output_path, print_stats};
use clap::ValueEnum;
use oxidoc_core::{OxiDocError, StreamFilter};
use oxidoc_stream::{EncodeStats, encode_stream};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Stream filter selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// FlateDecode (zlib, fixed Huffman codes)
    Flate,
    /// LZWDecode (9-12 bit codes, early change)
    Lzw,
}

impl From<FilterArg> for StreamFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Flate => StreamFilter::Flate,
            FilterArg::Lzw => StreamFilter::Lzw,
        }
    }
}

/// One encoded file.
#[derive(Debug, Serialize)]
pub struct EncodedFile {
    pub input: String,
    pub output: String,
    #[serde(flatten)]
    pub stats: EncodeStats,
}

fn encode_file(
    path: &Path,
    filter: StreamFilter,
    output_dir: Option<&Path>,
) -> Result<EncodedFile, OxiDocError> {
    let source = fs::read(path)?;
    let stream = encode_stream(filter, &source);
    let destination = output_path(path, output_dir, filter);
    fs::write(&destination, &stream.data)?;

    Ok(EncodedFile {
        input: path.display().to_string(),
        output: destination.display().to_string(),
        stats: stream.stats(),
    })
}

pub fn cmd_encode(
    files: &[PathBuf],
    filter: StreamFilter,
    output_dir: Option<&Path>,
    json: bool,
    progress: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)?;
    }

    if verbose && !json {
        println!("Encoding {} file(s) with {}", files.len(), filter);
    }

    let pb = create_progress_bar(files.len() as u64, progress && !json);

    let results: Vec<Result<EncodedFile, OxiDocError>> = files
        .par_iter()
        .map(|path| {
            let result = encode_file(path, filter, output_dir);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let mut encoded = Vec::with_capacity(results.len());
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(file) => {
                if verbose && !json {
                    println!("  {} -> {}", file.input, file.output);
                }
                encoded.push(file);
            }
            Err(e) => return Err(format!("{}: {}", path.display(), e).into()),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&encoded)?);
    } else {
        print_stats(&encoded);
    }

    Ok(())
}
