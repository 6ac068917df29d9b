//! Utility functions for the CLI.

use crate::commands::encode::EncodedFile;
use indicatif::{ProgressBar, ProgressStyle};
use oxidoc_core::StreamFilter;
use std::path::{Path, PathBuf};

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");

    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb
}

/// Where the encoded stream for `input` is written: `<name>.<ext>` next to
/// the input, or inside `output_dir` when given.
pub fn output_path(input: &Path, output_dir: Option<&Path>, filter: StreamFilter) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "stream".into());
    name.push(".");
    name.push(filter.extension());

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Print encoded files in a formatted table.
pub fn print_stats(files: &[EncodedFile]) {
    println!(
        "{:>10} {:>10} {:>7} {:>12}  Name",
        "Size", "Encoded", "Ratio", "Filter"
    );
    println!("{}", "-".repeat(60));

    let mut total_in = 0usize;
    let mut total_out = 0usize;

    for file in files {
        println!(
            "{:>10} {:>10} {:>6.1}% {:>12}  {}",
            file.stats.input_bytes,
            file.stats.output_bytes,
            file.stats.ratio * 100.0,
            file.stats.filter,
            file.output
        );
        total_in += file.stats.input_bytes;
        total_out += file.stats.output_bytes;
    }

    println!("{}", "-".repeat(60));
    let total_ratio = if total_in > 0 {
        total_out as f64 / total_in as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "{:>10} {:>10} {:>6.1}%               {} files",
        total_in,
        total_out,
        total_ratio,
        files.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_input() {
        let path = output_path(Path::new("docs/page1.txt"), None, StreamFilter::Flate);
        assert_eq!(path, PathBuf::from("docs/page1.txt.flate"));
    }

    #[test]
    fn test_output_path_in_directory() {
        let path = output_path(
            Path::new("docs/page1.txt"),
            Some(Path::new("out")),
            StreamFilter::Lzw,
        );
        assert_eq!(path, PathBuf::from("out/page1.txt.lzw"));
    }
}
