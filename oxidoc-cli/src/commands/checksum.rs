//! Checksum command implementation.

use oxidoc_core::Adler32;
use std::fs;
use std::path::PathBuf;

pub fn cmd_checksum(files: &[PathBuf], verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    for path in files {
        let data = fs::read(path)?;
        let checksum = Adler32::checksum(&data);

        if verbose {
            println!("{:08x}  {}  ({} bytes)", checksum, path.display(), data.len());
        } else {
            println!("{:08x}  {}", checksum, path.display());
        }
    }

    Ok(())
}
