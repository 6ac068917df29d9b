//! Filters command implementation.

use oxidoc_core::StreamFilter;

fn describe(filter: StreamFilter) -> &'static str {
    match filter {
        StreamFilter::Flate => "zlib stream, one fixed-Huffman block, Adler-32 trailer",
        StreamFilter::Lzw => "9-12 bit LZW codes, MSB-first, early change",
    }
}

pub fn cmd_filters() -> Result<(), Box<dyn std::error::Error>> {
    println!("{:<14} {:<10} Description", "Filter", "Extension");
    println!("{}", "-".repeat(70));
    for filter in StreamFilter::ALL {
        let name = filter.to_string();
        let extension = format!(".{}", filter.extension());
        println!("{:<14} {:<10} {}", name, extension, describe(filter));
    }
    Ok(())
}
