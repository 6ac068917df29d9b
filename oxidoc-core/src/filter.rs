//! Stream filter identifiers.
//!
//! A document stream compressed by one of the OxiDoc codecs is tagged with
//! the name of the filter a reader must apply to recover the raw bytes.

use crate::error::{OxiDocError, Result};
use std::fmt;
use std::str::FromStr;

/// Compression filter applied to a document stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamFilter {
    /// zlib-wrapped DEFLATE with fixed Huffman codes.
    Flate,
    /// Variable-width LZW with early change.
    Lzw,
}

impl StreamFilter {
    /// Every filter, in a stable order.
    pub const ALL: [StreamFilter; 2] = [StreamFilter::Flate, StreamFilter::Lzw];

    /// The filter name as written in a stream dictionary.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flate => "FlateDecode",
            Self::Lzw => "LZWDecode",
        }
    }

    /// Conventional file extension for a standalone encoded stream.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Flate => "flate",
            Self::Lzw => "lzw",
        }
    }
}

impl fmt::Display for StreamFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

impl FromStr for StreamFilter {
    type Err = OxiDocError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('/').to_ascii_lowercase();
        match name.as_str() {
            "flate" | "flatedecode" | "fl" => Ok(Self::Flate),
            "lzw" | "lzwdecode" => Ok(Self::Lzw),
            _ => Err(OxiDocError::unknown_filter(s)),
        }
    }
}
