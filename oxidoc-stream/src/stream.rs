//! Encoded stream container.

use oxidoc_core::StreamFilter;
use serde::Serialize;

/// A compressed document stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedStream {
    /// Filter a reader applies to recover the raw bytes.
    pub filter: StreamFilter,
    /// Length of the uncompressed input.
    pub raw_len: usize,
    /// The compressed bytes.
    pub data: Vec<u8>,
}

/// Size statistics for one encoded stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodeStats {
    /// Filter name as written in the stream dictionary.
    pub filter: &'static str,
    /// Uncompressed size in bytes.
    pub input_bytes: usize,
    /// Compressed size in bytes.
    pub output_bytes: usize,
    /// `output_bytes / input_bytes`, or 0 for an empty input.
    pub ratio: f64,
}

impl EncodedStream {
    /// Wrap already-compressed bytes.
    pub fn new(filter: StreamFilter, raw_len: usize, data: Vec<u8>) -> Self {
        Self {
            filter,
            raw_len,
            data,
        }
    }

    /// Compressed length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the compressed stream holds no bytes. Never true for codec
    /// output, which always carries framing.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Stream dictionary entries describing this stream.
    pub fn dictionary(&self) -> String {
        format!("<< /Length {} /Filter {} >>", self.data.len(), self.filter)
    }

    /// Size statistics.
    pub fn stats(&self) -> EncodeStats {
        let ratio = if self.raw_len > 0 {
            self.data.len() as f64 / self.raw_len as f64
        } else {
            0.0
        };

        EncodeStats {
            filter: self.filter.name(),
            input_bytes: self.raw_len,
            output_bytes: self.data.len(),
            ratio,
        }
    }

    /// Consume the container, returning the compressed bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
