//! # OxiDoc Stream
//!
//! Unified entry point over the OxiDoc codecs: pick a [`StreamFilter`],
//! encode one buffer or a batch of them, and get back the bytes together
//! with what a document writer needs to describe the stream.
//!
//! ## Example
//!
//! ```rust
//! use oxidoc_core::StreamFilter;
//! use oxidoc_stream::encode_stream;
//!
//! let stream = encode_stream(StreamFilter::Flate, b"BT /F1 12 Tf (Hi) Tj ET");
//! assert_eq!(stream.raw_len, 23);
//! assert!(stream.dictionary().contains("/Filter /FlateDecode"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod batch;
mod stream;

pub use batch::encode_batch;
pub use oxidoc_core::{OxiDocError, Result, StreamEncoder, StreamFilter};
pub use stream::{EncodeStats, EncodedStream};

use oxidoc_flate::FlateEncoder;
use oxidoc_lzw::LzwEncoder;

/// Create a fresh encoder for `filter`.
pub fn encoder_for(filter: StreamFilter) -> Box<dyn StreamEncoder + Send> {
    match filter {
        StreamFilter::Flate => Box::new(FlateEncoder::new()),
        StreamFilter::Lzw => Box::new(LzwEncoder::new()),
    }
}

/// Encode one buffer with `filter`.
pub fn encode_stream(filter: StreamFilter, source: &[u8]) -> EncodedStream {
    let data = encoder_for(filter).encode(source);
    EncodedStream::new(filter, source.len(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_for_reports_filter() {
        for filter in StreamFilter::ALL {
            assert_eq!(encoder_for(filter).filter(), filter);
        }
    }

    #[test]
    fn test_encode_stream_matches_codec() {
        let source = b"q 1 0 0 1 0 0 cm /Im0 Do Q";
        assert_eq!(
            encode_stream(StreamFilter::Flate, source).data,
            oxidoc_flate::encode(source)
        );
        assert_eq!(
            encode_stream(StreamFilter::Lzw, source).data,
            oxidoc_lzw::encode(source)
        );
    }
}
