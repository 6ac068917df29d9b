//! Core trait for stream encoders.

use crate::filter::StreamFilter;

/// A one-shot stream encoder.
///
/// Implementations consume one complete input buffer per call and append
/// one complete, self-contained compressed stream to the destination.
/// Every call starts from a clean state: encoding the same input twice
/// produces the same bytes, whatever was encoded in between.
pub trait StreamEncoder {
    /// The filter a reader must apply to decode this encoder's output.
    fn filter(&self) -> StreamFilter;

    /// Compress `source`, appending the stream to `dest`.
    ///
    /// Existing contents of `dest` are left untouched.
    fn encode_into(&mut self, source: &[u8], dest: &mut Vec<u8>);

    /// Compress `source` into a freshly allocated buffer.
    fn encode(&mut self, source: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(source.len() / 2 + 16);
        self.encode_into(source, &mut output);
        output
    }
}
