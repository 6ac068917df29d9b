//! Batch encoding of independent streams.
//!
//! With the `parallel` feature (on by default) the sources are spread over
//! the rayon thread pool, each worker running its own encoder instance.
//! Output order always matches input order.

use crate::encode_stream;
use crate::stream::EncodedStream;
use oxidoc_core::{OxiDocError, Result, StreamFilter};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Encode every buffer in `sources` with `filter`.
///
/// Returns [`OxiDocError::EmptyBatch`] when `sources` is empty.
pub fn encode_batch(filter: StreamFilter, sources: &[&[u8]]) -> Result<Vec<EncodedStream>> {
    if sources.is_empty() {
        return Err(OxiDocError::EmptyBatch);
    }

    #[cfg(feature = "parallel")]
    let streams: Vec<EncodedStream> = sources
        .par_iter()
        .map(|source| encode_stream(filter, source))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let streams: Vec<EncodedStream> = sources
        .iter()
        .map(|source| encode_stream(filter, source))
        .collect();

    log::debug!("batch: encoded {} streams with {}", streams.len(), filter);

    Ok(streams)
}
