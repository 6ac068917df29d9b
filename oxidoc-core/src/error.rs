//! Error types for OxiDoc operations.
//!
//! The codecs themselves are total functions over byte slices and never
//! fail. Errors only arise at the edges: parsing filter names, batch
//! requests, and the file I/O performed by callers such as the CLI.

use std::io;
use thiserror::Error;

/// The main error type for OxiDoc operations.
#[derive(Debug, Error)]
pub enum OxiDocError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stream filter name that no codec implements.
    #[error("Unknown stream filter: {name}")]
    UnknownFilter {
        /// The name as given by the caller.
        name: String,
    },

    /// A batch operation was given no input buffers.
    #[error("Batch contains no streams to encode")]
    EmptyBatch,
}

/// Result type alias for OxiDoc operations.
pub type Result<T> = std::result::Result<T, OxiDocError>;

impl OxiDocError {
    /// Create an unknown filter error.
    pub fn unknown_filter(name: impl Into<String>) -> Self {
        Self::UnknownFilter { name: name.into() }
    }
}
