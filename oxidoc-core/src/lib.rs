//! # OxiDoc Core
//!
//! Core components shared by the OxiDoc stream codecs.
//!
//! - [`bitstream`]: bit packers (LSB-first for flate, MSB-first for LZW)
//! - [`checksum`]: Adler-32 running checksum
//! - [`filter`]: document stream filter identifiers
//! - [`traits`]: the [`StreamEncoder`] trait implemented by every codec
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Unified API                                         │
//! │     oxidoc-stream (filter dispatch, batches), CLI       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Flate (LZ77 + fixed Huffman), LZW (early change)    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitWriter/MsbBitWriter, Adler-32                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxidoc_core::bitstream::BitWriter;
//! use oxidoc_core::checksum::Adler32;
//!
//! let mut output = Vec::new();
//! let mut writer = BitWriter::new(&mut output);
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b11, 2);
//! writer.finish();
//! assert_eq!(output, vec![0b0001_1101]);
//!
//! assert_eq!(Adler32::checksum(b"Wikipedia"), 0x11E6_0398);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod checksum;
pub mod error;
pub mod filter;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitWriter, MsbBitWriter};
pub use checksum::Adler32;
pub use error::{OxiDocError, Result};
pub use filter::StreamFilter;
pub use traits::StreamEncoder;
