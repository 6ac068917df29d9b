//! # OxiDoc Flate
//!
//! Pure Rust encoder for `/FlateDecode` document streams: a zlib header,
//! one final DEFLATE block coded with the fixed Huffman tables, and the
//! Adler-32 trailer of the uncompressed input.
//!
//! ## Features
//!
//! - **Single-slot match finder**: one remembered position per 3-byte hash
//!   bucket, greedy extension up to 258 bytes, 32KB window
//! - **Fixed Huffman codes**: precomputed, bit-reversed tables built once
//! - **Total**: every input, including the empty one, yields a valid stream
//!
//! Dynamic Huffman blocks, block splitting and decompression are not
//! provided.
//!
//! ## Example
//!
//! ```rust
//! use oxidoc_flate::encode;
//!
//! let compressed = encode(b"Hello, World! Hello, World!");
//! assert_eq!(&compressed[..2], &[0x78, 0x9C]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod encoder;
pub mod matcher;
pub mod tables;

// Re-exports
pub use encoder::{FlateEncoder, ZLIB_HEADER, encode};
pub use matcher::{Lz77Token, MatchFinder};
