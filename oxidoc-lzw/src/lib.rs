//! # OxiDoc LZW
//!
//! Pure Rust encoder for `/LZWDecode` document streams with the default
//! `EarlyChange = 1` parameter.
//!
//! ## Stream Layout
//!
//! - **MSB-first bit order**: codes are packed from the high bit down
//! - **9-12 bit codes**: the width grows as soon as the next code to be
//!   assigned no longer fits
//! - **Clear code first**: code 256 opens every stream, and is written
//!   again whenever the next code reaches 4095
//! - **EOD termination**: streams end with code 257
//!
//! Decompression is not provided.
//!
//! ## Example
//!
//! ```rust
//! use oxidoc_lzw::encode;
//!
//! let compressed = encode(b"TOBEORNOTTOBEORTOBEORNOT");
//! // The leading clear code sets the first bit.
//! assert_eq!(compressed[0] & 0x80, 0x80);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod encoder;
mod phrase_table;

pub use config::LzwConfig;
pub use encoder::{LzwEncoder, LzwEvent, LzwReport, encode};
