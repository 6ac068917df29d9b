//! FlateDecode stream encoder.
//!
//! Output layout (RFC 1950 wrapping one RFC 1951 block):
//!
//! ```text
//! +---+---+=======================+---+---+---+---+
//! |CMF|FLG| fixed-Huffman block   |    ADLER32    |
//! +---+---+=======================+---+---+---+---+
//! ```
//!
//! The block is always final (`BFINAL = 1`) and always uses the fixed codes
//! (`BTYPE = 01`). The encoder never splits its input across blocks.

use crate::matcher::{Lz77Token, MatchFinder};
use crate::tables::{
    END_OF_BLOCK, FixedCodes, HuffmanCode, distance_symbol, fixed_codes, length_symbol,
};
use oxidoc_core::bitstream::BitWriter;
use oxidoc_core::checksum::Adler32;
use oxidoc_core::filter::StreamFilter;
use oxidoc_core::traits::StreamEncoder;

/// zlib header: deflate with a 32KB window, default compression level.
pub const ZLIB_HEADER: [u8; 2] = [0x78, 0x9C];

/// Block header type for fixed Huffman codes.
const BTYPE_FIXED: u32 = 0b01;

/// Fixed-Huffman zlib encoder.
///
/// The encoder owns a [`MatchFinder`] that is cleared at the start of every
/// call, so one instance can be reused for any number of independent
/// streams.
#[derive(Debug, Default)]
pub struct FlateEncoder {
    matcher: MatchFinder,
}

impl FlateEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self {
            matcher: MatchFinder::new(),
        }
    }

    /// Compress `source` and append the zlib stream to `dest`.
    pub fn encode_into(&mut self, source: &[u8], dest: &mut Vec<u8>) {
        let start = dest.len();
        let codes = fixed_codes();

        dest.extend_from_slice(&ZLIB_HEADER);

        let mut writer = BitWriter::new(dest);
        writer.write_bit(true); // BFINAL
        writer.write_bits(BTYPE_FIXED, 2);

        for token in self.matcher.tokens(source) {
            Self::write_token(&mut writer, codes, token);
        }

        write_code(&mut writer, codes.code_of(END_OF_BLOCK));
        writer.finish();

        let mut adler = Adler32::new();
        adler.update(source);
        dest.extend_from_slice(&adler.trailer());

        log::debug!(
            "flate: encoded {} bytes into {} bytes",
            source.len(),
            dest.len() - start
        );
    }

    /// Compress `source` into a new buffer.
    pub fn compress_to_vec(&mut self, source: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(source.len() / 2 + 16);
        self.encode_into(source, &mut output);
        output
    }

    fn write_token(writer: &mut BitWriter<'_>, codes: &FixedCodes, token: Lz77Token) {
        match token {
            Lz77Token::Literal(byte) => write_code(writer, codes.code_of(u16::from(byte))),
            Lz77Token::Match { length, distance } => {
                let len = length_symbol(length);
                write_code(writer, codes.code_of(len.symbol));
                writer.write_bits(u32::from(len.extra_value), len.extra_bits);

                let dist = distance_symbol(distance);
                write_code(writer, codes.distance_code_of(dist.symbol));
                writer.write_bits(u32::from(dist.extra_value), dist.extra_bits);
            }
        }
    }
}

#[inline]
fn write_code(writer: &mut BitWriter<'_>, code: HuffmanCode) {
    writer.write_bits(u32::from(code.bits), code.width);
}

impl StreamEncoder for FlateEncoder {
    fn filter(&self) -> StreamFilter {
        StreamFilter::Flate
    }

    fn encode_into(&mut self, source: &[u8], dest: &mut Vec<u8>) {
        FlateEncoder::encode_into(self, source, dest);
    }
}

/// Compress data into a zlib stream suitable for `/FlateDecode`.
pub fn encode(source: &[u8]) -> Vec<u8> {
    FlateEncoder::new().compress_to_vec(source)
}
