//! Fixed Huffman code tables for DEFLATE (RFC 1951 Section 3.2.6).
//!
//! The fixed literal/length code assigns:
//!
//! | Symbols  | Width | First code  |
//! |----------|-------|-------------|
//! | 0-143    | 8     | `00110000`  |
//! | 144-255  | 9     | `110010000` |
//! | 256-279  | 7     | `0000000`   |
//! | 280-287  | 8     | `11000000`  |
//!
//! Distance codes 0-29 are plain 5-bit values.
//!
//! Huffman codes are defined most-significant-bit first, but every other
//! DEFLATE field is packed LSB-first. The tables therefore store each code
//! already bit-reversed so it can go straight to the LSB-first packer.

use std::sync::OnceLock;

/// End-of-block symbol.
pub const END_OF_BLOCK: u16 = 256;

/// Number of symbols in the fixed literal/length alphabet.
pub const LITLEN_SYMBOLS: usize = 288;

/// Number of symbols in the distance alphabet.
pub const DISTANCE_SYMBOLS: usize = 30;

/// Length code base values for symbols 257-285.
pub const LENGTH_BASE: [u16; 29] = [
    3, 4, 5, 6, 7, 8, 9, 10, // 257-264: 0 extra bits
    11, 13, 15, 17, // 265-268: 1 extra bit
    19, 23, 27, 31, // 269-272: 2 extra bits
    35, 43, 51, 59, // 273-276: 3 extra bits
    67, 83, 99, 115, // 277-280: 4 extra bits
    131, 163, 195, 227, // 281-284: 5 extra bits
    258, // 285: 0 extra bits
];

/// Number of extra bits for length symbols 257-285.
pub const LENGTH_EXTRA_BITS: [u8; 29] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0,
];

/// Distance code base values for codes 0-29.
pub const DISTANCE_BASE: [u16; 30] = [
    1, 2, 3, 4, 5, 7, 9, 13, 17, 25, 33, 49, 65, 97, 129, 193, 257, 385, 513, 769, 1025, 1537,
    2049, 3073, 4097, 6145, 8193, 12289, 16385, 24577,
];

/// Number of extra bits for distance codes 0-29.
pub const DISTANCE_EXTRA_BITS: [u8; 30] = [
    0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13,
    13,
];

/// A Huffman code ready for LSB-first packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HuffmanCode {
    /// Code bits, already reversed.
    pub bits: u16,
    /// Code width in bits.
    pub width: u8,
}

/// A length or distance split into its alphabet symbol and raw extra bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucketed {
    /// Alphabet symbol (257-285 for lengths, 0-29 for distances).
    pub symbol: u16,
    /// Number of extra bits following the symbol.
    pub extra_bits: u8,
    /// Offset from the bucket base, written in `extra_bits` bits.
    pub extra_value: u16,
}

/// The fixed literal/length and distance codes.
#[derive(Debug)]
pub struct FixedCodes {
    litlen: [HuffmanCode; LITLEN_SYMBOLS],
    distance: [HuffmanCode; DISTANCE_SYMBOLS],
}

impl FixedCodes {
    fn build() -> Self {
        // (first symbol, last symbol, width, first code)
        const RANGES: [(usize, usize, u8, u16); 4] = [
            (0, 143, 8, 0b0011_0000),
            (144, 255, 9, 0b1_1001_0000),
            (256, 279, 7, 0b000_0000),
            (280, 287, 8, 0b1100_0000),
        ];

        let mut litlen = [HuffmanCode::default(); LITLEN_SYMBOLS];
        for (first, last, width, base) in RANGES {
            for symbol in first..=last {
                let code = base + (symbol - first) as u16;
                litlen[symbol] = HuffmanCode {
                    bits: reverse_bits(code, width),
                    width,
                };
            }
        }

        let mut distance = [HuffmanCode::default(); DISTANCE_SYMBOLS];
        for (symbol, entry) in distance.iter_mut().enumerate() {
            *entry = HuffmanCode {
                bits: reverse_bits(symbol as u16, 5),
                width: 5,
            };
        }

        Self { litlen, distance }
    }

    /// Code for a literal/length symbol (0-287).
    #[inline]
    pub fn code_of(&self, symbol: u16) -> HuffmanCode {
        self.litlen[symbol as usize]
    }

    /// Code for a distance symbol (0-29).
    #[inline]
    pub fn distance_code_of(&self, symbol: u16) -> HuffmanCode {
        self.distance[symbol as usize]
    }
}

/// Get the fixed code tables.
///
/// The tables are built on first use and shared for the life of the process.
pub fn fixed_codes() -> &'static FixedCodes {
    static CODES: OnceLock<FixedCodes> = OnceLock::new();
    CODES.get_or_init(FixedCodes::build)
}

/// Reverse the low `width` bits of `value`.
pub fn reverse_bits(value: u16, width: u8) -> u16 {
    debug_assert!((1..=16).contains(&width));
    value.reverse_bits() >> (16 - width)
}

/// Split a match length (3-258) into its length symbol and extra bits.
pub fn length_symbol(length: u16) -> Bucketed {
    debug_assert!(
        (3..=258).contains(&length),
        "Length out of range: {}",
        length
    );

    let index = LENGTH_BASE.partition_point(|&base| base <= length) - 1;
    Bucketed {
        symbol: 257 + index as u16,
        extra_bits: LENGTH_EXTRA_BITS[index],
        extra_value: length - LENGTH_BASE[index],
    }
}

/// Split a match distance (1-32768) into its distance symbol and extra bits.
pub fn distance_symbol(distance: u16) -> Bucketed {
    debug_assert!(
        (1..=32768).contains(&distance),
        "Distance out of range: {}",
        distance
    );

    let index = DISTANCE_BASE.partition_point(|&base| base <= distance) - 1;
    Bucketed {
        symbol: index as u16,
        extra_bits: DISTANCE_EXTRA_BITS[index],
        extra_value: distance - DISTANCE_BASE[index],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_code_widths() {
        let codes = fixed_codes();
        assert_eq!(codes.code_of(0).width, 8);
        assert_eq!(codes.code_of(143).width, 8);
        assert_eq!(codes.code_of(144).width, 9);
        assert_eq!(codes.code_of(255).width, 9);
        assert_eq!(codes.code_of(END_OF_BLOCK).width, 7);
        assert_eq!(codes.code_of(279).width, 7);
        assert_eq!(codes.code_of(280).width, 8);
        assert_eq!(codes.code_of(287).width, 8);
        assert!((0..30).all(|d| codes.distance_code_of(d).width == 5));
    }

    #[test]
    fn test_fixed_code_patterns() {
        let codes = fixed_codes();
        // Values below are the natural (MSB-first) codes, reversed.
        assert_eq!(codes.code_of(0).bits, reverse_bits(0b0011_0000, 8));
        assert_eq!(codes.code_of(b'A' as u16).bits, reverse_bits(0x30 + 65, 8));
        assert_eq!(codes.code_of(144).bits, reverse_bits(0b1_1001_0000, 9));
        assert_eq!(codes.code_of(255).bits, 0b1_1111_1111);
        assert_eq!(codes.code_of(END_OF_BLOCK).bits, 0);
        assert_eq!(codes.code_of(257).bits, reverse_bits(1, 7));
        assert_eq!(codes.code_of(280).bits, reverse_bits(0b1100_0000, 8));
        assert_eq!(codes.distance_code_of(1).bits, 0b10000);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let codes = fixed_codes();
        let natural: Vec<(u16, u8)> = (0..LITLEN_SYMBOLS as u16)
            .map(|s| {
                let c = codes.code_of(s);
                (reverse_bits(c.bits, c.width), c.width)
            })
            .collect();

        for (i, &(a, wa)) in natural.iter().enumerate() {
            for &(b, wb) in natural.iter().skip(i + 1) {
                let w = wa.min(wb);
                assert_ne!(a >> (wa - w), b >> (wb - w), "prefix clash");
            }
        }
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(reverse_bits(0b101, 3), 0b101);
        assert_eq!(reverse_bits(0b1100, 4), 0b0011);
        assert_eq!(reverse_bits(0b10101010, 8), 0b01010101);
        assert_eq!(reverse_bits(0b1, 9), 0b1_0000_0000);
    }

    #[test]
    fn test_specific_lengths() {
        let b = |l| {
            let s = length_symbol(l);
            (s.symbol, s.extra_bits, s.extra_value)
        };
        assert_eq!(b(3), (257, 0, 0));
        assert_eq!(b(10), (264, 0, 0));
        assert_eq!(b(11), (265, 1, 0));
        assert_eq!(b(12), (265, 1, 1));
        assert_eq!(b(39), (273, 3, 4));
        assert_eq!(b(257), (284, 5, 30));
        assert_eq!(b(258), (285, 0, 0));
    }

    #[test]
    fn test_specific_distances() {
        let b = |d| {
            let s = distance_symbol(d);
            (s.symbol, s.extra_bits, s.extra_value)
        };
        assert_eq!(b(1), (0, 0, 0));
        assert_eq!(b(3), (2, 0, 0));
        assert_eq!(b(4), (3, 0, 0));
        assert_eq!(b(5), (4, 1, 0));
        assert_eq!(b(6), (4, 1, 1));
        assert_eq!(b(258), (16, 7, 1));
        assert_eq!(b(32768), (29, 13, 8191));
    }

    #[test]
    fn test_extra_values_fit_extra_bits() {
        for length in 3..=258u16 {
            let s = length_symbol(length);
            assert!(u32::from(s.extra_value) < (1u32 << s.extra_bits).max(1));
            assert_eq!(LENGTH_BASE[(s.symbol - 257) as usize] + s.extra_value, length);
        }
        for distance in 1..=32768u16 {
            let s = distance_symbol(distance);
            assert!(u32::from(s.extra_value) < (1u32 << s.extra_bits).max(1));
            assert_eq!(DISTANCE_BASE[s.symbol as usize] + s.extra_value, distance);
        }
    }
}
