//! LZW code-space parameters.

/// LZW code-space parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Code width at the start of every epoch.
    pub min_bits: u8,
    /// Widest code the stream may use.
    pub max_bits: u8,
}

impl LzwConfig {
    /// `LZWDecode` with `EarlyChange = 1`.
    ///
    /// - MSB-first bit order
    /// - 9-12 bit codes, widened as soon as the next code no longer fits
    /// - Clear code first, and again whenever the next code reaches 4095
    pub const PDF: Self = Self {
        min_bits: 9,
        max_bits: 12,
    };

    /// The clear (reset) code: 256.
    pub fn clear_code(&self) -> u16 {
        1 << (self.min_bits - 1)
    }

    /// The end-of-data code: 257.
    pub fn eoi_code(&self) -> u16 {
        self.clear_code() + 1
    }

    /// The first code assigned to a multi-byte phrase: 258.
    pub fn first_code(&self) -> u16 {
        self.eoi_code() + 1
    }

    /// The largest code representable at `max_bits`: 4095.
    pub fn max_code(&self) -> u16 {
        (1 << self.max_bits) - 1
    }

    /// When `next_code` reaches this value the table is cleared.
    ///
    /// One below `1 << max_bits`: readers register phrases one code behind
    /// the writer and must still have a free slot when the clear arrives.
    pub fn reset_threshold(&self) -> u16 {
        self.max_code()
    }

    /// Code width needed while `next_code` is the next unassigned code.
    pub fn width_for(&self, next_code: u16) -> u8 {
        let mut bits = self.min_bits;
        while bits < self.max_bits && u32::from(next_code) >= 1u32 << bits {
            bits += 1;
        }
        bits
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::PDF
    }
}
