//! Bit-level packing for compressed streams.
//!
//! Both writers append to a caller-owned `Vec<u8>` and never revisit bytes
//! once they have been pushed. They differ only in where each code lands
//! inside the accumulator:
//!
//! - [`BitWriter`] packs LSB-first, as DEFLATE requires for every field.
//!   Huffman codes must therefore be bit-reversed by the caller before
//!   they are written.
//! - [`MsbBitWriter`] packs MSB-first, the bit order of `LZWDecode`.
//!
//! A trailing partial byte is zero-padded when the writer is finished (or
//! dropped).
//!
//! # Example
//!
//! ```
//! use oxidoc_core::bitstream::{BitWriter, MsbBitWriter};
//!
//! let mut lsb = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut lsb);
//!     writer.write_bits(0b1, 1);
//!     writer.write_bits(0b01, 2);
//! }
//! assert_eq!(lsb, vec![0b0000_0011]);
//!
//! let mut msb = Vec::new();
//! {
//!     let mut writer = MsbBitWriter::new(&mut msb);
//!     writer.write_bits(256, 9);
//! }
//! assert_eq!(msb, vec![0x80, 0x00]);
//! ```

/// An LSB-first bit writer appending to a byte vector.
///
/// `BitWriter` accumulates bits in a 64-bit buffer and pushes every
/// complete byte to the output as soon as it is available.
#[derive(Debug)]
pub struct BitWriter<'a> {
    /// Destination buffer.
    output: &'a mut Vec<u8>,
    /// Bit buffer (LSB-first).
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<'a> BitWriter<'a> {
    /// Create a new `BitWriter` appending to `output`.
    pub fn new(output: &'a mut Vec<u8>) -> Self {
        Self {
            output,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Number of bits waiting for a complete byte.
    pub fn pending_bits(&self) -> u8 {
        self.bits_in_buffer
    }

    /// Push every complete byte to the output.
    #[inline]
    fn flush_bytes(&mut self) {
        while self.bits_in_buffer >= 8 {
            self.output.push((self.buffer & 0xFF) as u8);
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }
    }

    /// Write up to 32 bits to the stream.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write, lowest bit first
    /// * `count` - Number of bits to write (0-32)
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        if count == 0 {
            return;
        }

        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count).wrapping_sub(1)
        };

        self.buffer |= u64::from(value & mask) << self.bits_in_buffer;
        self.bits_in_buffer += count;
        self.total_bits_written += u64::from(count);

        self.flush_bytes();
    }

    /// Write a single bit.
    #[inline(always)]
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(u32::from(bit), 1);
    }

    /// Zero-pad any partial byte and push it.
    fn pad_to_byte(&mut self) {
        if self.bits_in_buffer > 0 {
            self.output.push((self.buffer & 0xFF) as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Finish the stream, zero-padding the final partial byte.
    ///
    /// Returns the total number of bits written, excluding padding.
    pub fn finish(mut self) -> u64 {
        self.pad_to_byte();
        self.total_bits_written
    }
}

impl Drop for BitWriter<'_> {
    fn drop(&mut self) {
        self.pad_to_byte();
    }
}

/// An MSB-first bit writer appending to a byte vector.
///
/// Each code is placed below the bits already pending, so the first code
/// written occupies the most significant bits of the first byte.
#[derive(Debug)]
pub struct MsbBitWriter<'a> {
    /// Destination buffer.
    output: &'a mut Vec<u8>,
    /// Bit buffer (MSB-first, valid bits in the low end).
    buffer: u32,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<'a> MsbBitWriter<'a> {
    /// Create a new MSB bit writer appending to `output`.
    pub fn new(output: &'a mut Vec<u8>) -> Self {
        Self {
            output,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write up to 16 bits to the stream (MSB-first).
    #[inline]
    pub fn write_bits(&mut self, value: u16, count: u8) {
        debug_assert!(
            (1..=16).contains(&count),
            "MSB writer takes 1-16 bits, got {}",
            count
        );

        self.buffer = (self.buffer << count) | (u32::from(value) & ((1u32 << count) - 1));
        self.bits_in_buffer += count;
        self.total_bits_written += u64::from(count);

        while self.bits_in_buffer >= 8 {
            self.output.push((self.buffer >> (self.bits_in_buffer - 8)) as u8);
            self.bits_in_buffer -= 8;
        }
    }

    /// Zero-pad any partial byte and push it.
    fn pad_to_byte(&mut self) {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << padding) as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Finish the stream, zero-padding the final partial byte.
    ///
    /// Returns the total number of bits written, excluding padding.
    pub fn finish(mut self) -> u64 {
        self.pad_to_byte();
        self.total_bits_written
    }
}

impl Drop for MsbBitWriter<'_> {
    fn drop(&mut self) {
        self.pad_to_byte();
    }
}
