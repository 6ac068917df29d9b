//! Adler-32 checksum (RFC 1950).
//!
//! The zlib trailer is the big-endian Adler-32 of the uncompressed input.

/// Largest prime smaller than 65536.
pub const ADLER_MOD: u32 = 65521;

/// Number of bytes that can be summed before the accumulators must be
/// reduced to stay within `u32`.
const NMAX: usize = 5552;

/// Adler-32 checksum calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Adler32 {
    /// Create a new Adler-32 calculator.
    pub fn new() -> Self {
        Self { a: 1, b: 0 }
    }

    /// Update the checksum with more data.
    pub fn update(&mut self, data: &[u8]) {
        let mut a = self.a;
        let mut b = self.b;

        for chunk in data.chunks(NMAX) {
            for &byte in chunk {
                a += u32::from(byte);
                b += a;
            }
            a %= ADLER_MOD;
            b %= ADLER_MOD;
        }

        self.a = a;
        self.b = b;
    }

    /// Finalize and return the checksum.
    pub fn finish(&self) -> u32 {
        (self.b << 16) | self.a
    }

    /// The checksum as the 4-byte big-endian trailer.
    pub fn trailer(&self) -> [u8; 4] {
        self.finish().to_be_bytes()
    }

    /// Compute Adler-32 checksum of data in one shot.
    pub fn checksum(data: &[u8]) -> u32 {
        let mut adler = Self::new();
        adler.update(data);
        adler.finish()
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}
