//! LZWDecode stream encoder.

use crate::config::LzwConfig;
use crate::phrase_table::PhraseTable;
use oxidoc_core::bitstream::MsbBitWriter;
use oxidoc_core::filter::StreamFilter;
use oxidoc_core::traits::StreamEncoder;

/// Code-space change observed while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzwEvent {
    /// Codes written after this point use `width` bits.
    Widen {
        /// Next unassigned code when the width changed.
        next_code: u16,
        /// New code width.
        width: u8,
    },
    /// A clear code was written and the table emptied.
    Reset {
        /// Next unassigned code when the clear was written.
        next_code: u16,
        /// Width the clear code was written at.
        width: u8,
    },
}

/// Summary of one encoding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LzwReport {
    /// Codes written, including clear and end-of-data codes.
    pub codes_written: usize,
    /// Table resets after the leading clear code.
    pub resets: usize,
    /// Width increases across all epochs.
    pub widenings: usize,
    /// Widest code written.
    pub max_width: u8,
    /// Widenings and resets in stream order.
    pub events: Vec<LzwEvent>,
}

impl LzwReport {
    fn record(&mut self, width: u8) {
        self.codes_written += 1;
        self.max_width = self.max_width.max(width);
    }
}

/// LZW encoder producing `EarlyChange = 1` streams.
#[derive(Debug)]
pub struct LzwEncoder {
    table: PhraseTable,
    config: LzwConfig,
}

impl LzwEncoder {
    /// Create an encoder with the [`LzwConfig::PDF`] code space.
    pub fn new() -> Self {
        Self {
            table: PhraseTable::new(),
            config: LzwConfig::PDF,
        }
    }

    /// The code space this encoder writes.
    pub fn config(&self) -> LzwConfig {
        self.config
    }

    /// Compress `source` and append the code stream to `dest`.
    pub fn encode_into(&mut self, source: &[u8], dest: &mut Vec<u8>) {
        self.encode_with_report(source, dest);
    }

    /// Compress `source` into a new buffer.
    pub fn compress_to_vec(&mut self, source: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(source.len() / 2 + 8);
        self.encode_into(source, &mut output);
        output
    }

    /// Compress `source` into `dest` and describe the code-space changes.
    ///
    /// The stream always starts with a clear code and ends with the
    /// end-of-data code. Between them, every phrase code is written at
    /// `width_for(next_code)` bits. When `next_code` reaches the reset
    /// threshold a clear code is written at the current width and the next
    /// epoch starts over at `min_bits`.
    pub fn encode_with_report(&mut self, source: &[u8], dest: &mut Vec<u8>) -> LzwReport {
        let start = dest.len();
        let config = self.config;
        let clear = config.clear_code();
        let first = config.first_code();
        let threshold = config.reset_threshold();

        let mut report = LzwReport::default();
        let mut writer = MsbBitWriter::new(dest);

        self.table.clear();
        let mut next_code = first;
        let mut width = config.min_bits;

        writer.write_bits(clear, width);
        report.record(width);

        let Some(&first_byte) = source.first() else {
            writer.write_bits(config.eoi_code(), width);
            report.record(width);
            writer.finish();
            return report;
        };

        let mut current = u16::from(first_byte);
        let mut phrase_start = 0usize;
        let mut phrase_len = 1usize;

        for (i, &byte) in source.iter().enumerate().skip(1) {
            if let Some(code) =
                self.table
                    .find_or_insert(source, phrase_start, phrase_len + 1, next_code)
            {
                current = code;
                phrase_len += 1;
                continue;
            }

            writer.write_bits(current, width);
            report.record(width);
            next_code += 1;
            debug_assert!(next_code <= threshold);

            if next_code == threshold {
                writer.write_bits(clear, width);
                report.record(width);
                report.resets += 1;
                report.events.push(LzwEvent::Reset { next_code, width });
                log::trace!(
                    "lzw: reset at offset {} ({} phrases, next code {})",
                    i,
                    self.table.len(),
                    next_code
                );

                self.table.clear();
                debug_assert!(self.table.is_empty());
                next_code = first;
                width = config.min_bits;
            } else {
                let needed = config.width_for(next_code);
                if needed > width {
                    width = needed;
                    report.widenings += 1;
                    report.events.push(LzwEvent::Widen { next_code, width });
                    log::trace!("lzw: {} bit codes from next code {}", width, next_code);
                }
            }

            current = u16::from(byte);
            phrase_start = i;
            phrase_len = 1;
        }

        writer.write_bits(current, width);
        report.record(width);

        // A reader registers one more phrase after the final code, which can
        // push it to the next width before it reads end-of-data.
        let eoi_width = config.width_for(next_code + 1);
        writer.write_bits(config.eoi_code(), eoi_width);
        report.record(eoi_width);
        writer.finish();

        log::debug!(
            "lzw: encoded {} bytes into {} bytes ({} codes, {} resets)",
            source.len(),
            dest.len() - start,
            report.codes_written,
            report.resets
        );

        report
    }
}

impl Default for LzwEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamEncoder for LzwEncoder {
    fn filter(&self) -> StreamFilter {
        StreamFilter::Lzw
    }

    fn encode_into(&mut self, source: &[u8], dest: &mut Vec<u8>) {
        LzwEncoder::encode_into(self, source, dest);
    }
}

/// Compress data into an LZW code stream suitable for `/LZWDecode`.
pub fn encode(source: &[u8]) -> Vec<u8> {
    LzwEncoder::new().compress_to_vec(source)
}
