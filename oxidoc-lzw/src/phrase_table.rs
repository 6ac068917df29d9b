//! Open-addressed phrase table for the LZW encoder.
//!
//! Phrases are not copied: an entry records where the phrase occurs in the
//! source buffer (`offset`, `len`) together with its code. Single-byte
//! phrases never enter the table, their code is the byte value itself.

/// Number of slots: four per possible 12-bit code.
pub const SLOT_COUNT: usize = 4096 * 4;

const SLOT_MASK: usize = SLOT_COUNT - 1;

/// Phrase table with linear probing.
#[derive(Debug)]
pub struct PhraseTable {
    /// Source offset of each stored phrase.
    offsets: Vec<usize>,
    /// Phrase length per slot; 0 marks an empty slot.
    lengths: Vec<usize>,
    /// Code assigned to each stored phrase.
    codes: Vec<u16>,
    /// Number of occupied slots.
    occupied: usize,
}

impl PhraseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            offsets: vec![0; SLOT_COUNT],
            lengths: vec![0; SLOT_COUNT],
            codes: vec![0; SLOT_COUNT],
            occupied: 0,
        }
    }

    /// Remove every phrase.
    pub fn clear(&mut self) {
        self.lengths.fill(0);
        self.occupied = 0;
    }

    /// Number of stored phrases.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Whether the table holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// FNV-1a over the phrase bytes.
    #[inline]
    fn hash(phrase: &[u8]) -> usize {
        let mut h: u32 = 0x811C_9DC5;
        for &byte in phrase {
            h ^= u32::from(byte);
            h = h.wrapping_mul(0x0100_0193);
        }
        (h as usize) & SLOT_MASK
    }

    /// Look up `source[offset..offset + len]`, inserting it under
    /// `new_code` if absent.
    ///
    /// Returns the existing code, or `None` after inserting.
    pub fn find_or_insert(
        &mut self,
        source: &[u8],
        offset: usize,
        len: usize,
        new_code: u16,
    ) -> Option<u16> {
        debug_assert!(len >= 1 && offset + len <= source.len());

        if len == 1 {
            return Some(u16::from(source[offset]));
        }

        debug_assert!(self.occupied < SLOT_COUNT, "phrase table has no free slot");

        let phrase = &source[offset..offset + len];
        let mut slot = Self::hash(phrase);

        for _ in 0..SLOT_COUNT {
            let stored_len = self.lengths[slot];
            if stored_len == 0 {
                self.offsets[slot] = offset;
                self.lengths[slot] = len;
                self.codes[slot] = new_code;
                self.occupied += 1;
                return None;
            }

            if stored_len == len {
                let stored = self.offsets[slot];
                if &source[stored..stored + len] == phrase {
                    return Some(self.codes[slot]);
                }
            }

            slot = (slot + 1) & SLOT_MASK;
        }

        // Unreachable while the table has a free slot.
        None
    }
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::new()
    }
}
