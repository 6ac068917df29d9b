//! Single-slot match finder.
//!
//! Each bucket of the hash table remembers only the most recent position
//! whose 3-byte prefix hashed there. A lookup always replaces the bucket
//! with the position being queried, so older occurrences of a prefix become
//! unreachable. Matches are extended greedily, one byte at a time, with no
//! lookahead.
//!
//! This is the single-slot match finder policy. It trades ratio for speed
//! and its output is part of the encoder's observable behavior: replacing it
//! with hash chains changes the produced streams.

/// Maximum back-reference distance (32KB window).
pub const WINDOW_SIZE: usize = 32768;

/// Minimum match length.
pub const MIN_MATCH: usize = 3;

/// Maximum match length.
pub const MAX_MATCH: usize = 258;

/// log2 of the number of hash buckets.
pub const HASH_BITS: u32 = 15;

/// Number of hash buckets.
const HASH_SIZE: usize = 1 << HASH_BITS;

/// Bucket marker for "no position seen yet".
const EMPTY: usize = usize::MAX;

/// A token produced by the match finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz77Token {
    /// A literal byte.
    Literal(u8),
    /// A back-reference to earlier input.
    Match {
        /// Number of bytes to copy (3-258).
        length: u16,
        /// Distance back from the current position (1-32768).
        distance: u16,
    },
}

impl Lz77Token {
    /// Number of input bytes this token covers.
    pub fn len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Match { length, .. } => *length as usize,
        }
    }

    /// Tokens always cover at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Single-slot hash table over 3-byte windows.
#[derive(Debug)]
pub struct MatchFinder {
    /// Most recent position per bucket.
    head: Vec<usize>,
}

impl MatchFinder {
    /// Create a match finder with an empty table.
    pub fn new() -> Self {
        Self {
            head: vec![EMPTY; HASH_SIZE],
        }
    }

    /// Forget every stored position.
    pub fn reset(&mut self) {
        self.head.fill(EMPTY);
    }

    /// Multiplicative hash of a 3-byte prefix.
    #[inline(always)]
    fn hash(b0: u8, b1: u8, b2: u8) -> usize {
        let key = (u32::from(b0) << 16) | (u32::from(b1) << 8) | u32::from(b2);
        (key.wrapping_mul(0x9E37_79B1) >> (32 - HASH_BITS)) as usize
    }

    /// Look for a back-reference at `pos` and record `pos` in the table.
    ///
    /// Requires at least [`MIN_MATCH`] bytes at `pos`. Returns
    /// `(length, distance)` when the previous occurrence of the prefix is
    /// inside the window and really matches.
    pub fn find(&mut self, source: &[u8], pos: usize) -> Option<(u16, u16)> {
        debug_assert!(pos + MIN_MATCH <= source.len());

        let bucket = Self::hash(source[pos], source[pos + 1], source[pos + 2]);
        let prev = std::mem::replace(&mut self.head[bucket], pos);

        if prev == EMPTY || prev >= pos {
            return None;
        }

        let distance = pos - prev;
        if distance > WINDOW_SIZE {
            return None;
        }

        // Reject hash collisions.
        if source[prev..prev + MIN_MATCH] != source[pos..pos + MIN_MATCH] {
            return None;
        }

        let max_len = (source.len() - pos).min(MAX_MATCH);
        let mut length = MIN_MATCH;
        while length < max_len && source[prev + length] == source[pos + length] {
            length += 1;
        }

        debug_assert!((MIN_MATCH..=MAX_MATCH).contains(&length));
        debug_assert!((1..=WINDOW_SIZE).contains(&distance) && distance <= pos);

        Some((length as u16, distance as u16))
    }

    /// Iterate over the tokens for `source`, starting from an empty table.
    pub fn tokens<'m, 's>(&'m mut self, source: &'s [u8]) -> Tokens<'m, 's> {
        self.reset();
        Tokens {
            finder: self,
            source,
            pos: 0,
        }
    }

    /// Tokenize `source` with a fresh match finder.
    pub fn tokenize(source: &[u8]) -> Vec<Lz77Token> {
        let mut finder = Self::new();
        finder.tokens(source).collect()
    }
}

impl Default for MatchFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy token stream over one input buffer.
///
/// While at least [`MIN_MATCH`] bytes remain, each position is offered to
/// the match finder; the last one or two bytes are always literals.
#[derive(Debug)]
pub struct Tokens<'m, 's> {
    finder: &'m mut MatchFinder,
    source: &'s [u8],
    pos: usize,
}

impl Tokens<'_, '_> {
    /// Current input position.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Tokens<'_, '_> {
    type Item = Lz77Token;

    fn next(&mut self) -> Option<Lz77Token> {
        let remaining = self.source.len().checked_sub(self.pos)?;
        if remaining == 0 {
            return None;
        }

        if remaining >= MIN_MATCH {
            if let Some((length, distance)) = self.finder.find(self.source, self.pos) {
                self.pos += length as usize;
                return Some(Lz77Token::Match { length, distance });
            }
        }

        let byte = self.source[self.pos];
        self.pos += 1;
        Some(Lz77Token::Literal(byte))
    }
}
