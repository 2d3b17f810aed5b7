//! Character cursor over the source text.
//!
//! The cursor walks the source one Unicode scalar at a time and exposes one
//! character of lookahead, which is all the scanner's dispatch table needs.
//! Positions are byte offsets, so slices taken between two positions always
//! land on character boundaries.

/// Cursor over a `&str`.
///
/// The cursor is [`Copy`], so a snapshot is just a copy of the struct.
///
/// # Invariant
///
/// `pos` is always a character boundary and `pos <= source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
    /// Length of `source` in bytes.
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Contract
    ///
    /// `source_len` must equal `source.len()`; the scanner checks that the
    /// length fits in `u32` before building a cursor.
    pub(crate) fn new(source: &'a str, source_len: u32) -> Self {
        debug_assert_eq!(source.len(), source_len as usize, "source length mismatch");
        Self {
            source,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..]
    }

    /// Returns the character at the current position, `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Advance past the current character. No-op at EOF.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8() as u32;
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must come from cursor positions (character boundaries)
    /// with `start <= end <= source_len`.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Advance to the next occurrence of the ASCII `byte`.
    ///
    /// Returns `true` with the cursor on the byte when found. Otherwise the
    /// cursor is left at EOF and `false` is returned. ASCII bytes never occur
    /// inside a multi-byte UTF-8 sequence, so the landing position is always
    /// a character boundary.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_ascii(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii(), "eat_until_ascii needs an ASCII byte");
        let remaining = self.rest().as_bytes();
        if let Some(offset) = memchr::memchr(byte, remaining) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}
