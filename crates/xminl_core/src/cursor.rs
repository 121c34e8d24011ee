//! Cursor over a sentinel-terminated document.
//!
//! The cursor advances through the buffer byte by byte. Reading the current
//! byte at the end of the document yields the sentinel (`0x00`), so every
//! classifier loop stops there without a separate length check. Since a
//! [`Document`](crate::Document) is cut at its first null byte, `0x00` only
//! ever appears at or after `source_len`.

/// Read position over a sentinel-terminated byte buffer.
///
/// Created via [`Document::cursor()`](crate::Document::cursor).
/// The cursor is [`Copy`]: scanners take a snapshot, walk it forward and
/// report how far they got.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`Document`](crate::Document) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (document + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the document content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.get(self.pos as usize).copied().unwrap_or(0)
    }

    /// Returns the byte one position ahead of current, `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.get(self.pos as usize + 1).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once the cursor has reached the end of the document.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the document.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the document content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Document bytes from the current position to the end of the content.
    ///
    /// Empty at or past EOF; never includes the sentinel.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    /// Returns `true` if the remaining content begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// The next `len` bytes of content, clamped to the end of the document.
    #[inline]
    pub fn lookahead(&self, len: u32) -> &'a [u8] {
        let rest = self.remaining();
        &rest[..rest.len().min(len as usize)]
    }

    /// Document bytes in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len`, which holds for offsets a scanner took
    /// from this cursor.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Document bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel ends the loop. All the
    /// classifiers in [`char_class`](crate::char_class) satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is left on the found
    /// byte, or at EOF if the byte was not found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining().len() <= source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let remaining = self.remaining();
        let consumed = memchr::memchr(byte, remaining).unwrap_or(remaining.len()) as u32;
        self.pos += consumed;
        consumed
    }

    /// Offset from the current position of the first occurrence of `needle`.
    ///
    /// Uses `memchr::memmem` for SIMD-accelerated substring search within
    /// the document content.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "match offset < remaining().len() <= source_len which fits in u32"
    )]
    pub fn find(&self, needle: &[u8]) -> Option<u32> {
        memchr::memmem::find(self.remaining(), needle).map(|offset| offset as u32)
    }
}
