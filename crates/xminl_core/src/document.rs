//! Sentinel-terminated document buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the document content,
//! so a scanner can look at the current byte (and the next few) without
//! checking for the end first. The total buffer size is rounded up to the
//! next 64-byte boundary, which also gives `peek()` and multi-byte prefix
//! checks zero padding to read near the end.
//!
//! # Null-Terminated Semantics
//!
//! A document ends at its first `0x00` byte. Anything after an interior null
//! is dropped at construction and never scanned; [`Document::interior_null`]
//! reports where the cut happened.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Largest document the scanner can address with `u32` offsets.
const MAX_LEN: usize = u32::MAX as usize;

/// Sentinel-terminated document for the lexer.
///
/// # Layout
///
/// ```text
/// [document_bytes..., 0x00, padding_zeros...]
///  ^                  ^     ^
///  0                  |     rounded up to 64-byte boundary
///                    len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct Document {
    /// Owned buffer: `[document_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the document content (excludes sentinel and padding).
    len: u32,
    /// Offset of the first interior null byte, if the input had one.
    interior_null: Option<u32>,
    /// Original content length when it did not fit in `u32` offsets.
    oversized_len: Option<usize>,
}

impl Document {
    /// Create a sentinel-terminated document from raw bytes.
    ///
    /// Copies the bytes up to (not including) the first `0x00` into a
    /// cache-line padded buffer with a `0x00` sentinel appended.
    ///
    /// Inputs longer than `u32::MAX` bytes are cut to that length and
    /// remembered in [`oversized_len()`](Self::oversized_len); the lexer
    /// refuses to scan such a document.
    pub fn new(source: &[u8]) -> Self {
        let (content, interior_null) = match memchr::memchr(0, source) {
            Some(pos) => (&source[..pos], u32::try_from(pos).ok()),
            None => (source, None),
        };

        let oversized_len = (content.len() > MAX_LEN).then_some(content.len());
        let content = &content[..content.len().min(MAX_LEN)];
        let len = content.len();

        // Round up to next 64-byte boundary (minimum: content + 1 sentinel byte).
        let padded_len = (len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..len].copy_from_slice(content);

        Self {
            buf,
            len: u32::try_from(len).unwrap_or(u32::MAX),
            interior_null,
            oversized_len,
        }
    }

    /// Returns the document bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.len)
    }

    /// Length of the document content in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the interior null byte that ended the document early.
    pub fn interior_null(&self) -> Option<u32> {
        self.interior_null
    }

    /// Original length when the input exceeded `u32::MAX` bytes.
    pub fn oversized_len(&self) -> Option<usize> {
        self.oversized_len
    }
}

impl From<&str> for Document {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl From<&[u8]> for Document {
    fn from(source: &[u8]) -> Self {
        Self::new(source)
    }
}
