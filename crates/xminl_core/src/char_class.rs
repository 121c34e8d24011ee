//! Byte classifiers for names and whitespace.
//!
//! Non-ASCII bytes are accepted wholesale as name characters; there is no
//! Unicode-aware classification. Every predicate returns `false` for `0x00`
//! so cursor loops stop at the document sentinel.

/// `:`, `_`, an ASCII letter, or any byte `>= 0x80`.
#[inline]
pub const fn is_name_start(b: u8) -> bool {
    matches!(b, b':' | b'_' | b'a'..=b'z' | b'A'..=b'Z' | 0x80..=0xFF)
}

/// A name-start byte, an ASCII digit, `.` or `-`.
#[inline]
pub const fn is_name_continue(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'.' | b'-')
}

/// The XML space set: space, tab, CR, LF.
///
/// Fixed set rather than a locale-aware test, so lexing is identical
/// everywhere.
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}
