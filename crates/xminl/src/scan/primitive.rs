//! Primitive scanners shared by the construct scanners.

use xminl_core::char_class::{is_name_continue, is_name_start, is_space};
use xminl_core::Cursor;

use super::Group;
use crate::LexError;

/// Length of the whitespace run at the cursor. Zero is fine.
#[inline]
pub(crate) fn space(mut cursor: Cursor<'_>) -> u32 {
    cursor.eat_while(is_space)
}

/// Length of the name at the cursor (always > 0 on success).
pub(crate) fn name(mut cursor: Cursor<'_>) -> Result<u32, LexError> {
    if !is_name_start(cursor.current()) {
        return Err(LexError::InvalidName { at: cursor.pos() });
    }
    Ok(cursor.eat_while(is_name_continue))
}

/// Length of `group.start + body + group.end` at the cursor.
///
/// The body is everything up to the first occurrence of `group.end` after
/// the start delimiter. A missing end delimiter is reported at the group's
/// first byte.
#[allow(
    clippy::cast_possible_truncation,
    reason = "delimiters are a few bytes long"
)]
pub(crate) fn group(cursor: Cursor<'_>, group: &Group) -> Result<u32, LexError> {
    let at = cursor.pos();
    if !cursor.starts_with(group.start) {
        return Err(LexError::InvalidStart {
            construct: group.kind,
            at,
        });
    }

    let mut body = cursor;
    body.advance_n(group.start.len() as u32);
    match body.find(group.end) {
        Some(offset) => Ok(group.start.len() as u32 + offset + group.end.len() as u32),
        None => Err(LexError::InvalidEnd {
            construct: group.kind,
            at,
        }),
    }
}
