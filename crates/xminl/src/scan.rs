//! Scanners.
//!
//! Every scanner starts from a [`Cursor`] snapshot at the construct's first
//! byte and returns how many bytes it consumed; the caller advances its own
//! cursor by that much. Failures come back as `Err(LexError)` carrying the
//! offending offset.
//!
//! - [`primitive`]: whitespace runs, names, delimited groups. Pure, no arena
//!   access.
//! - [`construct`]: processing instructions, comments, CDATA, character
//!   data, attribute lists, start and end tags. These push tokens through
//!   [`Handler::push`](crate::Handler).

pub(crate) mod construct;
pub(crate) mod primitive;

use crate::GroupKind;

/// Start/end delimiters of a construct the group scanner recognises.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Group {
    pub kind: GroupKind,
    pub start: &'static [u8],
    pub end: &'static [u8],
}

impl Group {
    pub const PROCESSING_INSTRUCTION: Group = Group {
        kind: GroupKind::ProcessingInstruction,
        start: b"<?",
        end: b"?>",
    };

    pub const COMMENT: Group = Group {
        kind: GroupKind::Comment,
        start: b"<!--",
        end: b"-->",
    };

    pub const CDATA: Group = Group {
        kind: GroupKind::CData,
        start: b"<![CDATA[",
        end: b"]]>",
    };
}
