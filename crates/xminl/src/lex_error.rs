//! Lexer error type.
//!
//! One enum covers every way a lexing call can stop. The `Display` text is
//! the human-readable message; [`LexError::location`] is the byte offset in
//! the document where recognition failed, absent for errors that are not
//! about the document's content (arena sizing, oversized input).

use std::fmt;

use thiserror::Error;

/// Delimited construct recognised by the group scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// `<? ... ?>`
    ProcessingInstruction,
    /// `<!-- ... -->`
    Comment,
    /// `<![CDATA[ ... ]]>`
    CData,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupKind::ProcessingInstruction => "PI declaration",
            GroupKind::Comment => "comment",
            GroupKind::CData => "CDATA section",
        })
    }
}

/// Which side of an element a tag error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagSide {
    Start,
    End,
}

impl fmt::Display for TagSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TagSide::Start => "start",
            TagSide::End => "end",
        })
    }
}

/// Why a lexing call stopped.
///
/// The first error is terminal. Tokens pushed before it stay in the arenas.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    // === Resource Exhaustion ===
    /// The next value (plus its terminator) does not fit in the string arena.
    #[error("string data exhausted")]
    StringArenaExhausted,
    /// The token arena has no free slot.
    #[error("token data exhausted")]
    TokenArenaExhausted,
    /// The document does not fit in `u32` offsets.
    #[error("document of {len} bytes exceeds the addressable size")]
    DocumentTooLarge { len: usize },

    // === Syntax ===
    /// A name does not begin with a name-start character.
    #[error("invalid name")]
    InvalidName { at: u32 },
    /// The input does not open with the construct's start delimiter.
    #[error("invalid start {construct}")]
    InvalidStart { construct: GroupKind, at: u32 },
    /// The construct's end delimiter never appears. `at` is the group start.
    #[error("invalid end {construct}")]
    InvalidEnd { construct: GroupKind, at: u32 },
    /// An attribute name is not followed by `=`.
    #[error("missing equal for attribute")]
    MissingEqual { at: u32 },
    /// An attribute value does not open with `"` or `'`.
    #[error("missing start quote for attribute value")]
    MissingStartQuote { at: u32 },
    /// An attribute value runs to the end of the document.
    #[error("missing end quote for attribute value")]
    MissingEndQuote { at: u32 },
    /// A tag scanner was entered somewhere other than `<` / `</`.
    #[error("no start bracket for {tag} tag")]
    MissingStartBracket { tag: TagSide, at: u32 },
    /// A tag is not closed by `>` (or `/>` for start tags).
    #[error("no closing bracket for {tag} tag")]
    MissingCloseBracket { tag: TagSide, at: u32 },
    /// Nothing recognisable at this position, not even one byte of text.
    #[error("unrecognized markup")]
    UnrecognizedMarkup { at: u32 },

    // === Control ===
    /// The caller's step callback asked the lexer to stop.
    #[error("lexing cancelled")]
    Cancelled { at: u32 },
}

impl LexError {
    /// Byte offset in the document where the error was detected.
    ///
    /// `None` for arena exhaustion and oversized documents.
    pub fn location(&self) -> Option<u32> {
        match *self {
            LexError::StringArenaExhausted
            | LexError::TokenArenaExhausted
            | LexError::DocumentTooLarge { .. } => None,
            LexError::InvalidName { at }
            | LexError::InvalidStart { at, .. }
            | LexError::InvalidEnd { at, .. }
            | LexError::MissingEqual { at }
            | LexError::MissingStartQuote { at }
            | LexError::MissingEndQuote { at }
            | LexError::MissingStartBracket { at, .. }
            | LexError::MissingCloseBracket { at, .. }
            | LexError::UnrecognizedMarkup { at }
            | LexError::Cancelled { at } => Some(at),
        }
    }

    /// Returns `true` for errors caused by undersized arenas.
    pub fn is_exhaustion(&self) -> bool {
        matches!(
            self,
            LexError::StringArenaExhausted | LexError::TokenArenaExhausted
        )
    }
}

#[cfg(test)]
mod tests;
