//! Token records and the read-side view over the two arenas.
//!
//! A [`Token`] is a fixed-size record: a [`TokenKind`] plus a [`ValueRef`]
//! locating its text in the string arena. The zero value of a token is
//! `TokenKind::None`, so a zero-filled token arena reads as "no tokens" and
//! the first unwritten slot terminates the sequence.

use std::fmt;

/// What a token stands for.
///
/// `#[repr(u8)]` keeps the record compact; `None` is discriminant 0 so
/// zeroed storage decodes as the end-of-sequence marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Unused slot / end of the token sequence.
    #[default]
    None = 0,
    /// Element name of a start tag: `<name ...>` or `<name .../>`.
    TagStart = 1,
    /// Element name of an end tag: `</name>`.
    TagEnd = 2,
    /// Element name of a self-closing tag, emitted after its `TagStart`.
    TagEmpty = 3,
    /// Attribute name.
    AttrName = 4,
    /// Attribute value, without quotes.
    AttrValue = 5,
    /// Character data: raw text or the body of a CDATA section.
    CData = 6,
    /// Processing instruction, `<?` and `?>` included.
    ProcessingInstruction = 7,
}

impl TokenKind {
    /// Upper-case display name, as printed in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::None => "NONE",
            TokenKind::TagStart => "TAG_START",
            TokenKind::TagEnd => "TAG_END",
            TokenKind::TagEmpty => "TAG_EMPTY",
            TokenKind::AttrName => "ATTR_NAME",
            TokenKind::AttrValue => "ATTR_VALUE",
            TokenKind::CData => "CDATA",
            TokenKind::ProcessingInstruction => "PI",
        }
    }

    /// Returns `true` for the unused-slot marker.
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, TokenKind::None)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Location of a token's text in the string arena.
///
/// The byte at `start + len` is the `0x00` terminator written with the copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueRef {
    pub start: u32,
    pub len: u32,
}

impl ValueRef {
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ValueRef { start, len }
    }

    /// Offset one past the last content byte (where the terminator sits).
    #[inline]
    pub const fn end(self) -> u32 {
        self.start.saturating_add(self.len)
    }

    /// The value's bytes, without the terminator.
    ///
    /// Out-of-range references resolve to an empty slice.
    pub fn resolve(self, strings: &[u8]) -> &[u8] {
        strings
            .get(self.start as usize..self.end() as usize)
            .unwrap_or_default()
    }
}

/// One record in the token arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: ValueRef,
}

/// Size assertion: a token record is 12 bytes (1 + padding + 2 × u32).
const _: () = assert!(std::mem::size_of::<Token>() <= 12);

/// A token with its value resolved against the string arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lexeme<'a> {
    pub kind: TokenKind,
    pub value: &'a [u8],
}

impl<'a> Lexeme<'a> {
    /// The value as UTF-8, if it is valid UTF-8.
    pub fn value_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.value).ok()
    }
}

impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, String::from_utf8_lossy(self.value))
    }
}

/// Read-only view over a populated pair of arenas.
///
/// `slots` is the whole token arena, unwritten slots included; `strings`
/// is the whole string arena.
#[derive(Clone, Copy, Debug)]
pub struct TokenList<'a> {
    strings: &'a [u8],
    slots: &'a [Token],
}

impl<'a> TokenList<'a> {
    pub fn new(strings: &'a [u8], slots: &'a [Token]) -> Self {
        TokenList { strings, slots }
    }

    /// Every slot of the token arena.
    pub fn slots(&self) -> &'a [Token] {
        self.slots
    }

    /// The string arena backing the token values.
    pub fn strings(&self) -> &'a [u8] {
        self.strings
    }

    /// Resolve one token's value.
    pub fn value(&self, token: &Token) -> &'a [u8] {
        token.value.resolve(self.strings)
    }

    /// Number of tokens before the first `None` slot.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.first().map_or(true, |t| t.kind.is_none())
    }

    /// Tokens from slot 0 up to the first `None` slot or the capacity.
    pub fn iter(&self) -> Tokens<'a> {
        Tokens {
            strings: self.strings,
            slots: self.slots.iter(),
        }
    }
}

impl<'a> IntoIterator for TokenList<'a> {
    type Item = Lexeme<'a>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        self.iter()
    }
}

/// Iterator over the live prefix of a token arena.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    strings: &'a [u8],
    slots: std::slice::Iter<'a, Token>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Lexeme<'a>> {
        let token = self.slots.next()?;
        if token.kind.is_none() {
            // Stop for good: slots after the sentinel are never read.
            let empty: &'a [Token] = &[];
            self.slots = empty.iter();
            return None;
        }
        Some(Lexeme {
            kind: token.kind,
            value: token.value.resolve(self.strings),
        })
    }
}
