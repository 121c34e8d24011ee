//! The lexer session.
//!
//! A [`Handler`] owns exclusive borrows of the two caller-allocated arenas
//! for as long as it lives, plus the error slot of the last lexing call.
//! [`Handler::push`] is the only way bytes or tokens get into the arenas.

use xminl_core::{Arena, Lexeme, Token, TokenKind, TokenList, Tokens, ValueRef};

use crate::LexError;

/// Largest usable string arena: token values address it with `u32`.
const MAX_STRING_CAPACITY: usize = u32::MAX as usize;

/// A lexing session over two fixed-capacity arenas.
///
/// ```
/// use xminl::{Document, Handler, Token, TokenKind};
///
/// let mut strings = [0u8; 64];
/// let mut tokens = [Token::default(); 8];
/// let mut handler = Handler::new(&mut strings, &mut tokens);
///
/// handler.lex(&Document::from("<a>text</a>")).ok();
/// let kinds: Vec<_> = handler.tokens().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::TagStart, TokenKind::CData, TokenKind::TagEnd]);
/// ```
#[derive(Debug)]
pub struct Handler<'buf> {
    /// Copied token values, each followed by a `0x00` terminator.
    strings: Arena<'buf, u8>,
    /// Token records; unwritten slots are `TokenKind::None`.
    tokens: Arena<'buf, Token>,
    /// Error that ended the last lexing call, if any.
    error: Option<LexError>,
}

impl<'buf> Handler<'buf> {
    /// Start a session over `strings` and `tokens`, zero-filling both.
    ///
    /// The capacities are the slice lengths. String storage past
    /// `u32::MAX` bytes is left untouched and unused.
    pub fn new(strings: &'buf mut [u8], tokens: &'buf mut [Token]) -> Self {
        let usable = strings.len().min(MAX_STRING_CAPACITY);
        Handler {
            strings: Arena::new(&mut strings[..usable]),
            tokens: Arena::new(tokens),
            error: None,
        }
    }

    /// Copy `value` plus a terminator into the string arena and record a
    /// `kind` token pointing at it.
    ///
    /// Both capacities are checked before either arena is written, so a
    /// failed push leaves the session exactly as it was.
    pub(crate) fn push(&mut self, kind: TokenKind, value: &[u8]) -> Result<(), LexError> {
        let needed = value.len() + 1;
        if !self.strings.fits(needed) {
            return Err(LexError::StringArenaExhausted);
        }
        if !self.tokens.fits(1) {
            return Err(LexError::TokenArenaExhausted);
        }

        let start = self.strings.used();
        let copy = self
            .strings
            .alloc(needed)
            .map_err(|_| LexError::StringArenaExhausted)?;
        copy[..value.len()].copy_from_slice(value);
        copy[value.len()] = 0;

        let slot = self
            .tokens
            .alloc(1)
            .map_err(|_| LexError::TokenArenaExhausted)?;
        slot[0] = Token {
            kind,
            value: ValueRef::new(to_offset(start), to_offset(value.len())),
        };
        Ok(())
    }

    /// Record the error that ended a lexing call.
    pub(crate) fn set_error(&mut self, error: LexError) {
        self.error = Some(error);
    }

    /// Forget the previous call's error.
    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    /// The error that ended the last lexing call, if it failed.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Zero both arenas and clear the error slot.
    pub fn reset(&mut self) {
        self.strings.reset();
        self.tokens.reset();
        self.error = None;
    }

    /// Every slot of the token arena, unwritten ones included.
    pub fn slots(&self) -> &[Token] {
        self.tokens.as_slice()
    }

    /// The whole string arena.
    pub fn strings(&self) -> &[u8] {
        self.strings.as_slice()
    }

    /// Resolve a token's value against the string arena.
    pub fn value(&self, token: &Token) -> &[u8] {
        token.value.resolve(self.strings.as_slice())
    }

    /// Number of tokens pushed so far.
    pub fn token_count(&self) -> usize {
        self.tokens.used()
    }

    /// Number of string arena bytes used so far, terminators included.
    pub fn bytes_used(&self) -> usize {
        self.strings.used()
    }

    /// Capacities of the (string, token) arenas.
    pub fn capacity(&self) -> (usize, usize) {
        (self.strings.capacity(), self.tokens.capacity())
    }

    /// Read-only view of both arenas.
    pub fn list(&self) -> TokenList<'_> {
        TokenList::new(self.strings.as_slice(), self.tokens.as_slice())
    }

    /// Iterate tokens from slot 0 up to the first `None` slot.
    pub fn tokens(&self) -> Tokens<'_> {
        self.list().iter()
    }

    /// The first token, resolved. Handy for single-construct documents.
    pub fn first(&self) -> Option<Lexeme<'_>> {
        self.tokens().next()
    }

    /// End the session, keeping a view of the arenas for the rest of `'buf`.
    pub fn into_tokens(self) -> TokenList<'buf> {
        TokenList::new(self.strings.into_slice(), self.tokens.into_slice())
    }
}

/// Arena offsets fit in `u32` because the string arena is capped at
/// `MAX_STRING_CAPACITY`.
fn to_offset(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
