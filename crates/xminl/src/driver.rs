//! Driver loop: dispatch by lookahead until the document is consumed or a
//! scanner fails.

use std::ops::ControlFlow;

use tracing::{debug, trace};
use xminl_core::char_class::{is_name_start, is_space};
use xminl_core::{Cursor, Document};

use crate::{Handler, LexError};

/// What the bytes at the cursor start.
///
/// Detection order matters where prefixes overlap: `<?`, `<!--` and
/// `<![CDATA[` are tried before the generic `<` + name-start start tag, and
/// anything unclaimed falls through to character data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Construct {
    ProcessingInstruction,
    Comment,
    CData,
    StartTag,
    EndTag,
    Whitespace,
    CharData,
}

impl Construct {
    pub(crate) fn detect(cursor: &Cursor<'_>) -> Self {
        match cursor.remaining() {
            [b'<', b'?', ..] => Construct::ProcessingInstruction,
            [b'<', b'!', b'-', b'-', ..] => Construct::Comment,
            [b'<', b'!', b'[', b'C', b'D', b'A', b'T', b'A', b'[', ..] => Construct::CData,
            [b'<', next, ..] if is_name_start(*next) => Construct::StartTag,
            [b'<', b'/', ..] => Construct::EndTag,
            [first, ..] if is_space(*first) => Construct::Whitespace,
            _ => Construct::CharData,
        }
    }
}

impl Handler<'_> {
    /// Lex `document` into the session's arenas.
    ///
    /// Stops at the first error, which is also left in
    /// [`error()`](Handler::error). Tokens pushed before the error stay.
    pub fn lex(&mut self, document: &Document) -> Result<(), LexError> {
        self.lex_with(document, |_| ControlFlow::Continue(()))
    }

    /// [`lex`](Handler::lex) with a cooperative yield point.
    ///
    /// `on_step` is called with the current offset before each construct is
    /// scanned; returning `ControlFlow::Break(())` stops lexing with
    /// [`LexError::Cancelled`].
    #[tracing::instrument(level = "debug", skip_all, fields(len = document.len()))]
    pub fn lex_with<F>(&mut self, document: &Document, on_step: F) -> Result<(), LexError>
    where
        F: FnMut(u32) -> ControlFlow<()>,
    {
        self.clear_error();
        match self.run(document, on_step) {
            Ok(()) => {
                debug!(
                    tokens = self.token_count(),
                    bytes = self.bytes_used(),
                    "lexing complete"
                );
                Ok(())
            }
            Err(error) => {
                debug!(%error, location = ?error.location(), tokens = self.token_count(), "lexing stopped");
                self.set_error(error.clone());
                Err(error)
            }
        }
    }

    fn run<F>(&mut self, document: &Document, mut on_step: F) -> Result<(), LexError>
    where
        F: FnMut(u32) -> ControlFlow<()>,
    {
        if let Some(len) = document.oversized_len() {
            return Err(LexError::DocumentTooLarge { len });
        }

        let mut cursor = document.cursor();
        while !cursor.is_eof() {
            let at = cursor.pos();
            if on_step(at).is_break() {
                return Err(LexError::Cancelled { at });
            }

            let construct = Construct::detect(&cursor);
            trace!(?construct, at, "dispatch");
            let consumed = self.scan(construct, cursor)?;
            debug_assert!(consumed > 0, "{construct:?} consumed nothing at {at}");
            cursor.advance_n(consumed);
        }
        Ok(())
    }

    fn scan(&mut self, construct: Construct, cursor: Cursor<'_>) -> Result<u32, LexError> {
        match construct {
            Construct::ProcessingInstruction => self.processing_instruction(cursor),
            Construct::Comment => self.comment(cursor),
            Construct::CData => self.cdata_section(cursor),
            Construct::StartTag => self.start_tag(cursor),
            Construct::EndTag => self.end_tag(cursor),
            Construct::Whitespace => Ok(crate::scan::primitive::space(cursor)),
            Construct::CharData => self.char_data(cursor),
        }
    }
}
