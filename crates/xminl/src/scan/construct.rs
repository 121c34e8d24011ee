//! Construct scanners: each recognises one markup construct and pushes the
//! tokens it yields.

use xminl_core::char_class::is_name_start;
use xminl_core::{Cursor, TokenKind};

use super::primitive::{group, name, space};
use super::Group;
use crate::{Handler, LexError, TagSide};

#[allow(
    clippy::cast_possible_truncation,
    reason = "delimiters are a few bytes long"
)]
const fn delim_len(delim: &[u8]) -> u32 {
    delim.len() as u32
}

impl Handler<'_> {
    /// `<? ... ?>`, pushed whole (delimiters included) as one token.
    pub(crate) fn processing_instruction(&mut self, cursor: Cursor<'_>) -> Result<u32, LexError> {
        let len = group(cursor, &Group::PROCESSING_INSTRUCTION)?;
        self.push(TokenKind::ProcessingInstruction, cursor.lookahead(len))?;
        Ok(len)
    }

    /// `<!-- ... -->`: consumed, never surfaced as a token.
    pub(crate) fn comment(&mut self, cursor: Cursor<'_>) -> Result<u32, LexError> {
        group(cursor, &Group::COMMENT)
    }

    /// `<![CDATA[ ... ]]>`: only the body is pushed.
    pub(crate) fn cdata_section(&mut self, cursor: Cursor<'_>) -> Result<u32, LexError> {
        let cdata = Group::CDATA;
        let len = group(cursor, &cdata)?;

        let start = cursor.pos() + delim_len(cdata.start);
        let end = cursor.pos() + len - delim_len(cdata.end);
        self.push(TokenKind::CData, cursor.slice(start, end))?;
        Ok(len)
    }

    /// Text up to the next `<` or the end of the document.
    ///
    /// An empty run means nothing at this position is recognisable.
    pub(crate) fn char_data(&mut self, cursor: Cursor<'_>) -> Result<u32, LexError> {
        let mut text = cursor;
        let len = text.eat_until(b'<');
        if len == 0 {
            return Err(LexError::UnrecognizedMarkup { at: cursor.pos() });
        }
        self.push(TokenKind::CData, cursor.lookahead(len))?;
        Ok(len)
    }

    /// `name="value"` pairs up to the first byte that cannot start a name.
    ///
    /// Stopping there is the normal exit; what follows is the tag's business.
    pub(crate) fn attributes(&mut self, cursor: Cursor<'_>) -> Result<u32, LexError> {
        let mut cur = cursor;
        loop {
            cur.advance_n(space(cur));
            if !is_name_start(cur.current()) {
                break;
            }

            let name_len = name(cur)?;
            self.push(TokenKind::AttrName, cur.lookahead(name_len))?;
            cur.advance_n(name_len);

            cur.advance_n(space(cur));
            if cur.current() != b'=' {
                return Err(LexError::MissingEqual { at: cur.pos() });
            }
            cur.advance();
            cur.advance_n(space(cur));

            let quote = cur.current();
            if quote != b'"' && quote != b'\'' {
                return Err(LexError::MissingStartQuote { at: cur.pos() });
            }
            cur.advance();

            let value_start = cur.pos();
            cur.eat_until(quote);
            if cur.is_eof() {
                return Err(LexError::MissingEndQuote { at: cur.pos() });
            }
            self.push(TokenKind::AttrValue, cur.slice_from(value_start))?;
            cur.advance(); // closing quote
        }
        Ok(cur.pos() - cursor.pos())
    }

    /// `<name attrs>` or `<name attrs/>`.
    ///
    /// A self-closing tag yields `TagStart(name)` and then `TagEmpty(name)`,
    /// so consumers can treat it either as an element without content or by
    /// its empty marker.
    pub(crate) fn start_tag(&mut self, cursor: Cursor<'_>) -> Result<u32, LexError> {
        let mut cur = cursor;
        if cur.current() != b'<' {
            return Err(LexError::MissingStartBracket {
                tag: TagSide::Start,
                at: cur.pos(),
            });
        }
        cur.advance();

        let name_len = name(cur)?;
        let tag_name = cur.lookahead(name_len);
        self.push(TokenKind::TagStart, tag_name)?;
        cur.advance_n(name_len);

        cur.advance_n(self.attributes(cur)?);

        if cur.starts_with(b"/>") {
            self.push(TokenKind::TagEmpty, tag_name)?;
            cur.advance_n(2);
        } else if cur.current() == b'>' {
            cur.advance();
        } else {
            return Err(LexError::MissingCloseBracket {
                tag: TagSide::Start,
                at: cur.pos(),
            });
        }
        Ok(cur.pos() - cursor.pos())
    }

    /// `</name>`, with optional whitespace before the `>`.
    pub(crate) fn end_tag(&mut self, cursor: Cursor<'_>) -> Result<u32, LexError> {
        let mut cur = cursor;
        if !cur.starts_with(b"</") {
            return Err(LexError::MissingStartBracket {
                tag: TagSide::End,
                at: cur.pos(),
            });
        }
        cur.advance_n(2);

        let name_len = name(cur)?;
        let tag_name = cur.lookahead(name_len);
        cur.advance_n(name_len);
        cur.advance_n(space(cur));

        self.push(TokenKind::TagEnd, tag_name)?;

        if cur.current() != b'>' {
            return Err(LexError::MissingCloseBracket {
                tag: TagSide::End,
                at: cur.pos(),
            });
        }
        cur.advance();
        Ok(cur.pos() - cursor.pos())
    }
}
