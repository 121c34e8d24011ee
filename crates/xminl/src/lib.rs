//! Single-pass lexer for XML-like documents.
//!
//! The caller allocates two fixed-capacity arenas (string bytes and token
//! records), opens a [`Handler`] over them and lexes one [`Document`].
//! Lexing copies each token's text, null-terminated, into the string arena
//! and appends a [`Token`] to the token arena; it performs no other
//! allocation.
//!
//! Recognised constructs:
//!
//! | Input | Tokens |
//! |-------|--------|
//! | `<?target ...?>` | `ProcessingInstruction` (whole span) |
//! | `<!-- ... -->` | none |
//! | `<![CDATA[body]]>` | `CData(body)` |
//! | `<name a="v">` | `TagStart(name)`, `AttrName(a)`, `AttrValue(v)` |
//! | `<name/>` | `TagStart(name)`, `TagEmpty(name)` |
//! | `</name>` | `TagEnd(name)` |
//! | text | `CData(text)` (leading whitespace skipped) |
//!
//! There is no tree building, nesting validation, entity or namespace
//! handling. The first error stops lexing; see [`LexError`].

mod driver;
mod handler;
mod lex_error;
mod scan;

pub use handler::Handler;
pub use lex_error::{GroupKind, LexError, TagSide};
pub use xminl_core::{Document, Lexeme, Token, TokenKind, TokenList, Tokens, ValueRef};
