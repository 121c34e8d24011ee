//! Standalone building blocks for the xminl lexer.
//!
//! This crate has no xminl dependencies. It provides:
//! - [`Document`]: a sentinel-terminated copy of the input so scanners can
//!   read one byte past the content without bounds juggling
//! - [`Cursor`]: a `Copy` read position over a [`Document`]
//! - [`char_class`]: name and whitespace classifiers
//! - [`Arena`]: a fixed-capacity bump allocator over a caller-supplied slice
//! - [`Token`], [`TokenKind`], [`TokenList`]: the records the lexer emits and
//!   the view callers read them through
//!
//! The lexer session itself lives in the `xminl` crate.

pub mod arena;
pub mod char_class;
mod cursor;
mod document;
mod token;

pub use arena::{Arena, ArenaExhausted};
pub use cursor::Cursor;
pub use document::Document;
pub use token::{Lexeme, Token, TokenKind, TokenList, Tokens, ValueRef};
