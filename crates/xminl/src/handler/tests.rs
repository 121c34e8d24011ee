use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn new_zero_fills_both_arenas() {
    let mut strings = [0xFFu8; 16];
    let mut slots = [Token {
        kind: TokenKind::CData,
        value: ValueRef::new(3, 3),
    }; 4];
    let handler = Handler::new(&mut strings, &mut slots);
    assert!(handler.strings().iter().all(|&b| b == 0));
    assert!(handler.slots().iter().all(|t| *t == Token::default()));
    assert_eq!(handler.capacity(), (16, 4));
    assert_eq!(handler.tokens().count(), 0);
    assert!(handler.error().is_none());
}

// === Push ===

#[test]
fn push_copies_value_with_terminator() {
    let mut strings = [0u8; 16];
    let mut slots = [Token::default(); 4];
    let mut handler = Handler::new(&mut strings, &mut slots);

    assert_eq!(handler.push(TokenKind::TagStart, b"root"), Ok(()));
    assert_eq!(handler.push(TokenKind::AttrName, b"id"), Ok(()));

    assert_eq!(&handler.strings()[..8], b"root\0id\0");
    assert_eq!(
        handler.slots()[..2],
        [
            Token {
                kind: TokenKind::TagStart,
                value: ValueRef::new(0, 4)
            },
            Token {
                kind: TokenKind::AttrName,
                value: ValueRef::new(5, 2)
            },
        ]
    );
    assert_eq!(handler.value(&handler.slots()[1]), b"id");
    assert_eq!(handler.bytes_used(), 8);
    assert_eq!(handler.token_count(), 2);
}

#[test]
fn push_empty_value_still_takes_terminator() {
    let mut strings = [0u8; 1];
    let mut slots = [Token::default(); 1];
    let mut handler = Handler::new(&mut strings, &mut slots);
    assert_eq!(handler.push(TokenKind::CData, b""), Ok(()));
    assert_eq!(handler.bytes_used(), 1);
}

#[test]
fn push_exactly_fills_string_arena() {
    let mut strings = [0u8; 4];
    let mut slots = [Token::default(); 2];
    let mut handler = Handler::new(&mut strings, &mut slots);
    assert_eq!(handler.push(TokenKind::CData, b"abc"), Ok(()));
    assert_eq!(
        handler.push(TokenKind::CData, b""),
        Err(LexError::StringArenaExhausted)
    );
}

#[test]
fn string_exhaustion_leaves_arenas_untouched() {
    let mut strings = [0u8; 4];
    let mut slots = [Token::default(); 4];
    let mut handler = Handler::new(&mut strings, &mut slots);
    assert_eq!(
        handler.push(TokenKind::TagStart, b"long"),
        Err(LexError::StringArenaExhausted)
    );
    assert_eq!(handler.bytes_used(), 0);
    assert_eq!(handler.token_count(), 0);
    assert_eq!(handler.strings(), b"\0\0\0\0");
}

#[test]
fn token_exhaustion_leaves_string_arena_untouched() {
    let mut strings = [0u8; 16];
    let mut slots = [Token::default(); 1];
    let mut handler = Handler::new(&mut strings, &mut slots);
    assert_eq!(handler.push(TokenKind::TagStart, b"a"), Ok(()));
    assert_eq!(
        handler.push(TokenKind::TagEnd, b"a"),
        Err(LexError::TokenArenaExhausted)
    );
    assert_eq!(handler.bytes_used(), 2);
    assert_eq!(handler.token_count(), 1);
}

#[test]
fn zero_capacity_arenas() {
    let mut strings: [u8; 0] = [];
    let mut slots: [Token; 0] = [];
    let mut handler = Handler::new(&mut strings, &mut slots);
    assert_eq!(
        handler.push(TokenKind::CData, b"x"),
        Err(LexError::StringArenaExhausted)
    );
    assert_eq!(handler.tokens().count(), 0);
}

// === Reading ===

#[test]
fn first_and_list() {
    let mut strings = [0u8; 16];
    let mut slots = [Token::default(); 4];
    let mut handler = Handler::new(&mut strings, &mut slots);
    assert_eq!(handler.first(), None);
    assert_eq!(handler.push(TokenKind::CData, b"hi"), Ok(()));
    assert_eq!(
        handler.first(),
        Some(Lexeme {
            kind: TokenKind::CData,
            value: b"hi"
        })
    );
    assert_eq!(handler.list().len(), 1);
}

#[test]
fn into_tokens_outlives_session() {
    let mut strings = [0u8; 16];
    let mut slots = [Token::default(); 4];
    let list = {
        let mut handler = Handler::new(&mut strings, &mut slots);
        assert_eq!(handler.push(TokenKind::TagStart, b"x"), Ok(()));
        handler.into_tokens()
    };
    let values: Vec<_> = list.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![b"x" as &[u8]]);
}

// === Reset ===

#[test]
fn reset_clears_tokens_strings_and_error() {
    let mut strings = [0u8; 8];
    let mut slots = [Token::default(); 2];
    let mut handler = Handler::new(&mut strings, &mut slots);
    assert_eq!(handler.push(TokenKind::CData, b"abc"), Ok(()));
    handler.set_error(LexError::TokenArenaExhausted);

    handler.reset();

    assert_eq!(handler.token_count(), 0);
    assert_eq!(handler.bytes_used(), 0);
    assert!(handler.error().is_none());
    assert!(handler.strings().iter().all(|&b| b == 0));
    assert!(handler.slots().iter().all(|t| t.kind.is_none()));
}
