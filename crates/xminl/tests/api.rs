//! End-to-end use of the public API, the way an embedding caller drives it.

use pretty_assertions::assert_eq;
use xminl::{Document, Handler, LexError, Token, TokenKind, TokenList};

const DATA_SIZE: usize = 0xfff;
const TOKEN_SIZE: usize = 0xfff;

fn dump(list: TokenList<'_>) -> Vec<String> {
    list.iter()
        .map(|t| format!("{:>12} | {}", t.kind, String::from_utf8_lossy(t.value)))
        .collect()
}

#[test]
fn caller_reads_tokens_after_session_ends() {
    let mut data = vec![0u8; DATA_SIZE];
    let mut tokens = vec![Token::default(); TOKEN_SIZE];

    let list = {
        let mut handler = Handler::new(&mut data, &mut tokens);
        assert_eq!(
            handler.lex(&Document::from("<note to=\"ada\">hi</note>")),
            Ok(())
        );
        handler.into_tokens()
    };

    assert_eq!(
        dump(list),
        vec![
            "   TAG_START | note",
            "   ATTR_NAME | to",
            "  ATTR_VALUE | ada",
            "       CDATA | hi",
            "     TAG_END | note",
        ]
    );
}

#[test]
fn consumption_contract_over_raw_slots() {
    let mut data = [0u8; 64];
    let mut slots = [Token::default(); 8];
    let mut handler = Handler::new(&mut data, &mut slots);
    assert_eq!(handler.lex(&Document::from("<a/>")), Ok(()));

    let mut seen = Vec::new();
    for (i, slot) in handler.slots().iter().enumerate() {
        if i >= handler.capacity().1 || slot.kind == TokenKind::None {
            break;
        }
        seen.push((slot.kind, handler.value(slot).to_vec()));
    }
    assert_eq!(
        seen,
        vec![
            (TokenKind::TagStart, b"a".to_vec()),
            (TokenKind::TagEmpty, b"a".to_vec()),
        ]
    );
}

#[test]
fn document_ends_at_first_null() {
    let mut data = [0u8; 64];
    let mut slots = [Token::default(); 8];
    let mut handler = Handler::new(&mut data, &mut slots);
    let doc = Document::new(b"<a>x</a>\0<broken");
    assert_eq!(doc.interior_null(), Some(8));
    assert_eq!(handler.lex(&doc), Ok(()));
    assert_eq!(handler.token_count(), 3);
}

#[test]
fn non_utf8_names_are_bytes() {
    let mut data = [0u8; 64];
    let mut slots = [Token::default(); 8];
    let mut handler = Handler::new(&mut data, &mut slots);
    assert_eq!(handler.lex(&Document::new(b"<\xE9t\xE9/>")), Ok(()));
    let first = handler.first().map(|t| t.value.to_vec());
    assert_eq!(first, Some(b"\xE9t\xE9".to_vec()));
    assert_eq!(handler.first().and_then(|t| t.value_str()), None);
}

#[test]
fn arenas_are_reusable_after_reset() {
    let mut data = [0u8; 64];
    let mut slots = [Token::default(); 8];
    let mut handler = Handler::new(&mut data, &mut slots);

    assert_eq!(
        handler.lex(&Document::from("<a b=c>")),
        Err(LexError::MissingStartQuote { at: 5 })
    );
    assert_eq!(handler.error().map(ToString::to_string).as_deref(), Some("missing start quote for attribute value"));

    handler.reset();
    assert_eq!(handler.lex(&Document::from("<z/>")), Ok(()));
    let kinds: Vec<_> = handler.tokens().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::TagStart, TokenKind::TagEmpty]);
}
