use super::*;

// === Messages ===

#[test]
fn group_messages_name_the_construct() {
    let start = LexError::InvalidStart {
        construct: GroupKind::ProcessingInstruction,
        at: 0,
    };
    assert_eq!(start.to_string(), "invalid start PI declaration");

    let end = LexError::InvalidEnd {
        construct: GroupKind::CData,
        at: 3,
    };
    assert_eq!(end.to_string(), "invalid end CDATA section");

    let comment = LexError::InvalidEnd {
        construct: GroupKind::Comment,
        at: 0,
    };
    assert_eq!(comment.to_string(), "invalid end comment");
}

#[test]
fn tag_messages_name_the_side() {
    let start = LexError::MissingCloseBracket {
        tag: TagSide::Start,
        at: 2,
    };
    assert_eq!(start.to_string(), "no closing bracket for start tag");

    let end = LexError::MissingCloseBracket {
        tag: TagSide::End,
        at: 2,
    };
    assert_eq!(end.to_string(), "no closing bracket for end tag");
}

#[test]
fn exhaustion_messages() {
    assert_eq!(
        LexError::StringArenaExhausted.to_string(),
        "string data exhausted"
    );
    assert_eq!(
        LexError::TokenArenaExhausted.to_string(),
        "token data exhausted"
    );
}

// === Locations ===

#[test]
fn exhaustion_has_no_location() {
    assert_eq!(LexError::StringArenaExhausted.location(), None);
    assert_eq!(LexError::TokenArenaExhausted.location(), None);
    assert_eq!(LexError::DocumentTooLarge { len: 1 }.location(), None);
    assert!(LexError::StringArenaExhausted.is_exhaustion());
    assert!(!LexError::DocumentTooLarge { len: 1 }.is_exhaustion());
}

#[test]
fn syntax_errors_carry_offset() {
    assert_eq!(LexError::InvalidName { at: 7 }.location(), Some(7));
    assert_eq!(LexError::MissingEqual { at: 9 }.location(), Some(9));
    assert_eq!(LexError::UnrecognizedMarkup { at: 4 }.location(), Some(4));
    assert_eq!(LexError::Cancelled { at: 12 }.location(), Some(12));
    assert!(!LexError::MissingEndQuote { at: 1 }.is_exhaustion());
}
