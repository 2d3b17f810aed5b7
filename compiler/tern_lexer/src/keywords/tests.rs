use super::*;

#[test]
fn every_listed_keyword_resolves() {
    for kw in KEYWORDS {
        let kind = lookup(kw);
        assert!(kind.is_some(), "{kw} should be a keyword");
        assert!(kind.is_some_and(|k| k.is_keyword()));
    }
}

#[test]
fn keyword_kinds() {
    assert_eq!(lookup("let"), Some(TokenKind::Let));
    assert_eq!(lookup("const"), Some(TokenKind::Const));
    assert_eq!(lookup("fn"), Some(TokenKind::Fn));
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
}

#[test]
fn near_misses_are_identifiers() {
    for text in ["Let", "LET", "lets", "le", "f", "iff", "constant", "elseif", ""] {
        assert_eq!(lookup(text), None, "{text:?} must not be a keyword");
    }
}
