use super::*;

#[test]
fn point_span_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
    assert_eq!(span.start, 7);
}

#[test]
fn text_extracts_source_slice() {
    let source = "let x = 5;";
    assert_eq!(Span::new(4, 5).text(source), Some("x"));
    assert_eq!(Span::new(0, 3).text(source), Some("let"));
}

#[test]
fn text_rejects_out_of_bounds() {
    assert_eq!(Span::new(2, 40).text("abc"), None);
}

#[test]
fn debug_and_display_use_range_syntax() {
    let span = Span::new(3, 9);
    assert_eq!(format!("{span:?}"), "3..9");
    assert_eq!(format!("{span}"), "3..9");
}
