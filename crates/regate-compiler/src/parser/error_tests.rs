use super::{ParseError, parse};
use crate::Error;

#[test]
fn render_points_at_offending_character() {
    let source = "ab**";
    let err = parse(source).unwrap_err();
    let rendered = err.render(source);

    assert!(rendered.contains("error: multiple repeat"), "{rendered}");
    assert!(rendered.contains("1 | ab**"), "{rendered}");
    assert!(rendered.contains("^ multiple repeat"), "{rendered}");
}

#[test]
fn render_unsupported_feature() {
    let source = "x{1,2}";
    let rendered = parse(source).unwrap_err().render(source);
    assert!(rendered.contains("unsupported feature: bounded repetition"), "{rendered}");
}

#[test]
fn render_at_end_of_input() {
    let rendered = ParseError::new(2, "expected an expression").render("a|");
    assert!(rendered.contains("expected an expression"), "{rendered}");
}

#[test]
fn display_includes_offset() {
    let err = Error::from(ParseError::new(3, "unterminated group"));
    assert_eq!(err.to_string(), "parse error at offset 3: unterminated group");
}
