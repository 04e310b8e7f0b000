use super::grammar::Parser;
use super::{Ast, ParseError, parse};
use crate::Error;

fn ast(source: &str) -> String {
    parse(source).unwrap().to_string()
}

fn parse_error(source: &str) -> (usize, String) {
    match parse(source) {
        Err(Error::Parse(ParseError { position, message })) => (position, message),
        other => panic!("expected parse error for {source:?}, got {other:?}"),
    }
}

fn unsupported(source: &str) -> (usize, &'static str) {
    match parse(source) {
        Err(Error::UnsupportedFeature { position, feature }) => (position, feature),
        other => panic!("expected unsupported feature for {source:?}, got {other:?}"),
    }
}

#[test]
fn sequences_and_alternation() {
    assert_eq!(ast("ab"), "Concatenate(a, b)");
    assert_eq!(ast("a|b"), "Alternate(a, b)");
    assert_eq!(ast("ab|c"), "Alternate(Concatenate(a, b), c)");
}

#[test]
fn single_items_are_flattened() {
    assert_eq!(ast("a"), "a");
    assert_eq!(ast("((a))"), "a");
    assert!(matches!(parse("(a)").unwrap(), Ast::Set(_)));
}

#[test]
fn quantifiers() {
    insta::assert_snapshot!(ast("a*b+c?(de)*"), @"Concatenate(Star(a), Plus(b), Maybe(c), Star(Concatenate(d, e)))");
}

#[test]
fn dot_matches_everything() {
    assert_eq!(ast("."), ".");
    assert_eq!(ast(".a"), "Concatenate(., a)");
}

#[test]
fn shorthand_escapes() {
    assert_eq!(ast(r"\d"), "[0-9]");
    assert_eq!(ast(r"\w+"), "Plus([0-9A-Z_a-z])");
    assert_eq!(ast(r"\s"), r"[\x09-\r ]");
}

#[test]
fn control_and_literal_escapes() {
    assert_eq!(ast(r"\a\t\."), r"Concatenate(\x07, \x09, \.)");
    assert_eq!(ast(r"\x41\u0020AC"), r"Concatenate(A, \u0020AC)");
    assert_eq!(ast(r"\u10FFFF"), r"\u10FFFF");
    assert_eq!(ast("é"), r"\xE9");
}

#[test]
fn characters_reserved_only_inside_classes_are_literal() {
    assert_eq!(ast("a-]"), r"Concatenate(a, \-, \])");
    assert_eq!(ast("a{"), "Concatenate(a, {)");
    assert_eq!(ast("{2}"), "Concatenate({, 2, })");
}

#[test]
fn classes() {
    assert_eq!(ast("[a-z]"), "[a-z]");
    assert_eq!(ast("[^a]"), "[^a]");
    assert_eq!(ast("[a-cx]"), "[a-cx]");
    assert_eq!(ast(r"[\d_]"), "[0-9_]");
}

#[test]
fn class_edge_items_are_literal() {
    assert_eq!(ast("[]a]"), r"[\]a]");
    assert_eq!(ast("[^]a]"), r"[^\]a]");
    assert_eq!(ast("[a-]"), r"[\-a]");
    assert_eq!(ast("[-a]"), r"[\-a]");
    assert_eq!(ast("[.*(]"), r"[\(\*\.]");
}

#[test]
fn malformed_ranges() {
    assert_eq!(parse_error("[z-a]"), (1, "malformed range".into()));
    assert_eq!(parse_error(r"[\d-z]"), (1, "malformed range".into()));
    assert_eq!(parse_error(r"[a-\w]"), (3, "malformed range".into()));
}

#[test]
fn unterminated_constructs() {
    assert_eq!(parse_error("(ab"), (0, "unterminated group".into()));
    assert_eq!(parse_error("x[ab"), (1, "unterminated character class".into()));
    assert_eq!(parse_error("[]"), (0, "unterminated character class".into()));
}

#[test]
fn missing_expressions() {
    assert_eq!(parse_error(""), (0, "expected an expression".into()));
    assert_eq!(parse_error("a|"), (2, "expected an expression".into()));
    assert_eq!(parse_error("()"), (1, "expected an expression".into()));
    assert_eq!(parse_error("*a"), (0, "nothing to repeat".into()));
    assert_eq!(parse_error("a**"), (2, "multiple repeat".into()));
}

#[test]
fn trailing_input() {
    assert_eq!(parse_error("ab)"), (2, "unbalanced parenthesis".into()));
}

#[test]
fn bad_escapes() {
    assert_eq!(parse_error(r"\x4"), (0, "incomplete escape sequence".into()));
    assert_eq!(parse_error(r"ab\"), (2, "incomplete escape sequence".into()));
    assert_eq!(parse_error(r"\u200000"), (0, "code point out of range".into()));
}

#[test]
fn unsupported_syntax() {
    assert_eq!(unsupported("a{2}"), (1, "bounded repetition"));
    assert_eq!(unsupported("a{2,}"), (1, "bounded repetition"));
    assert_eq!(unsupported("a*{,3}"), (2, "bounded repetition"));
    assert_eq!(unsupported("a*?"), (2, "lazy quantifier"));
    assert_eq!(unsupported("a??"), (2, "lazy quantifier"));
    assert_eq!(unsupported("(?:a)"), (1, "group modifier"));
    assert_eq!(unsupported("^a"), (0, "anchor"));
    assert_eq!(unsupported("a$"), (1, "anchor"));
}

#[test]
fn recursion_limit() {
    let err = Parser::new("((a))").with_recursion_limit(1).parse();
    assert_eq!(
        err,
        Err(Error::Parse(ParseError::new(1, "pattern nested too deeply")))
    );
    assert!(Parser::new("((a))").with_recursion_limit(2).parse().is_ok());
}

#[test]
fn deep_nesting_fails_cleanly() {
    let source = format!("{}a{}", "(".repeat(1000), ")".repeat(1000));
    assert!(matches!(parse(&source), Err(Error::Parse(_))));
}

#[test]
fn ast_size_counts_nodes() {
    assert_eq!(parse("a(b|c)*").unwrap().size(), 6);
}
