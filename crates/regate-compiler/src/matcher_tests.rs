use regate_signals::{Condition, SignalId, dump};

use crate::{Error, Matcher, ParseError, compile};

#[test]
fn sequence_program() {
    let program = compile("m", &["ab"]).unwrap();
    insta::assert_snapshot!(dump(&program), @r#"
    [matcher]
    name = "m"
    alphabet = 0x200000

    [subranges]
    b00001f41t41 ; a
    b00001f42t42 ; b

    [signals]
    match(  0) = b00001f42t42 ; b
    match(  1) = b00001f41t41 ; a

    [states]
    s(  0) <- s(  1) & match(  0)
    s(  1) <- s(  2) & match(  1)
    s(  2) initial

    [patterns]
    p0 "ab" -> s(  0)
    "#);
}

#[test]
fn star_is_a_single_looping_state() {
    let program = compile("m", &["a*"]).unwrap();
    let states = program.states();
    assert_eq!(states.len(), 1);
    assert!(states[0].is_initial());
    assert_eq!(states[0].incoming().len(), 1);
    assert_eq!(states[0].incoming()[0].source, 0);
    assert_eq!(program.patterns()[0].accepting(), &[0]);
}

#[test]
fn negated_class_uses_negated_signal() {
    let program = compile("m", &["[^a]", "a"]).unwrap();
    assert_eq!(program.signals().len(), 1);

    let conditions: Vec<Condition> = program
        .states()
        .iter()
        .flat_map(|s| s.incoming().iter().map(|t| t.condition))
        .collect();
    let sig = |negated| Condition::Signal {
        id: SignalId::new(0),
        negated,
    };
    assert_eq!(conditions, vec![sig(true), sig(false)]);
}

#[test]
fn dot_needs_no_signal() {
    let program = compile("m", &[".."]).unwrap();
    assert!(program.signals().is_empty());
    assert!(program.subranges().is_empty());
    assert!(
        program
            .states()
            .iter()
            .flat_map(|s| s.incoming())
            .all(|t| t.condition == Condition::Always)
    );
}

#[test]
fn patterns_get_disjoint_state_ranges() {
    let mut matcher = Matcher::new("m");
    assert_eq!(matcher.append_re("a+").unwrap(), 0);
    let first = matcher.states().len() as u32;
    assert_eq!(matcher.append_re("a*b").unwrap(), 1);

    let program = matcher.program();
    for (index, state) in program.states().iter().enumerate() {
        assert_eq!(state.index(), index as u32);
        let own_range = if state.index() < first {
            0..first
        } else {
            first..program.states().len() as u32
        };
        for t in state.incoming() {
            assert!(own_range.contains(&t.source));
        }
    }
    assert!(program.patterns()[0].accepting().iter().all(|&s| s < first));
    assert!(program.patterns()[1].accepting().iter().all(|&s| s >= first));
}

#[test]
fn shared_charsets_share_signals() {
    let program = compile("m", &["ab", "ba", "[ab]"]).unwrap();
    assert_eq!(program.signals().len(), 3);
    assert_eq!(program.subranges().len(), 3);
}

#[test]
fn failed_append_leaves_matcher_untouched() {
    let mut matcher = Matcher::new("m");
    matcher.append_re("ab").unwrap();
    let before = matcher.program();

    assert!(matcher.append_re("a(").is_err());
    assert!(matcher.append_re("x{2}").is_err());
    assert_eq!(matcher.program(), before);

    assert_eq!(matcher.append_re("c").unwrap(), 1);
}

#[test]
fn state_limit_per_pattern() {
    let mut matcher = Matcher::builder("m").state_limit(Some(3)).build();
    assert_eq!(
        matcher.append_re("abc"),
        Err(Error::StateLimitExceeded {
            limit: 3,
            states: 6
        })
    );
    assert!(matcher.states().is_empty());
}

#[test]
fn state_limit_catches_nested_growth() {
    let pattern = "((a|b|c)(d|e|f)(g|h|i))*";
    let mut matcher = Matcher::builder("m").state_limit(Some(8)).build();
    assert!(matches!(
        matcher.append_re(pattern),
        Err(Error::StateLimitExceeded { limit: 8, states }) if states > 8
    ));
    assert!(matcher.patterns().is_empty());

    let mut unlimited = Matcher::new("m");
    assert_eq!(unlimited.append_re(pattern), Ok(0));
}

#[test]
fn state_limit_for_composition() {
    let mut matcher = Matcher::builder("m").state_limit(Some(4)).build();
    matcher.append_re("ab").unwrap();
    assert_eq!(
        matcher.append_re("c"),
        Err(Error::StateLimitExceeded {
            limit: 4,
            states: 5
        })
    );
    assert_eq!(matcher.states().len(), 3);
    assert_eq!(matcher.patterns().len(), 1);
}

#[test]
fn recursion_limit_is_forwarded() {
    let mut matcher = Matcher::builder("m").recursion_limit(1).build();
    assert_eq!(
        matcher.append_re("((a))"),
        Err(Error::Parse(ParseError::new(1, "pattern nested too deeply")))
    );
    assert!(matcher.append_re("(a)").is_ok());
}

#[test]
fn minimization_can_be_disabled() {
    let mut plain = Matcher::builder("m").minimize(false).build();
    plain.append_re("a|b|c").unwrap();
    let mut reduced = Matcher::new("m");
    reduced.append_re("a|b|c").unwrap();
    assert!(plain.states().len() > reduced.states().len());
}

#[test]
fn compile_reports_failing_pattern() {
    let err = compile("m", &["a", "b)"]).unwrap_err();
    let Error::Pattern { index, source } = &err else {
        panic!("expected pattern error, got {err:?}");
    };
    assert_eq!(*index, 1);
    assert!(matches!(**source, Error::Parse(_)));
    assert_eq!(
        err.to_string(),
        "pattern 1: parse error at offset 1: unbalanced parenthesis"
    );
}

#[test]
fn compilation_is_deterministic() {
    let patterns = ["(ab|a)*b?", "[a-z]+@[a-z]+", "x|y|z", "[^\n]*"];
    let first = compile("m", &patterns).unwrap();
    let second = compile("m", &patterns).unwrap();
    assert_eq!(first, second);
    assert_eq!(dump(&first), dump(&second));
}

#[test]
fn empty_class_never_accepts() {
    let program = compile("m", &[r"[^\x00-\u1FFFFF]"]).unwrap();
    assert!(program.patterns()[0].accepting().is_empty());
    assert!(program.states().is_empty());
}
