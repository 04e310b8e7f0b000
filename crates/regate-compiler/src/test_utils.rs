use crate::nfae::Nfae;
use crate::parser::parse;

/// Thompson automaton for `pattern`, panicking on parse errors.
pub fn nfae(pattern: &str) -> Nfae {
    Nfae::from_ast(&parse(pattern).unwrap())
}

/// Every string over `alphabet` of length at most `max_len`, shortest first.
pub fn strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |c| {
                    let mut s = prefix.clone();
                    s.push(*c);
                    s
                })
            })
            .collect();
        out.extend(layer.iter().cloned());
    }
    out
}

/// Patterns exercising every operator and their interactions.
pub const SAMPLE_PATTERNS: &[&str] = &[
    "ab",
    "a*",
    "a+",
    "a|b",
    "a*|b*",
    "(ab|a)*b?",
    "a(b|c)*a",
    "[ab]+c?",
    "(ca*)*",
    "(ca*)?",
    "((a|b)*c)+",
    "a?b?c?",
    "(a*|b*)c",
    "[^a]*",
    "(a+b)*",
    ".a.",
    "(ab*)?c",
    "(a(bc)*)?b",
    "(a|b)*|c",
    "[a-b]c|c[^c]",
];
