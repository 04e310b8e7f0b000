//! Human-readable program dump for debugging and snapshot tests.

use std::fmt::Write as _;

use crate::{Program, SignalId, StateSig};

/// Render every table of `program` as text.
pub fn dump(program: &Program) -> String {
    let mut out = String::new();

    dump_header(&mut out, program);
    dump_subranges(&mut out, program);
    dump_signals(&mut out, program);
    dump_states(&mut out, program);
    dump_patterns(&mut out, program);

    out
}

fn dump_header(out: &mut String, program: &Program) {
    writeln!(out, "[matcher]").unwrap();
    writeln!(out, "name = {:?}", program.name()).unwrap();
    writeln!(out, "alphabet = 0x{:X}", program.alphabet_size()).unwrap();
    out.push('\n');
}

fn dump_subranges(out: &mut String, program: &Program) {
    writeln!(out, "[subranges]").unwrap();
    for s in program.subranges() {
        let name = s.to_string();
        writeln!(out, "{name:<12} ; {}", s.charset()).unwrap();
    }
    out.push('\n');
}

fn dump_signals(out: &mut String, program: &Program) {
    writeln!(out, "[signals]").unwrap();
    for (i, signal) in program.signals().iter().enumerate() {
        let id = SignalId::new(i as u32);
        let terms: Vec<String> = signal.subranges().iter().map(|s| s.to_string()).collect();
        writeln!(out, "{id} = {} ; {}", terms.join(" | "), signal.charset()).unwrap();
    }
    out.push('\n');
}

fn dump_states(out: &mut String, program: &Program) {
    writeln!(out, "[states]").unwrap();
    for state in program.states() {
        writeln!(out, "{}", format_state(state)).unwrap();
    }
    out.push('\n');
}

fn format_state(state: &StateSig) -> String {
    let mut line = format!("s({:3})", state.index());
    if state.is_initial() {
        line.push_str(" initial");
    }
    if !state.incoming().is_empty() {
        let edges: Vec<String> = state
            .incoming()
            .iter()
            .map(|t| format!("s({:3}) & {}", t.source, t.condition))
            .collect();
        write!(line, " <- {}", edges.join(", ")).unwrap();
    }
    line
}

fn dump_patterns(out: &mut String, program: &Program) {
    writeln!(out, "[patterns]").unwrap();
    for (i, pattern) in program.patterns().iter().enumerate() {
        let accepting: Vec<String> = pattern
            .accepting()
            .iter()
            .map(|s| format!("s({s:3})"))
            .collect();
        writeln!(
            out,
            "p{i} {:?} -> {}",
            pattern.source(),
            accepting.join(", ")
        )
        .unwrap();
    }
}
