//! Structural checks on a program before it is evaluated.

use regate_core::ALPHABET_SIZE;
use regate_signals::Program;

use super::error::RuntimeError;

/// Reject programs whose indices point outside their tables.
pub fn verify(program: &Program) -> Result<(), RuntimeError> {
    if program.alphabet_size() != ALPHABET_SIZE {
        return Err(invalid(format!(
            "alphabet size 0x{:X}, expected 0x{ALPHABET_SIZE:X}",
            program.alphabet_size()
        )));
    }

    let states = program.states().len();
    let signals = program.signals().len();

    for (i, state) in program.states().iter().enumerate() {
        if state.index() as usize != i {
            return Err(invalid(format!(
                "state at position {i} has index {}",
                state.index()
            )));
        }
        for t in state.incoming() {
            if t.source as usize >= states {
                return Err(invalid(format!(
                    "state {i} has predecessor {} out of {states} states",
                    t.source
                )));
            }
            if let Some(id) = t.condition.signal()
                && id.index() >= signals
            {
                return Err(invalid(format!(
                    "state {i} references signal {} out of {signals}",
                    id.get()
                )));
            }
        }
    }

    for (i, pattern) in program.patterns().iter().enumerate() {
        if let Some(&s) = pattern.accepting().iter().find(|&&s| s as usize >= states) {
            return Err(invalid(format!(
                "pattern {i} accepts in state {s} out of {states} states"
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> RuntimeError {
    RuntimeError::InvalidProgram(message)
}
