//! Composed matcher output: states with incoming transitions, patterns,
//! deduplicated range signals, and the global subrange list.

use std::collections::BTreeSet;

use regate_core::ALPHABET_SIZE;
use serde::{Deserialize, Serialize};

use crate::{Condition, RangeSignal, SignalId, SubRange};

/// Index of a [`Pattern`] in [`Program::patterns`], in registration order.
pub type PatternId = usize;

/// One incoming edge: "if `source` was live and `condition` holds, this
/// state becomes live".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub source: u32,
    pub condition: Condition,
}

/// A state of the composed matcher.
///
/// `index` is global across all patterns; `incoming` only references states
/// of the same pattern.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StateSig {
    index: u32,
    initial: bool,
    incoming: Vec<Transition>,
}

impl StateSig {
    pub fn new(index: u32, initial: bool) -> Self {
        Self {
            index,
            initial,
            incoming: Vec::new(),
        }
    }

    pub fn push_incoming(&mut self, source: u32, condition: Condition) {
        self.incoming.push(Transition { source, condition });
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Whether the state is live before any code point is consumed.
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    #[inline]
    pub fn incoming(&self) -> &[Transition] {
        &self.incoming
    }
}

/// A registered regular expression.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Pattern {
    source: String,
    accepting: Vec<u32>,
}

impl Pattern {
    pub fn new(source: impl Into<String>, accepting: Vec<u32>) -> Self {
        Self {
            source: source.into(),
            accepting,
        }
    }

    /// The regex text as registered.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Global indices of states that signal a match when live at end of string.
    #[inline]
    pub fn accepting(&self) -> &[u32] {
        &self.accepting
    }
}

/// Everything a consumer needs to emit or simulate a matcher.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Program {
    name: String,
    states: Vec<StateSig>,
    patterns: Vec<Pattern>,
    signals: Vec<RangeSignal>,
    subranges: Vec<SubRange>,
    alphabet_size: u32,
}

impl Program {
    /// Assemble a program. The global subrange list is derived from the
    /// signals: sorted by `(block, start, end)` with duplicates removed.
    pub fn new(
        name: impl Into<String>,
        states: Vec<StateSig>,
        patterns: Vec<Pattern>,
        signals: Vec<RangeSignal>,
    ) -> Self {
        let subranges: BTreeSet<SubRange> = signals
            .iter()
            .flat_map(|s| s.subranges().iter().copied())
            .collect();
        Self {
            name: name.into(),
            states,
            patterns,
            signals,
            subranges: subranges.into_iter().collect(),
            alphabet_size: ALPHABET_SIZE,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn states(&self) -> &[StateSig] {
        &self.states
    }

    #[inline]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[inline]
    pub fn signals(&self) -> &[RangeSignal] {
        &self.signals
    }

    pub fn signal(&self, id: SignalId) -> Option<&RangeSignal> {
        self.signals.get(id.index())
    }

    #[inline]
    pub fn subranges(&self) -> &[SubRange] {
        &self.subranges
    }

    #[inline]
    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    /// Liveness vector before any input: one entry per state.
    pub fn initial_vector(&self) -> Vec<bool> {
        self.states.iter().map(StateSig::is_initial).collect()
    }
}
