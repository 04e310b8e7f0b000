//! Range signals and the conditions that reference them.

use std::fmt;

use regate_core::CharSet;
use serde::{Deserialize, Serialize};

use crate::SubRange;

/// Index of a [`RangeSignal`] in [`crate::Program::signals`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SignalId(u32);

impl SignalId {
    #[inline]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match({:3})", self.0)
    }
}

/// Boolean "input code point is in `charset`", built as an OR of subranges.
///
/// `charset` is the minimal side of a charset/complement pair; uses of the
/// other side reference the same signal through a negated [`Condition`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RangeSignal {
    charset: CharSet,
    subranges: Vec<SubRange>,
}

impl RangeSignal {
    /// Signal testing `charset`, decomposed into subranges.
    pub fn new(charset: CharSet) -> Self {
        let charset = charset.minimize();
        let subranges = SubRange::decompose(&charset);
        Self { charset, subranges }
    }

    #[inline]
    pub fn charset(&self) -> &CharSet {
        &self.charset
    }

    #[inline]
    pub fn subranges(&self) -> &[SubRange] {
        &self.subranges
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.subranges.iter().any(|s| s.contains(cp))
    }
}

/// Transition condition as seen from one use site.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Condition {
    /// Empty charset.
    Never,
    /// Full alphabet.
    Always,
    Signal { id: SignalId, negated: bool },
}

impl Condition {
    /// Evaluate against the current values of every signal.
    pub fn eval(self, signals: &[bool]) -> bool {
        match self {
            Condition::Never => false,
            Condition::Always => true,
            Condition::Signal { id, negated } => signals[id.index()] != negated,
        }
    }

    pub fn signal(self) -> Option<SignalId> {
        match self {
            Condition::Signal { id, .. } => Some(id),
            Condition::Never | Condition::Always => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Never => f.write_str("0"),
            Condition::Always => f.write_str("1"),
            Condition::Signal { id, negated: true } => write!(f, "!{id}"),
            Condition::Signal { id, negated: false } => write!(f, "{id}"),
        }
    }
}
