//! Deduplicated range-signal table.
//!
//! Every charset used by a transition is interned here. The table stores the
//! cheaper of the charset and its complement (fewer subranges, then the
//! smaller range list), so a charset and its complement always resolve to the
//! same signal and differ only in the negation flag at the use site.

use indexmap::IndexMap;
use regate_core::CharSet;
use regate_signals::{Condition, RangeSignal, SignalId, SubRange};

/// Builds the signal table, assigning ids in first-use order.
#[derive(Debug, Default, Clone)]
pub struct RangeTable {
    /// Map from minimal charset to signal id.
    lookup: IndexMap<CharSet, SignalId>,
}

impl RangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a transition charset, returning the condition to test for it.
    ///
    /// The empty set and the full alphabet need no signal.
    pub fn intern(&mut self, charset: &CharSet) -> Condition {
        let (minimal, negated) = match Self::choose(charset) {
            Some(choice) => choice,
            None if charset.is_empty() => return Condition::Never,
            None => return Condition::Always,
        };

        let next = SignalId::new(self.lookup.len() as u32);
        let id = *self.lookup.entry(minimal).or_insert(next);
        Condition::Signal { id, negated }
    }

    /// The charset a signal would test for `charset` and whether uses must
    /// negate it, or `None` when either side needs no subranges.
    pub fn choose(charset: &CharSet) -> Option<(CharSet, bool)> {
        let normal = charset.minimize();
        let complement = normal.complement();
        let normal_count = SubRange::count(&normal);
        let complement_count = SubRange::count(&complement);
        if normal_count == 0 || complement_count == 0 {
            return None;
        }

        if (normal_count, &normal) <= (complement_count, &complement) {
            Some((normal, false))
        } else {
            Some((complement, true))
        }
    }

    /// Number of distinct signals.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Signals in id order.
    pub fn signals(&self) -> Vec<RangeSignal> {
        self.lookup
            .keys()
            .map(|charset| RangeSignal::new(charset.clone()))
            .collect()
    }
}
