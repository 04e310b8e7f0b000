//! State collapse and degenerate-state cleanup.
//!
//! Two states collapse when they agree on finality and on their outgoing
//! edges (same targets, same charsets). Running the collapse on the reversed
//! automaton merges states with identical incoming edges instead. Alternating
//! both directions until neither merges anything removes redundant states
//! without determinizing; the result is not guaranteed to be minimal.
//!
//! Nothing here bounds the size of the input automaton: deeply nested
//! alternations and concatenations can still leave a large state count after
//! collapsing. `MatcherBuilder::state_limit` is the explicit guard.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use regate_core::CharSet;

use super::{Nfae, StateId};

type Signature = (bool, Vec<(StateId, CharSet)>, Vec<StateId>);

impl Nfae {
    /// Collapse states with identical outgoing signatures until none remain.
    ///
    /// Returns `true` if any state was merged.
    pub fn reduce(&mut self) -> bool {
        let mut merged_any = false;
        loop {
            let order = self.states();
            let mut representative: Vec<StateId> =
                (0..self.len() as u32).map(StateId::new).collect();
            let mut seen: HashMap<Signature, StateId> = HashMap::new();
            let mut merged = false;

            for &id in &order {
                match seen.entry(self.signature(id)) {
                    Entry::Occupied(e) => {
                        representative[id.index()] = *e.get();
                        merged = true;
                    }
                    Entry::Vacant(e) => {
                        e.insert(id);
                    }
                }
            }

            if !merged {
                return merged_any;
            }
            *self = self.collapse(&order, &representative);
            merged_any = true;
        }
    }

    /// Alternate forward and backward collapse until a fixed point.
    pub fn minimize(&mut self) {
        loop {
            let mut changed = self.reduce();
            let mut reversed = self.reverse();
            changed |= reversed.reduce();
            *self = reversed.reverse();
            if !changed {
                break;
            }
        }
    }

    /// Drop initial+final states with no edges in or out, provided another
    /// initial+final state with outgoing edges accepts the empty string too.
    ///
    /// Returns `true` if anything was removed.
    pub fn prune_degenerate(&mut self) -> bool {
        let order = self.states();
        let targets: BTreeSet<StateId> = order
            .iter()
            .flat_map(|&id| {
                let state = self.state(id);
                state
                    .real()
                    .keys()
                    .chain(state.epsilon().iter())
                    .copied()
                    .collect::<Vec<_>>()
            })
            .collect();

        let accepting_initial: Vec<StateId> =
            self.initial.intersection(&self.finals).copied().collect();
        let has_dominating = accepting_initial
            .iter()
            .any(|&id| !self.state(id).is_terminal());
        if !has_dominating {
            return false;
        }

        let degenerate: Vec<StateId> = accepting_initial
            .into_iter()
            .filter(|&id| self.state(id).is_terminal() && !targets.contains(&id))
            .collect();
        if degenerate.is_empty() {
            return false;
        }

        for id in &degenerate {
            self.initial.remove(id);
            self.finals.remove(id);
        }
        *self = self.compact();
        true
    }

    fn signature(&self, id: StateId) -> Signature {
        let state = self.state(id);
        (
            self.is_final(id),
            state.real().iter().map(|(&to, cs)| (to, cs.clone())).collect(),
            state.epsilon().iter().copied().collect(),
        )
    }

    /// Rebuild with every state replaced by its representative.
    fn collapse(&self, order: &[StateId], representative: &[StateId]) -> Nfae {
        let rep = |id: StateId| representative[id.index()];
        let mut out = Nfae::with_states(self.len());
        for &id in order.iter().filter(|&&id| rep(id) == id) {
            let state = self.state(id);
            for (&to, charset) in state.real() {
                out.add_transition(id, rep(to), charset);
            }
            for &to in state.epsilon() {
                out.add_epsilon(id, rep(to));
            }
        }
        out.initial = self.initial.iter().map(|&id| rep(id)).collect();
        out.finals = self.finals.iter().map(|&id| rep(id)).collect();
        out.compact()
    }
}
