//! Epsilon elimination pass.
//!
//! For every state, each charset edge `s -> t` is redirected to every state
//! in the epsilon closure of `t`. The initial set is closed under epsilon,
//! and a state becomes final when its closure contains a final state. The
//! result has no epsilon edges and recognizes the same language.

use std::collections::BTreeSet;

use super::{Nfae, StateId};

impl Nfae {
    pub fn strip_epsilon(&self) -> Nfae {
        let reachable = self.states();
        let closures: Vec<BTreeSet<StateId>> = (0..self.len())
            .map(|i| self.closure([StateId::new(i as u32)]))
            .collect();

        let mut out = Nfae::with_states(self.len());
        for &from in &reachable {
            for (&to, charset) in self.state(from).real() {
                for &target in &closures[to.index()] {
                    out.add_transition(from, target, charset);
                }
            }
        }

        out.initial = self.closure(self.initial.iter().copied());
        out.finals = reachable
            .iter()
            .copied()
            .filter(|id| closures[id.index()].iter().any(|c| self.is_final(*c)))
            .collect();
        out.compact()
    }
}
