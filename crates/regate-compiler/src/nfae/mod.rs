//! Nondeterministic automaton with epsilon transitions.
//!
//! States live in an arena and are addressed by [`StateId`]. Every pass
//! (epsilon elimination, collapse, reversal) builds a fresh arena holding only
//! the states reachable from the initial set, numbered in breadth-first
//! order, so results are reproducible and never reference stale states.
//!
//! Edges are stored per source: one merged [`CharSet`] per target, plus a set
//! of epsilon targets. An edge with an empty charset is never stored.

mod build;
mod dot;
mod epsilon_elim;
mod minimize;


use std::collections::{BTreeMap, BTreeSet, VecDeque};

use regate_core::CharSet;

/// Handle of a state inside one [`Nfae`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(u32);

impl StateId {
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

/// Outgoing edges of one state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    real: BTreeMap<StateId, CharSet>,
    epsilon: BTreeSet<StateId>,
}

impl State {
    /// Charset-labelled edges, one minimized charset per target.
    #[inline]
    pub fn real(&self) -> &BTreeMap<StateId, CharSet> {
        &self.real
    }

    #[inline]
    pub fn epsilon(&self) -> &BTreeSet<StateId> {
        &self.epsilon
    }

    /// No outgoing edges of either kind.
    pub fn is_terminal(&self) -> bool {
        self.real.is_empty() && self.epsilon.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nfae {
    states: Vec<State>,
    initial: BTreeSet<StateId>,
    finals: BTreeSet<StateId>,
}

impl Nfae {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_states(count: usize) -> Self {
        Self {
            states: vec![State::default(); count],
            initial: BTreeSet::new(),
            finals: BTreeSet::new(),
        }
    }

    pub fn add_state(&mut self) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::default());
        id
    }

    /// Add `from -> to` on `charset`, merging with an existing edge to the
    /// same target. Empty charsets are dropped.
    pub fn add_transition(&mut self, from: StateId, to: StateId, charset: &CharSet) {
        if charset.is_empty() {
            return;
        }
        let edges = &mut self.states[from.index()].real;
        let merged = match edges.get(&to) {
            Some(existing) => existing.union(charset),
            None => charset.minimize(),
        };
        edges.insert(to, merged);
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from.index()].epsilon.insert(to);
    }

    pub fn mark_initial(&mut self, id: StateId) {
        self.initial.insert(id);
    }

    pub fn mark_final(&mut self, id: StateId) {
        self.finals.insert(id);
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    #[inline]
    pub fn initial(&self) -> &BTreeSet<StateId> {
        &self.initial
    }

    #[inline]
    pub fn finals(&self) -> &BTreeSet<StateId> {
        &self.finals
    }

    #[inline]
    pub fn is_final(&self, id: StateId) -> bool {
        self.finals.contains(&id)
    }

    /// Arena size, including states no longer reachable.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States reachable from the initial set, in breadth-first order.
    pub fn states(&self) -> Vec<StateId> {
        let mut seen = vec![false; self.states.len()];
        let mut order = Vec::new();
        let mut queue: VecDeque<StateId> = VecDeque::new();

        for &id in &self.initial {
            if !seen[id.index()] {
                seen[id.index()] = true;
                queue.push_back(id);
            }
        }

        while let Some(id) = queue.pop_front() {
            order.push(id);
            let state = self.state(id);
            for &next in state.real.keys().chain(state.epsilon.iter()) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }

        order
    }

    /// Number of charset-labelled edges between reachable states.
    pub fn transition_count(&self) -> usize {
        self.states()
            .into_iter()
            .map(|id| self.state(id).real.len())
            .sum()
    }

    /// States reachable from `roots` through epsilon edges only, roots included.
    pub fn closure(&self, roots: impl IntoIterator<Item = StateId>) -> BTreeSet<StateId> {
        let mut out = BTreeSet::new();
        let mut stack: Vec<StateId> = roots.into_iter().collect();
        while let Some(id) = stack.pop() {
            if out.insert(id) {
                stack.extend(self.state(id).epsilon.iter().copied());
            }
        }
        out
    }

    /// Copy of the reachable part, renumbered in breadth-first order.
    pub fn compact(&self) -> Nfae {
        let order = self.states();
        let mut map = vec![None; self.states.len()];
        for (new, old) in order.iter().enumerate() {
            map[old.index()] = Some(StateId(new as u32));
        }
        let remap = |id: StateId| map[id.index()];

        let mut out = Nfae::with_states(order.len());
        for &old in &order {
            let Some(from) = remap(old) else { continue };
            let state = self.state(old);
            for (&to, charset) in &state.real {
                if let Some(to) = remap(to) {
                    out.add_transition(from, to, charset);
                }
            }
            for &to in &state.epsilon {
                if let Some(to) = remap(to) {
                    out.add_epsilon(from, to);
                }
            }
        }
        out.initial = self.initial.iter().filter_map(|&id| remap(id)).collect();
        out.finals = self.finals.iter().filter_map(|&id| remap(id)).collect();
        out
    }

    /// Flip every edge and swap the initial and final sets.
    ///
    /// The result recognizes the reversed language and holds only states
    /// that can reach a final state of `self`.
    pub fn reverse(&self) -> Nfae {
        let order = self.states();
        let mut out = Nfae::with_states(self.states.len());
        for &from in &order {
            let state = self.state(from);
            for (&to, charset) in &state.real {
                out.add_transition(to, from, charset);
            }
            for &to in &state.epsilon {
                out.add_epsilon(to, from);
            }
        }
        let reachable: BTreeSet<StateId> = order.into_iter().collect();
        out.initial = self.finals.intersection(&reachable).copied().collect();
        out.finals = self.initial.clone();
        out.compact()
    }

    /// Simulate the automaton on `input`, one code point per step.
    #[cfg(test)]
    pub(crate) fn accepts(&self, input: &str) -> bool {
        let mut current = self.closure(self.initial.iter().copied());
        for c in input.chars() {
            let cp = c as u32;
            let next: Vec<StateId> = current
                .iter()
                .flat_map(|&id| self.state(id).real.iter())
                .filter(|(_, charset)| charset.contains(cp))
                .map(|(&to, _)| to)
                .collect();
            if next.is_empty() {
                return false;
            }
            current = self.closure(next);
        }
        current.iter().any(|id| self.finals.contains(id))
    }
}
