//! Thompson construction from the pattern AST.
//!
//! Each node becomes a fragment with its own initial and final sets, glued
//! together with epsilon edges. Fresh entry states are added for `*`, `+`
//! and `?` so that no edge ever leaves a child's initial state or enters a
//! child's final state from outside; either would let a fragment borrow
//! paths that belong to a sibling or to a loop inside the child.

use std::collections::BTreeSet;

use crate::parser::Ast;

use super::{Nfae, StateId};

struct Fragment {
    initial: BTreeSet<StateId>,
    finals: BTreeSet<StateId>,
}

impl Nfae {
    /// Build an automaton recognizing exactly the language of `ast`.
    pub fn from_ast(ast: &Ast) -> Nfae {
        let mut nfae = Nfae::new();
        let fragment = nfae.fragment(ast);
        nfae.initial = fragment.initial;
        nfae.finals = fragment.finals;
        nfae
    }

    fn fragment(&mut self, ast: &Ast) -> Fragment {
        match ast {
            Ast::Set(charset) => {
                let from = self.add_state();
                let to = self.add_state();
                self.add_transition(from, to, charset);
                Fragment {
                    initial: BTreeSet::from([from]),
                    finals: BTreeSet::from([to]),
                }
            }
            Ast::Star(child) => {
                let child = self.fragment(child);
                let hub = self.add_state();
                self.link(&BTreeSet::from([hub]), &child.initial);
                self.link(&child.finals, &BTreeSet::from([hub]));
                Fragment {
                    initial: BTreeSet::from([hub]),
                    finals: BTreeSet::from([hub]),
                }
            }
            Ast::Plus(child) => {
                let child = self.fragment(child);
                let entry = self.add_state();
                self.link(&BTreeSet::from([entry]), &child.initial);
                self.link(&child.finals, &child.initial);
                Fragment {
                    initial: BTreeSet::from([entry]),
                    finals: child.finals,
                }
            }
            Ast::Maybe(child) => {
                let child = self.fragment(child);
                let entry = self.add_state();
                self.link(&BTreeSet::from([entry]), &child.initial);
                let mut finals = child.finals;
                finals.insert(entry);
                Fragment {
                    initial: BTreeSet::from([entry]),
                    finals,
                }
            }
            Ast::Concat(items) => {
                let mut parts: Vec<Fragment> = items.iter().map(|item| self.fragment(item)).collect();
                for pair in parts.windows(2) {
                    self.link(&pair[0].finals, &pair[1].initial);
                }
                let initial = parts.first().map(|p| p.initial.clone()).unwrap_or_default();
                let finals = parts.pop().map(|p| p.finals).unwrap_or_default();
                Fragment { initial, finals }
            }
            Ast::Alternate(items) => {
                let mut initial = BTreeSet::new();
                let mut finals = BTreeSet::new();
                for item in items {
                    let part = self.fragment(item);
                    initial.extend(part.initial);
                    finals.extend(part.finals);
                }
                Fragment { initial, finals }
            }
        }
    }

    /// Epsilon edge from every state of `from` to every state of `to`.
    fn link(&mut self, from: &BTreeSet<StateId>, to: &BTreeSet<StateId>) {
        for &a in from {
            for &b in to {
                self.add_epsilon(a, b);
            }
        }
    }
}
