//! Graphviz export for debugging.

use std::fmt::Write as _;

use super::Nfae;

impl Nfae {
    /// Render the reachable part as a `dot` digraph.
    ///
    /// Initial states are boxes, final states have a double border, epsilon
    /// edges are dotted and charset edges are labelled with the charset.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        writeln!(out, "digraph nfae {{").unwrap();
        writeln!(out, "  rankdir=LR;").unwrap();

        let order = self.states();
        for &id in &order {
            let shape = if self.initial.contains(&id) { "box" } else { "circle" };
            let peripheries = if self.is_final(id) { 2 } else { 1 };
            writeln!(
                out,
                "  s{} [shape={shape}, peripheries={peripheries}];",
                id.get()
            )
            .unwrap();
        }

        for &id in &order {
            let state = self.state(id);
            for (to, charset) in state.real() {
                let label = escape(&charset.to_string());
                writeln!(out, "  s{} -> s{} [label=\"{label}\"];", id.get(), to.get()).unwrap();
            }
            for to in state.epsilon() {
                writeln!(out, "  s{} -> s{} [style=dotted];", id.get(), to.get()).unwrap();
            }
        }

        out.push_str("}\n");
        out
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
