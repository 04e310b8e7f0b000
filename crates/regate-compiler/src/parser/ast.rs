//! Pattern syntax tree.

use std::fmt;

use regate_core::CharSet;

/// Parsed pattern.
///
/// `Concat` and `Alternate` always hold at least two children; the parser
/// flattens single-child sequences into the child itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// One code point drawn from the set.
    Set(CharSet),
    Star(Box<Ast>),
    Plus(Box<Ast>),
    Maybe(Box<Ast>),
    Concat(Vec<Ast>),
    Alternate(Vec<Ast>),
}

impl Ast {
    /// Sequence of `items`, or the item itself when there is only one.
    pub fn concat(mut items: Vec<Ast>) -> Ast {
        if items.len() == 1 {
            return items.remove(0);
        }
        Ast::Concat(items)
    }

    /// Choice between `items`, or the item itself when there is only one.
    pub fn alternate(mut items: Vec<Ast>) -> Ast {
        if items.len() == 1 {
            return items.remove(0);
        }
        Ast::Alternate(items)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Ast::Set(_) => 1,
            Ast::Star(child) | Ast::Plus(child) | Ast::Maybe(child) => 1 + child.size(),
            Ast::Concat(items) | Ast::Alternate(items) => {
                1 + items.iter().map(Ast::size).sum::<usize>()
            }
        }
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Set(set) => write!(f, "{set}"),
            Ast::Star(child) => write!(f, "Star({child})"),
            Ast::Plus(child) => write!(f, "Plus({child})"),
            Ast::Maybe(child) => write!(f, "Maybe({child})"),
            Ast::Concat(items) => write_list(f, "Concatenate", items),
            Ast::Alternate(items) => write_list(f, "Alternate", items),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, name: &str, items: &[Ast]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(")")
}
