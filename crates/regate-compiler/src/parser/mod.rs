//! Parser infrastructure for regate patterns.
//!
//! # Architecture
//!
//! - [`lexer`]: logos-based tokenizer producing span-based tokens
//! - `grammar`: recursive descent over the token stream, building an [`Ast`]
//! - `ast`: the five node kinds the automaton builder consumes
//!
//! Text is sliced from the source only when a token's value is needed
//! (escapes, literal characters).

mod ast;
mod error;
mod grammar;
pub mod lexer;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod grammar_tests;

pub use ast::Ast;
pub use error::ParseError;
pub(crate) use error::render_diagnostic;
pub use grammar::{DEFAULT_RECURSION_LIMIT, Parser, parse};
pub use lexer::{Token, TokenKind, lex, token_text};
