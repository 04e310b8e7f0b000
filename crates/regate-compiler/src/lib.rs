//! regate compiler: regex parser, NFAE reduction, and range-signal encoder.
//!
//! This crate provides the compilation pipeline for regate matchers:
//! - `parser` - lexer, recursive-descent grammar, and AST
//! - `nfae` - Thompson construction, epsilon elimination, minimization, reversal
//! - `encode` - deduplicated range-signal table
//! - `matcher` - multi-pattern composition into a [`regate_signals::Program`]

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod encode;
mod error;
mod matcher;
pub mod nfae;
pub mod parser;

#[cfg(test)]
mod matcher_tests;
#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
pub use matcher::{Matcher, MatcherBuilder, compile};
pub use nfae::{Nfae, StateId};
pub use parser::{Ast, ParseError, parse};
