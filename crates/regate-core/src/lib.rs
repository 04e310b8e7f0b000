#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for regate: code point ranges and character sets.
//!
//! Every layer above this one (parser, automaton builder, range-signal
//! encoder, runtime) speaks in terms of [`CharSet`], an immutable list of
//! half-open [`CodepointRange`]s over the 21-bit code point alphabet.

mod charset;
mod display;


pub use charset::{CharSet, CodepointRange};

/// Number of code points in the alphabet the automaton consumes.
///
/// This is the full 21-bit space, which is larger than the Unicode range
/// (`0x10FFFF`); the decoder maps every well-formed lead byte into it.
pub const ALPHABET_SIZE: u32 = 1 << 21;

/// Errors raised while constructing ranges and character sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharSetError {
    /// The range is empty, reversed, or extends past [`ALPHABET_SIZE`].
    #[error("invalid code point range [{start:#x}, {stop:#x})")]
    InvalidRange { start: u32, stop: u32 },
}
