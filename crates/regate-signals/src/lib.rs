#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Range-signal tables and state transition lists for regate.
//!
//! This crate is the contract between the compiler and whatever consumes its
//! output (a hardware description renderer, the reference VM, a test bench):
//! - [`SubRange`]: membership test for an inclusive range inside one 64-code-point block
//! - [`RangeSignal`]: OR of subranges, one per distinct minimal charset
//! - [`Condition`]: a transition's reference to a signal, possibly negated
//! - [`StateSig`]: a state with its incoming `(predecessor, condition)` list
//! - [`Pattern`]: a regex and its accepting states
//! - [`Program`]: all of the above for one composed matcher

pub mod dump;
mod program;
mod signal;
mod subrange;


pub use dump::dump;
pub use program::{Pattern, PatternId, Program, StateSig, Transition};
pub use signal::{Condition, RangeSignal, SignalId};
pub use subrange::{BLOCK_SIZE, SubRange, TESTABLE_LIMIT};

/// Errors raised when constructing signal tables by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    #[error("subrange [{start}, {end}] of block {block} is out of bounds")]
    SubRangeOutOfBounds { block: u32, start: u8, end: u8 },
}
