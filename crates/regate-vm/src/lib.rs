//! Reference evaluator for compiled regate programs.
//!
//! This crate simulates, one code point per step, what a synthesized matcher
//! computes: bytes are decoded by a permissive UTF-8 decoder, every range
//! signal is evaluated through its subranges, and each state's next liveness
//! is the OR of its incoming `(predecessor live AND condition)` terms.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{MatchResult, RuntimeError, Utf8Decoder, Vm, VmBuilder};
