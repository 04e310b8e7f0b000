//! Runtime engine for executing compiled programs.

mod decoder;
mod error;
mod verify;
mod vm;

#[cfg(test)]
mod decoder_tests;

pub use decoder::Utf8Decoder;
pub use error::RuntimeError;
pub use vm::{MatchResult, Vm, VmBuilder};
