use regate_core::CharSetError;

use crate::parser::{ParseError, render_diagnostic};

/// Errors that can occur while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Syntax that is recognized but deliberately not implemented.
    #[error("unsupported feature at offset {position}: {feature}")]
    UnsupportedFeature {
        position: usize,
        feature: &'static str,
    },

    #[error(transparent)]
    InvalidRange(#[from] CharSetError),

    /// An automaton grew past the configured limit.
    #[error("state limit exceeded: {states} states, limit is {limit}")]
    StateLimitExceeded { limit: usize, states: usize },

    /// Failure while compiling one pattern of a set.
    #[error("pattern {index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Render the error against the pattern it was raised for.
    ///
    /// Errors without a source position fall back to their `Display` text.
    pub fn render(&self, pattern: &str) -> String {
        match self {
            Error::Parse(e) => e.render(pattern),
            Error::UnsupportedFeature { position, feature } => {
                render_diagnostic(pattern, *position, &format!("unsupported feature: {feature}"))
            }
            Error::Pattern { source, .. } => source.render(pattern),
            Error::InvalidRange(_) | Error::StateLimitExceeded { .. } => self.to_string(),
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
