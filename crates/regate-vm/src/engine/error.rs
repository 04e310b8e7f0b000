/// Errors raised before evaluation starts.
///
/// Malformed UTF-8 input is not an error; it is reported in
/// [`crate::MatchResult::utf8_error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The program's tables are inconsistent.
    #[error("invalid program: {0}")]
    InvalidProgram(String),
}
