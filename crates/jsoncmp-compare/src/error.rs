//! Error types for the comparison pipeline.

use crate::input::Side;

/// Errors detected at the input boundary, before any diff runs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    /// One or both inputs were empty or whitespace-only.
    #[error("please provide JSON in both inputs")]
    Empty { first: bool, second: bool },

    /// An input was not valid JSON.
    #[error("invalid JSON in {side} input at line {line}: {message}")]
    Parse {
        side: Side,
        message: String,
        /// Character offset of the failure.
        offset: usize,
        /// 1-based line containing `offset`.
        line: usize,
    },
}

impl InputError {
    /// The side that failed to parse, if this is a parse error.
    pub fn side(&self) -> Option<Side> {
        match self {
            InputError::Parse { side, .. } => Some(*side),
            InputError::Empty { .. } => None,
        }
    }
}

/// Convenience alias for input results.
pub type InputResult<T> = Result<T, InputError>;
