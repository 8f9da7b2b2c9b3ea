use std::fmt;

/// The crate's result type.
pub type Result<T> = std::result::Result<T, FitError>;

/// Errors produced when fitting inputs are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// An input is invalid for semantic or domain reasons.
    InvalidInput(&'static str),

    /// A shape invariant was violated (e.g. mismatched lengths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "point", "dot operands").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            FitError::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for FitError {}
