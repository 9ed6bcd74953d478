//! Error type for contract and range violations.
//!
//! Only two failure kinds exist. Both are local, synchronous signals to the
//! immediate caller and are never recovered internally.

use std::fmt;

/// Result type alias using the workspace error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by typecompat operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was absent.
    ContractViolation {
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// A negative index, or an index past the end of a cursor.
    RangeViolation {
        /// The requested position.
        index: isize,
        /// How many elements the cursor produced before it stopped.
        produced: usize,
    },
}

impl Error {
    #[inline]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }

    #[inline]
    pub fn is_range_violation(&self) -> bool {
        matches!(self, Self::RangeViolation { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContractViolation { argument } => {
                write!(f, "argument '{argument}' must not be null")
            }
            Self::RangeViolation { index, produced } if *index < 0 => write!(
                f,
                "index {index} is out of range: index must be non-negative (cursor produced {produced} elements)"
            ),
            Self::RangeViolation { index, produced } => write!(
                f,
                "index {index} is out of range: cursor produced only {produced} elements"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Unwraps a required argument, failing with [`Error::ContractViolation`]
/// when it is absent.
///
/// Call this at entry of any operation whose argument may legitimately be
/// `None` at the type level but is required by the operation's contract.
pub fn argument_not_null<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(argument, "required argument was absent");
            Err(Error::ContractViolation { argument })
        }
    }
}

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod tests;
