//! Recoverable errors for the checked classification entry points.
//!
//! The plain predicates are total and never fail. These errors are only
//! produced by the `try_*`/`check_*` helpers offered to callers that would
//! rather validate input than rely on a caller contract.

use thiserror::Error;

/// Errors reported by checked character helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacterError {
    /// The code unit is not one of `0-9`, `A-F`, `a-f`.
    #[error("code unit {0:#06X} is not a hexadecimal digit")]
    NotHexDigit(u16),

    /// A radix outside the supported `2..=36` range.
    #[error("radix {0} is outside the supported range 2..=36")]
    InvalidRadix(u32),
}

/// Result type for checked character helpers
pub type CharacterResult<T> = Result<T, CharacterError>;
