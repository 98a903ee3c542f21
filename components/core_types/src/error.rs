//! Errors raised when a completion leaves a function unconsumed.
//!
//! Inside a function body every completion is an ordinary value. Only at the
//! function boundary does an abrupt completion that nobody caught turn into
//! an error the evaluator has to report.

use crate::ValueHandle;
use thiserror::Error;

/// An abrupt completion that reached a function boundary without a consumer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompletionError {
    /// A `throw` that no `try` statement caught
    #[error("uncaught exception: {}", describe_value(.0))]
    Uncaught(Option<ValueHandle>),

    /// A `break` with no enclosing statement matching its target
    #[error("illegal break statement{}", describe_target(.0))]
    UnmatchedBreak(String),

    /// A `continue` with no enclosing loop matching its target
    #[error("illegal continue statement{}", describe_target(.0))]
    UnmatchedContinue(String),
}

fn describe_value(value: &Option<ValueHandle>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    }
}

fn describe_target(target: &str) -> String {
    if target.is_empty() {
        String::new()
    } else {
        format!(": undefined label '{}'", target)
    }
}
