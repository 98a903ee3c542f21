//! Core value and completion types for statement evaluation.
//!
//! This crate provides the types the statement evaluator passes between
//! nested statement frames: the primitive values statements produce and the
//! completion records that carry `break`, `continue`, `return` and `throw`
//! outward without unwinding the host stack.
//!
//! # Overview
//!
//! - [`Value`] / [`ValueHandle`] - primitive JavaScript values, shared by handle
//! - [`Completion`] - the outcome of evaluating a statement
//! - [`CompletionType`] - normal, break, continue, return or throw
//! - [`LabelSet`] / [`LoopStep`] - what loops and labels need to consume completions
//! - [`CompletionError`] - an abrupt completion that escaped a function body
//!
//! # Examples
//!
//! ```
//! use core_types::{evaluate_statement_list, Completion, CompletionType, Value};
//!
//! // `1; throw "err"; 3;`
//! let statements = vec![
//!     Completion::normal(Some(Value::Smi(1).into_handle())),
//!     Completion::throw(Value::String("err".to_string()).into_handle()),
//!     Completion::normal(Some(Value::Smi(3).into_handle())),
//! ];
//! let result = evaluate_statement_list(statements, |c| c);
//!
//! assert_eq!(result.kind, CompletionType::Throw);
//! assert_eq!(result.value.as_deref(), Some(&Value::String("err".to_string())));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod completion;
mod error;
mod value;

pub use completion::{evaluate_statement_list, Completion, CompletionType, LabelSet, LoopStep};
pub use error::CompletionError;
pub use value::{Value, ValueHandle};
