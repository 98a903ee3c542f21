//! Unit tests for CompletionError

use core_types::{Completion, CompletionError, Value};
use std::error::Error;

#[test]
fn test_errors_implement_std_error() {
    let err: Box<dyn Error> = Box::new(CompletionError::UnmatchedBreak("loop".to_string()));
    assert_eq!(err.to_string(), "illegal break statement: undefined label 'loop'");
    assert!(err.source().is_none());
}

#[test]
fn test_uncaught_carries_thrown_value() {
    let thrown = Value::Smi(13).into_handle();
    match Completion::throw(thrown.clone()).exit_function() {
        Err(CompletionError::Uncaught(Some(value))) => assert_eq!(value, thrown),
        other => panic!("expected uncaught exception, got {:?}", other),
    }
}

#[test]
fn test_uncaught_message_uses_display() {
    let err = CompletionError::Uncaught(Some(Value::Double(0.25).into_handle()));
    assert_eq!(err.to_string(), "uncaught exception: 0.25");
}
