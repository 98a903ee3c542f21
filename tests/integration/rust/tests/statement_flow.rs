//! Statement Flow Integration Tests
//!
//! Tests completion records travelling through an evaluator:
//! Statement tree -> Completion -> loops, labels, try, call boundary -> Result

use core_types::{CompletionError, CompletionType, Value};
use integration_tests::evaluator::{Evaluator, Stmt};

fn block(statements: Vec<Stmt>) -> Stmt {
    Stmt::Block(statements)
}

fn labelled(label: &str, body: Stmt) -> Stmt {
    Stmt::Labelled(label.to_string(), Box::new(body))
}

fn while_loop(iterations: u32, body: Stmt) -> Stmt {
    Stmt::While {
        iterations,
        body: Box::new(body),
    }
}

fn brk(label: &str) -> Stmt {
    Stmt::Break(label.to_string())
}

fn cont(label: &str) -> Stmt {
    Stmt::Continue(label.to_string())
}

fn try_catch(body: Stmt, handler: Stmt) -> Stmt {
    Stmt::Try {
        block: Box::new(body),
        handler: Some(Box::new(handler)),
        finalizer: None,
    }
}

/// Test: Block value is the last non-empty value
#[test]
fn test_block_value() {
    let mut eval = Evaluator::new();
    let result = eval.evaluate(&block(vec![Stmt::Expr(1), Stmt::Expr(2), Stmt::Empty]));
    assert_eq!(result.kind, CompletionType::Normal);
    assert_eq!(result.value.as_deref(), Some(&Value::Smi(2)));
}

/// Test: Unlabelled break is absorbed by the innermost loop
#[test]
fn test_nested_break_absorbed_by_inner_loop() {
    let mut eval = Evaluator::new();
    let program = while_loop(
        3,
        block(vec![
            Stmt::Expr(1),
            while_loop(5, block(vec![Stmt::Expr(2), brk(""), Stmt::Expr(99)])),
            Stmt::Expr(3),
        ]),
    );
    let result = eval.evaluate(&program);

    assert_eq!(result.kind, CompletionType::Normal);
    assert_eq!(eval.executed, vec![1, 2, 3, 1, 2, 3, 1, 2, 3]);
    assert_eq!(result.value.as_deref(), Some(&Value::Smi(3)));
}

/// Test: Labelled break skips the inner loop and exits the outer one
#[test]
fn test_labelled_break_exits_outer_loop() {
    let mut eval = Evaluator::new();
    let program = labelled(
        "outer",
        while_loop(
            3,
            block(vec![
                Stmt::Expr(1),
                while_loop(5, block(vec![brk("outer"), Stmt::Expr(99)])),
                Stmt::Expr(98),
            ]),
        ),
    );
    let result = eval.evaluate(&program);

    assert_eq!(result.kind, CompletionType::Normal);
    assert_eq!(eval.executed, vec![1]);
    assert_eq!(eval.iterations, 2);
    assert_eq!(result.value.as_deref(), Some(&Value::Smi(1)));
}

/// Test: Labelled continue restarts the outer loop
#[test]
fn test_labelled_continue_restarts_outer_loop() {
    let mut eval = Evaluator::new();
    let program = labelled(
        "outer",
        while_loop(
            2,
            block(vec![
                Stmt::Expr(1),
                while_loop(4, block(vec![cont("outer"), Stmt::Expr(99)])),
                Stmt::Expr(98),
            ]),
        ),
    );
    let result = eval.evaluate(&program);

    assert_eq!(result.kind, CompletionType::Normal);
    assert_eq!(eval.executed, vec![1, 1]);
}

/// Test: Break out of a labelled block without any loop
#[test]
fn test_labelled_block_break() {
    let mut eval = Evaluator::new();
    let program = block(vec![
        labelled("done", block(vec![Stmt::Expr(1), brk("done"), Stmt::Expr(2)])),
        Stmt::Expr(3),
    ]);
    let result = eval.evaluate(&program);

    assert_eq!(eval.executed, vec![1, 3]);
    assert_eq!(result.value.as_deref(), Some(&Value::Smi(3)));
}

/// Test: Return passes through three nested blocks and a loop
#[test]
fn test_return_through_nested_blocks() {
    let mut eval = Evaluator::new();
    let body = block(vec![block(vec![block(vec![
        Stmt::Expr(1),
        while_loop(10, block(vec![Stmt::Return(Some(7)), Stmt::Expr(2)])),
        Stmt::Expr(3),
    ])])]);

    let result = eval.call(&body).expect("call failed");
    assert_eq!(result.as_deref(), Some(&Value::Smi(7)));
    assert_eq!(eval.executed, vec![1]);
    assert_eq!(eval.iterations, 1);
}

/// Test: Function falling off the end returns undefined
#[test]
fn test_call_without_return() {
    let mut eval = Evaluator::new();
    let result = eval.call(&block(vec![Stmt::Expr(5)])).expect("call failed");
    assert!(result.is_none());
}

/// Test: Throw short-circuits the rest of the program
#[test]
fn test_throw_short_circuits() {
    let mut eval = Evaluator::new();
    let body = block(vec![
        Stmt::Expr(1),
        while_loop(3, block(vec![Stmt::Throw("boom".to_string()), Stmt::Expr(2)])),
        Stmt::Expr(3),
    ]);
    let result = eval.call(&body);

    assert_eq!(eval.executed, vec![1]);
    match result {
        Err(CompletionError::Uncaught(Some(value))) => {
            assert_eq!(*value, Value::String("boom".to_string()));
        }
        other => panic!("Expected uncaught exception, got {:?}", other),
    }
}

/// Test: Catch handler turns a throw back into normal flow
#[test]
fn test_catch_resumes_normal_flow() {
    let mut eval = Evaluator::new();
    let program = block(vec![
        try_catch(
            block(vec![Stmt::Throw("boom".to_string()), Stmt::Expr(1)]),
            Stmt::Expr(2),
        ),
        Stmt::Expr(3),
    ]);
    let result = eval.evaluate(&program);

    assert_eq!(result.kind, CompletionType::Normal);
    assert_eq!(eval.executed, vec![2, 3]);
}

/// Test: Abrupt finally block overrides the try block's completion
#[test]
fn test_finally_overrides_return() {
    let mut eval = Evaluator::new();
    let body = Stmt::Try {
        block: Box::new(Stmt::Return(Some(1))),
        handler: None,
        finalizer: Some(Box::new(Stmt::Return(Some(2)))),
    };
    let result = eval.call(&body).expect("call failed");
    assert_eq!(result.as_deref(), Some(&Value::Smi(2)));
}

/// Test: Normal finally block keeps the try block's completion
#[test]
fn test_finally_keeps_break() {
    let mut eval = Evaluator::new();
    let program = while_loop(
        5,
        Stmt::Try {
            block: Box::new(brk("")),
            handler: None,
            finalizer: Some(Box::new(Stmt::Expr(4))),
        },
    );
    let result = eval.evaluate(&program);

    assert_eq!(result.kind, CompletionType::Normal);
    assert_eq!(eval.iterations, 1);
    assert_eq!(eval.executed, vec![4]);
}

/// Test: Break inside a function body cannot reach the caller's loop
#[test]
fn test_break_does_not_cross_call_boundary() {
    let mut eval = Evaluator::new();
    let result = eval.call(&block(vec![brk("outer")]));
    assert_eq!(result, Err(CompletionError::UnmatchedBreak("outer".to_string())));

    let result = eval.call(&cont(""));
    assert_eq!(result, Err(CompletionError::UnmatchedContinue(String::new())));
}

/// Test: Exception thrown inside a call is caught by the caller
#[test]
fn test_exception_propagates_out_of_call() {
    let mut eval = Evaluator::new();
    let inner = block(vec![Stmt::Expr(1), Stmt::Throw("inner".to_string())]);
    let program = try_catch(
        block(vec![Stmt::Call(Box::new(inner)), Stmt::Expr(2)]),
        Stmt::Expr(3),
    );
    let result = eval.evaluate(&program);

    assert_eq!(result.kind, CompletionType::Normal);
    assert_eq!(eval.executed, vec![1, 3]);
    assert_eq!(result.value.as_deref(), Some(&Value::Smi(3)));
}

/// Test: Return value of a call becomes the expression's value
#[test]
fn test_call_value_in_block() {
    let mut eval = Evaluator::new();
    let program = block(vec![
        Stmt::Call(Box::new(Stmt::Return(Some(9)))),
        Stmt::Empty,
    ]);
    let result = eval.evaluate(&program);
    assert_eq!(result.value.as_deref(), Some(&Value::Smi(9)));
}
