//! Contract compliance tests for core_types
//!
//! These tests pin the propagation guarantees the statement evaluator
//! builds on.

use core_types::{
    evaluate_statement_list, Completion, CompletionError, CompletionType, LabelSet, LoopStep,
    Value,
};
use std::cell::Cell;
use std::rc::Rc;

#[cfg(test)]
mod completion_contract_tests {
    use super::*;

    /// Contract: exactly one kind per record; abrupt iff not normal
    #[test]
    fn test_abrupt_iff_not_normal() {
        let cases = [
            (Completion::empty(), false),
            (Completion::break_to(""), true),
            (Completion::continue_to(""), true),
            (Completion::return_with(None), true),
            (Completion::throw(Value::Undefined.into_handle()), true),
        ];
        for (completion, abrupt) in cases {
            assert_eq!(completion.is_abrupt(), abrupt, "{:?}", completion.kind);
        }
    }

    /// Contract: a return raised three blocks deep reaches the function
    /// boundary unchanged, carrying its original value
    #[test]
    fn test_return_propagates_through_nested_blocks() {
        let value = Value::Smi(99).into_handle();
        let frames_seen = Cell::new(0);

        let block = |inner: Completion| {
            frames_seen.set(frames_seen.get() + 1);
            evaluate_statement_list(
                vec![Completion::normal(Some(Value::Smi(0).into_handle())), inner],
                |c| c,
            )
        };
        let result = block(block(block(Completion::return_with(Some(Rc::clone(&value))))));

        assert_eq!(frames_seen.get(), 3);
        assert_eq!(result.kind, CompletionType::Return);
        let returned = result.exit_function().ok().flatten();
        assert!(returned.is_some_and(|v| Rc::ptr_eq(&v, &value)));
    }

    /// Contract: [Normal(1), Throw(err)] evaluates to Throw(err) and the
    /// statement after the throw never runs
    #[test]
    fn test_throw_short_circuits_statement_list() {
        let err = Value::String("err".to_string()).into_handle();
        let side_effects = Cell::new(0);
        let statements: Vec<Box<dyn Fn() -> Completion + '_>> = vec![
            Box::new(|| Completion::normal(Some(Value::Smi(1).into_handle()))),
            Box::new(|| Completion::throw(Rc::clone(&err))),
            Box::new(|| {
                side_effects.set(side_effects.get() + 1);
                Completion::empty()
            }),
        ];

        let result = evaluate_statement_list(statements.iter(), |statement| statement());

        assert_eq!(result, Completion::throw(Rc::clone(&err)));
        assert_eq!(side_effects.get(), 0);
    }

    /// Contract: an unlabelled break inside an unlabelled loop nested in a
    /// labelled loop is absorbed by the inner loop
    #[test]
    fn test_inner_loop_absorbs_unlabelled_break() {
        let inner = LabelSet::new();
        match Completion::break_to("").loop_step(&inner) {
            LoopStep::Exit(completion) => assert_eq!(completion.kind, CompletionType::Normal),
            LoopStep::Next(_) => panic!("break must exit the inner loop"),
        }
    }

    /// Contract: unmatched targets are not diagnosed in flight, only reported
    /// when they reach the function boundary
    #[test]
    fn test_unmatched_target_propagates_to_the_top() {
        let loop_labels = LabelSet::from_label("a");
        let escaped = match Completion::continue_to("missing").loop_step(&loop_labels) {
            LoopStep::Exit(completion) => completion.exit_labelled("b"),
            LoopStep::Next(_) => panic!("foreign continue must not be consumed"),
        };
        assert_eq!(
            escaped.exit_function(),
            Err(CompletionError::UnmatchedContinue("missing".to_string()))
        );
    }

    /// Contract: labelled statements never consume continue
    #[test]
    fn test_labelled_statement_ignores_continue() {
        let completion = Completion::continue_to("l").exit_labelled("l");
        assert_eq!(completion.kind, CompletionType::Continue("l".to_string()));
    }
}
