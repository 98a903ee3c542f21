//! Unit tests for Completion and its consumption helpers

use core_types::{
    evaluate_statement_list, Completion, CompletionType, LabelSet, LoopStep, Value, ValueHandle,
};
use std::rc::Rc;

fn smi(n: i32) -> Option<ValueHandle> {
    Some(Value::Smi(n).into_handle())
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Completion::normal(None).kind, CompletionType::Normal);
        assert_eq!(Completion::break_to("a").kind, CompletionType::Break("a".to_string()));
        assert_eq!(Completion::continue_to("").kind, CompletionType::Continue(String::new()));
        assert_eq!(Completion::return_with(smi(1)).kind, CompletionType::Return);
        assert_eq!(Completion::throw(Value::Null.into_handle()).kind, CompletionType::Throw);
    }

    #[test]
    fn test_break_and_continue_start_without_value() {
        assert!(Completion::break_to("").value.is_none());
        assert!(Completion::continue_to("x").value.is_none());
    }

    #[test]
    fn test_throw_value_is_shared_not_copied() {
        let error = Value::String("err".to_string()).into_handle();
        let completion = Completion::throw(Rc::clone(&error));
        let forwarded = completion.clone();
        let carried = forwarded.value.as_ref().map(Rc::clone);
        assert!(carried.is_some_and(|v| Rc::ptr_eq(&v, &error)));
    }
}

#[cfg(test)]
mod statement_list_tests {
    use super::*;

    #[test]
    fn test_short_circuits_on_throw() {
        let error = Value::String("err".to_string()).into_handle();
        let mut evaluated = Vec::new();
        let statements = vec![
            Completion::normal(smi(1)),
            Completion::throw(Rc::clone(&error)),
            Completion::normal(smi(3)),
        ];
        let result = evaluate_statement_list(statements.into_iter().enumerate(), |(i, c)| {
            evaluated.push(i);
            c
        });

        assert_eq!(evaluated, vec![0, 1]);
        assert_eq!(result, Completion::throw(error));
    }

    #[test]
    fn test_empty_abrupt_inherits_running_value() {
        let statements = vec![Completion::normal(smi(7)), Completion::break_to("")];
        let result = evaluate_statement_list(statements, |c| c);
        assert_eq!(result.kind, CompletionType::Break(String::new()));
        assert_eq!(result.value, smi(7));
    }

    #[test]
    fn test_valued_abrupt_keeps_its_value() {
        let statements = vec![Completion::normal(smi(7)), Completion::return_with(smi(8))];
        let result = evaluate_statement_list(statements, |c| c);
        assert_eq!(result, Completion::return_with(smi(8)));
    }

    #[test]
    fn test_valueless_statements_keep_running_value() {
        let statements = vec![Completion::normal(smi(1)), Completion::empty(), Completion::empty()];
        let result = evaluate_statement_list(statements, |c| c);
        assert_eq!(result, Completion::normal(smi(1)));
    }
}

#[cfg(test)]
mod loop_and_label_tests {
    use super::*;

    #[test]
    fn test_labelled_loop_catches_its_own_continue() {
        let labels = LabelSet::from_label("outer");
        assert_eq!(
            Completion::continue_to("outer").loop_step(&labels),
            LoopStep::Next(None)
        );
    }

    #[test]
    fn test_loop_with_several_labels() {
        let labels: LabelSet = ["a", "b"].into_iter().collect();
        assert!(matches!(Completion::continue_to("b").loop_step(&labels), LoopStep::Next(_)));
        assert_eq!(
            Completion::break_to("a").loop_step(&labels),
            LoopStep::Exit(Completion::normal(None))
        );
    }

    #[test]
    fn test_inner_unlabelled_loop_absorbs_plain_break() {
        // outer: while (...) { while (...) { break; } }
        let inner = LabelSet::new();
        let outer = LabelSet::from_label("outer");

        let after_inner = match Completion::break_to("").loop_step(&inner) {
            LoopStep::Exit(completion) => completion,
            LoopStep::Next(_) => panic!("break must end the inner loop"),
        };
        assert!(!after_inner.is_abrupt());
        // The outer loop sees a normal body completion and keeps iterating.
        assert_eq!(after_inner.loop_step(&outer), LoopStep::Next(None));
    }

    #[test]
    fn test_labelled_break_passes_inner_loop() {
        let inner = LabelSet::new();
        let outer = LabelSet::from_label("outer");

        let escaped = match Completion::break_to("outer").loop_step(&inner) {
            LoopStep::Exit(completion) => completion,
            LoopStep::Next(_) => panic!("foreign break must leave the inner loop"),
        };
        assert_eq!(escaped.target(), Some("outer"));
        assert_eq!(
            escaped.loop_step(&outer),
            LoopStep::Exit(Completion::normal(None))
        );
    }

    #[test]
    fn test_labelled_block_absorbs_break() {
        // block: { 1; break block; }
        let body = evaluate_statement_list(
            vec![Completion::normal(smi(1)), Completion::break_to("block")],
            |c| c,
        );
        assert_eq!(body.exit_labelled("block"), Completion::normal(smi(1)));
    }
}
