//! A tree-walking statement evaluator stub.
//!
//! Statements are evaluated purely through completion records: no host
//! panics or early returns carry control flow, only the `Completion` each
//! step hands back to its parent.

use core_types::{
    evaluate_statement_list, Completion, CompletionError, LabelSet, LoopStep, Value, ValueHandle,
};

/// Statement tree understood by the stub
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Expression statement producing a small integer; recorded when run
    Expr(i32),
    /// Empty statement (`;`)
    Empty,
    /// `{ ... }`
    Block(Vec<Stmt>),
    /// `label: stmt`
    Labelled(String, Box<Stmt>),
    /// Loop whose condition holds for `iterations` passes
    While { iterations: u32, body: Box<Stmt> },
    /// `break` / `break label` (empty string for none)
    Break(String),
    /// `continue` / `continue label`
    Continue(String),
    /// `return` / `return n`
    Return(Option<i32>),
    /// `throw "message"`
    Throw(String),
    /// `try { .. } catch { .. } finally { .. }`
    Try {
        block: Box<Stmt>,
        handler: Option<Box<Stmt>>,
        finalizer: Option<Box<Stmt>>,
    },
    /// Call of an immediately invoked function with this body
    Call(Box<Stmt>),
}

/// Evaluator with a side-effect log
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Values of every `Expr` statement evaluated, in order
    pub executed: Vec<i32>,
    /// Number of loop passes started
    pub iterations: u32,
}

impl Evaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a function body and convert its completion into a result
    pub fn call(&mut self, body: &Stmt) -> Result<Option<ValueHandle>, CompletionError> {
        self.evaluate(body).exit_function()
    }

    /// Evaluate one statement
    pub fn evaluate(&mut self, stmt: &Stmt) -> Completion {
        self.evaluate_labelled(stmt, LabelSet::new())
    }

    fn evaluate_labelled(&mut self, stmt: &Stmt, mut labels: LabelSet) -> Completion {
        match stmt {
            Stmt::Expr(n) => {
                self.executed.push(*n);
                Completion::normal(Some(Value::Smi(*n).into_handle()))
            }
            Stmt::Empty => Completion::empty(),
            Stmt::Block(statements) => {
                evaluate_statement_list(statements, |statement| self.evaluate(statement))
            }
            Stmt::Labelled(label, body) => {
                labels.push(label.as_str());
                self.evaluate_labelled(body, labels).exit_labelled(label)
            }
            Stmt::While { iterations, body } => self.evaluate_loop(*iterations, body, &labels),
            Stmt::Break(target) => Completion::break_to(target.as_str()),
            Stmt::Continue(target) => Completion::continue_to(target.as_str()),
            Stmt::Return(value) => {
                Completion::return_with(value.map(|n| Value::Smi(n).into_handle()))
            }
            Stmt::Throw(message) => Completion::throw(Value::String(message.clone()).into_handle()),
            Stmt::Try {
                block,
                handler,
                finalizer,
            } => {
                let mut result = self.evaluate(block);
                if let Some(handler) = handler.as_deref().filter(|_| result.is_throw()) {
                    result = self.evaluate(handler);
                }
                match finalizer {
                    Some(finalizer) => {
                        let finished = self.evaluate(finalizer);
                        if finished.is_abrupt() {
                            finished
                        } else {
                            result
                        }
                    }
                    None => result,
                }
            }
            Stmt::Call(body) => match self.call(body) {
                Ok(value) => Completion::normal(Some(
                    value.unwrap_or_else(|| Value::Undefined.into_handle()),
                )),
                Err(CompletionError::Uncaught(value)) => {
                    Completion::throw(value.unwrap_or_else(|| Value::Undefined.into_handle()))
                }
                // Unmatched targets surface as a thrown error message
                Err(err) => Completion::throw(Value::String(err.to_string()).into_handle()),
            },
        }
    }

    fn evaluate_loop(&mut self, iterations: u32, body: &Stmt, labels: &LabelSet) -> Completion {
        let mut value: Option<ValueHandle> = None;
        for _ in 0..iterations {
            self.iterations += 1;
            match self.evaluate(body).loop_step(labels) {
                LoopStep::Next(next) => {
                    if next.is_some() {
                        value = next;
                    }
                }
                LoopStep::Exit(completion) if completion.is_abrupt() => return completion,
                LoopStep::Exit(completion) => return completion.update_empty(value),
            }
        }
        Completion::normal(value)
    }
}
