//! Completion records: the result of evaluating a statement.
//!
//! The statement evaluator threads `break`, `continue`, `return` and `throw`
//! through nested statements by returning a [`Completion`] from every step
//! instead of unwinding the host stack. Each enclosing construct matches on
//! the completion's [`CompletionType`] and either absorbs it or hands it on
//! unchanged.
//!
//! Consumption sites:
//!
//! - statement lists: [`evaluate_statement_list`]
//! - loops: [`Completion::loop_step`]
//! - labelled statements: [`Completion::exit_labelled`]
//! - function bodies: [`Completion::exit_function`]
//!
//! `try` handlers are the evaluator's own business; they only need
//! [`Completion::is_throw`].

use crate::error::CompletionError;
use crate::ValueHandle;

/// How control leaves a statement.
///
/// `Break` and `Continue` carry their target label. An empty label targets
/// the nearest enclosing unlabelled construct of the matching kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CompletionType {
    /// Fall through to the next statement
    #[default]
    Normal,
    /// `break` / `break label`
    Break(String),
    /// `continue` / `continue label`
    Continue(String),
    /// `return`
    Return,
    /// `throw`
    Throw,
}

/// The outcome of evaluating one statement or statement list.
///
/// # Examples
///
/// ```
/// use core_types::{Completion, CompletionType, Value};
///
/// let done = Completion::normal(Some(Value::Smi(1).into_handle()));
/// assert!(!done.is_abrupt());
///
/// let thrown = Completion::throw(Value::String("oops".to_string()).into_handle());
/// assert!(thrown.is_throw());
/// assert_eq!(thrown.kind, CompletionType::Throw);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    /// How control leaves the statement
    pub kind: CompletionType,
    /// The value produced, if any
    pub value: Option<ValueHandle>,
}

impl Completion {
    /// A normal completion carrying `value`.
    pub fn normal(value: Option<ValueHandle>) -> Self {
        Self {
            kind: CompletionType::Normal,
            value,
        }
    }

    /// A normal completion with no value, e.g. from an empty statement.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A `break` to `target` (empty for an unlabelled `break`).
    pub fn break_to(target: impl Into<String>) -> Self {
        Self {
            kind: CompletionType::Break(target.into()),
            value: None,
        }
    }

    /// A `continue` to `target` (empty for an unlabelled `continue`).
    pub fn continue_to(target: impl Into<String>) -> Self {
        Self {
            kind: CompletionType::Continue(target.into()),
            value: None,
        }
    }

    /// A `return`, with `None` standing for `return;`.
    pub fn return_with(value: Option<ValueHandle>) -> Self {
        Self {
            kind: CompletionType::Return,
            value,
        }
    }

    /// A `throw` of `value`.
    pub fn throw(value: ValueHandle) -> Self {
        Self {
            kind: CompletionType::Throw,
            value: Some(value),
        }
    }

    /// Any completion other than normal.
    pub fn is_abrupt(&self) -> bool {
        self.kind != CompletionType::Normal
    }

    /// Returns true for a `throw` completion.
    pub fn is_throw(&self) -> bool {
        self.kind == CompletionType::Throw
    }

    /// The target label of a `break` or `continue`, `None` for other kinds.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            CompletionType::Break(target) | CompletionType::Continue(target) => Some(target),
            CompletionType::Normal | CompletionType::Return | CompletionType::Throw => None,
        }
    }

    /// Fill in `value` if this completion has none.
    ///
    /// This is how a statement list's running value survives a later
    /// statement that produces nothing, such as `1; break;`.
    pub fn update_empty(mut self, value: Option<ValueHandle>) -> Self {
        if self.value.is_none() {
            self.value = value;
        }
        self
    }

    /// Decide what a loop does with the completion of one pass of its body.
    ///
    /// `labels` is the loop's own label set. A `continue` or `break` whose
    /// target is empty or in `labels` belongs to this loop. A caught `break`
    /// ends the loop normally. Everything else leaves the loop untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{Completion, LabelSet, LoopStep};
    ///
    /// let labels = LabelSet::from_label("outer");
    /// assert!(matches!(Completion::continue_to("").loop_step(&labels), LoopStep::Next(_)));
    /// assert!(matches!(
    ///     Completion::break_to("outer").loop_step(&labels),
    ///     LoopStep::Exit(c) if !c.is_abrupt()
    /// ));
    /// assert!(matches!(
    ///     Completion::break_to("other").loop_step(&labels),
    ///     LoopStep::Exit(c) if c.is_abrupt()
    /// ));
    /// ```
    pub fn loop_step(self, labels: &LabelSet) -> LoopStep {
        match &self.kind {
            CompletionType::Normal => LoopStep::Next(self.value),
            CompletionType::Continue(target) if labels.matches(target) => {
                LoopStep::Next(self.value)
            }
            CompletionType::Break(target) if labels.matches(target) => {
                LoopStep::Exit(Completion::normal(self.value))
            }
            CompletionType::Break(_)
            | CompletionType::Continue(_)
            | CompletionType::Return
            | CompletionType::Throw => LoopStep::Exit(self),
        }
    }

    /// Consume a `break label` at the labelled statement named `label`.
    ///
    /// Only a `break` whose target is exactly `label` is absorbed; an
    /// unlabelled `break` belongs to a loop or `switch`, and `continue` is
    /// handled by the loop the label is attached to.
    pub fn exit_labelled(self, label: &str) -> Completion {
        match &self.kind {
            CompletionType::Break(target) if target == label => Completion::normal(self.value),
            CompletionType::Normal
            | CompletionType::Break(_)
            | CompletionType::Continue(_)
            | CompletionType::Return
            | CompletionType::Throw => self,
        }
    }

    /// Turn the completion of a function body into the call's result.
    ///
    /// `return` yields its value. Falling off the end yields `None`
    /// (`undefined`), whatever the last statement produced. Anything else
    /// escaped every handler and is reported as an error.
    pub fn exit_function(self) -> Result<Option<ValueHandle>, CompletionError> {
        match self.kind {
            CompletionType::Normal => Ok(None),
            CompletionType::Return => Ok(self.value),
            CompletionType::Throw => Err(CompletionError::Uncaught(self.value)),
            CompletionType::Break(target) => Err(CompletionError::UnmatchedBreak(target)),
            CompletionType::Continue(target) => Err(CompletionError::UnmatchedContinue(target)),
        }
    }
}

/// What a loop does after one pass of its body.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopStep {
    /// Go on to the update/condition step, remembering the body's value
    Next(Option<ValueHandle>),
    /// Leave the loop with this completion
    Exit(Completion),
}

/// The labels attached to the statement currently being evaluated.
///
/// `a: b: while (x) { ... }` gives the loop the label set `{a, b}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Create an empty label set
    pub fn new() -> Self {
        Self::default()
    }

    /// A label set holding one label.
    pub fn from_label(label: impl Into<String>) -> Self {
        Self {
            labels: vec![label.into()],
        }
    }

    /// Add a label; duplicates are ignored.
    pub fn push(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.contains(&label) {
            self.labels.push(label);
        }
    }

    /// Returns true if `label` is in the set.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Returns true if a `break`/`continue` aimed at `target` belongs here.
    pub fn matches(&self, target: &str) -> bool {
        target.is_empty() || self.contains(target)
    }

    /// Number of labels in the set
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no labels are attached.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = LabelSet::new();
        for label in iter {
            set.push(label);
        }
        set
    }
}

/// Evaluate statements left to right, stopping at the first abrupt completion.
///
/// The value of the last statement that produced one is carried forward as
/// the running value: it becomes the list's value, and it is filled into an
/// abrupt completion that has no value of its own.
///
/// # Examples
///
/// ```
/// use core_types::{evaluate_statement_list, Completion, Value};
///
/// let mut evaluated = 0;
/// let result = evaluate_statement_list([1, 2, 3], |n| {
///     evaluated += 1;
///     if n == 2 {
///         Completion::break_to("")
///     } else {
///         Completion::normal(Some(Value::Smi(n).into_handle()))
///     }
/// });
///
/// assert_eq!(evaluated, 2);
/// assert_eq!(result.value.as_deref(), Some(&Value::Smi(1)));
/// ```
pub fn evaluate_statement_list<S, F>(statements: impl IntoIterator<Item = S>, mut evaluate: F) -> Completion
where
    F: FnMut(S) -> Completion,
{
    let mut running: Option<ValueHandle> = None;
    for statement in statements {
        let completion = evaluate(statement);
        if completion.is_abrupt() {
            return completion.update_empty(running);
        }
        if completion.value.is_some() {
            running = completion.value;
        }
    }
    Completion::normal(running)
}
