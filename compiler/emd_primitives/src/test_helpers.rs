//! Test helpers for primitive unit testing.
//!
//! Provides `RecordingExecutor` for testing primitives in isolation without
//! building a tree or running the interpreter.

use crate::{missing_child, EvalError, EvalResult, PrimitiveExecutor, ProgramText};

/// One `eval_child` call seen by a `RecordingExecutor`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildCall {
    /// Which child was requested.
    pub index: usize,
    /// Carrier contents when the child was entered.
    pub seen: String,
}

/// Mock executor whose children emit canned fragments.
///
/// Child `i` appends `outputs[i]` (or fails with it) and every call is
/// recorded in order, so tests can check which children ran, in what order,
/// and against which carrier state.
pub struct RecordingExecutor {
    outputs: Vec<Result<String, EvalError>>,
    calls: Vec<ChildCall>,
}

impl RecordingExecutor {
    pub fn new(outputs: Vec<Result<String, EvalError>>) -> Self {
        RecordingExecutor {
            outputs,
            calls: Vec::new(),
        }
    }

    /// Executor whose children all succeed with the given fragments.
    pub fn with_fragments(fragments: &[&str]) -> Self {
        Self::new(fragments.iter().map(|f| Ok((*f).to_string())).collect())
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> &[ChildCall] {
        &self.calls
    }

    /// Indices of the children evaluated so far, in order.
    pub fn order(&self) -> Vec<usize> {
        self.calls.iter().map(|c| c.index).collect()
    }
}

impl PrimitiveExecutor for RecordingExecutor {
    fn child_count(&self) -> usize {
        self.outputs.len()
    }

    fn eval_child(&mut self, index: usize, data: &mut ProgramText) -> EvalResult {
        self.calls.push(ChildCall {
            index,
            seen: data.contents().to_string(),
        });
        match self.outputs.get(index) {
            Some(Ok(fragment)) => {
                data.append(fragment);
                Ok(())
            }
            Some(Err(err)) => Err(err.clone()),
            None => Err(missing_child("<mock>", index, self.outputs.len())),
        }
    }
}
