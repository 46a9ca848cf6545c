//! Framework handles passed through evaluation.
//!
//! The GP framework that owns a tree supplies per-call objects: its
//! evolution state, the automatically-defined-function stack, the individual
//! being scored, and the problem. Evaluation forwards them to every
//! primitive but never looks inside; a registrar-supplied primitive that
//! knows the concrete types may downcast them.

use std::any::Any;
use std::fmt;

/// An opaque, read-only framework object.
pub type Handle<'a> = Option<&'a (dyn Any + Send + Sync)>;

/// Context for one evaluation call.
#[derive(Clone, Copy, Default)]
pub struct EvalContext<'a> {
    /// Index of the worker evaluating this tree. Used for routing only.
    pub thread: usize,
    pub state: Handle<'a>,
    pub stack: Handle<'a>,
    pub individual: Handle<'a>,
    pub problem: Handle<'a>,
}

impl<'a> EvalContext<'a> {
    /// Context with no framework objects attached.
    pub fn for_thread(thread: usize) -> Self {
        EvalContext {
            thread,
            ..EvalContext::default()
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: &'a (dyn Any + Send + Sync)) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: &'a (dyn Any + Send + Sync)) -> Self {
        self.stack = Some(stack);
        self
    }

    #[must_use]
    pub fn with_individual(mut self, individual: &'a (dyn Any + Send + Sync)) -> Self {
        self.individual = Some(individual);
        self
    }

    #[must_use]
    pub fn with_problem(mut self, problem: &'a (dyn Any + Send + Sync)) -> Self {
        self.problem = Some(problem);
        self
    }
}

impl fmt::Debug for EvalContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalContext")
            .field("thread", &self.thread)
            .field("state", &self.state.is_some())
            .field("stack", &self.stack.is_some())
            .field("individual", &self.individual.is_some())
            .field("problem", &self.problem.is_some())
            .finish()
    }
}
