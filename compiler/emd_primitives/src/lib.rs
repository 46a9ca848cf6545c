//! EMD Primitives - node kinds that turn GP trees into NetLogo.
//!
//! This crate provides:
//! - The `Primitive` trait every node kind implements
//! - `PrimitiveExecutor`, the seam a primitive evaluates its children through
//! - `EvalContext`, the framework handles passed through evaluation untouched
//! - Evaluation error types (`EvalError`, `EvalResult`)
//! - `PrimitiveRegistry` and the built-in NetLogo primitives
//!
//! # Architecture
//!
//! Node kinds are open for extension:
//! - New kinds are added by implementing `Primitive`
//! - They are made available to trees by registering them in a
//!   `PrimitiveRegistry`
//! - The registry doubles as the `ArityTable` trees are checked against
//!
//! # Carriers
//!
//! A primitive writes its output into the `ProgramText` it is handed. A
//! primitive with several children that must not see each other's output
//! evaluates each into its own `ProgramText::duplicate` and splices the
//! fragments together afterwards.

mod builtins;
mod context;
mod errors;
mod registry;

#[cfg(test)]
mod test_helpers;

pub use builtins::{ClosestWaterPatch, Terminal, FARMS, MYSELF, PATCHES, PATCHES_WITH_WATER};
pub use context::{EvalContext, Handle};
pub use emd_carrier::ProgramText;
pub use errors::{
    arity_mismatch, missing_child, primitive_failed, unknown_primitive, EvalError,
    EvalResult,
};
pub use registry::{PrimitiveRegistry, RegistryError};

/// Evaluates the children of the node currently being evaluated.
///
/// Implemented by the interpreter for each node it visits. Children are
/// addressed by position, in the order the tree lists them.
pub trait PrimitiveExecutor {
    /// Number of children the current node has.
    fn child_count(&self) -> usize;

    /// Evaluate child `index` into `data`.
    ///
    /// Errors from the child are returned unchanged.
    fn eval_child(&mut self, index: usize, data: &mut ProgramText) -> EvalResult;
}

/// A node kind.
///
/// Implementations hold no per-evaluation state: the same instance serves
/// every tree and every worker thread. Everything mutable lives in the
/// carrier.
pub trait Primitive: Send + Sync {
    /// Name used in tree notation, e.g. `closest-water-patch`.
    fn name(&self) -> &str;

    /// Number of children every node of this kind has.
    fn arity(&self) -> usize;

    /// Evaluate a node of this kind into `data`.
    ///
    /// `exec` evaluates the node's children; `ctx` carries framework handles
    /// that built-in primitives ignore.
    fn evaluate(
        &self,
        ctx: &EvalContext<'_>,
        data: &mut ProgramText,
        exec: &mut dyn PrimitiveExecutor,
    ) -> EvalResult;
}
