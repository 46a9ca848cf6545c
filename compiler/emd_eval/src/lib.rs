//! EMD Eval - generates NetLogo from GP trees.
//!
//! This crate provides the tree-walking interpreter that evaluates a
//! [`Tree`] against a [`PrimitiveRegistry`], writing into a [`ProgramText`].
//!
//! # Architecture
//!
//! - `Interpreter`: resolves each node's primitive and hands it an executor
//!   for the node's children. Depth-first, synchronous, one carrier per call.
//! - `generate`: evaluates one tree into a fresh carrier.
//! - `generate_batch`: evaluates many trees, in parallel on a scoped rayon
//!   pool when configured. Each tree gets its own carrier; only the tree
//!   slice and the registry are shared, read-only.

mod batch;
mod interpreter;
mod stack;

pub use batch::{generate_batch, BatchConfig};
pub use interpreter::Interpreter;

pub use emd_ir::Tree;
pub use emd_primitives::{EvalContext, EvalError, EvalResult, PrimitiveRegistry, ProgramText};

/// Generate the NetLogo fragment for `tree`.
///
/// Starts from an empty carrier and returns its final contents.
pub fn generate(
    tree: &Tree,
    registry: &PrimitiveRegistry,
    ctx: EvalContext<'_>,
) -> Result<String, EvalError> {
    let mut data = ProgramText::new();
    Interpreter::new(tree, registry, ctx).eval(&mut data)?;
    Ok(data.into_string())
}
