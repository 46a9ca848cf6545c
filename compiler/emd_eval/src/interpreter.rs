//! Tree-walking interpreter.

use emd_ir::{NodeId, Tree};
use emd_primitives::{
    arity_mismatch, missing_child, unknown_primitive, EvalContext, EvalResult, PrimitiveExecutor,
    PrimitiveRegistry, ProgramText,
};

use crate::stack::ensure_sufficient_stack;

/// Evaluates one tree for one framework call.
///
/// Holds only shared references; all mutable state is in the carriers passed
/// to [`Interpreter::eval`], so an interpreter can be reused across calls.
pub struct Interpreter<'a> {
    tree: &'a Tree,
    registry: &'a PrimitiveRegistry,
    ctx: EvalContext<'a>,
}

impl<'a> Interpreter<'a> {
    pub fn new(tree: &'a Tree, registry: &'a PrimitiveRegistry, ctx: EvalContext<'a>) -> Self {
        Interpreter {
            tree,
            registry,
            ctx,
        }
    }

    /// Evaluate the whole tree into `data`.
    pub fn eval(&self, data: &mut ProgramText) -> EvalResult {
        self.eval_node(self.tree.root(), data)
    }

    /// Evaluate the subtree rooted at `id` into `data`.
    #[tracing::instrument(level = "trace", skip(self, data), fields(name = self.tree.node(id).name()))]
    pub fn eval_node(&self, id: NodeId, data: &mut ProgramText) -> EvalResult {
        ensure_sufficient_stack(|| {
            let node = self.tree.node(id);
            let primitive = self
                .registry
                .get(node.name())
                .ok_or_else(|| unknown_primitive(node.name()))?;
            if primitive.arity() != node.arity() {
                return Err(arity_mismatch(node.name(), primitive.arity(), node.arity()));
            }

            let mut exec = NodeExecutor {
                interpreter: self,
                name: node.name(),
                children: self.tree.children(id),
            };
            primitive.evaluate(&self.ctx, data, &mut exec)
        })
    }
}

/// Child executor for the node currently being evaluated.
struct NodeExecutor<'i, 'a> {
    interpreter: &'i Interpreter<'a>,
    name: &'a str,
    children: &'a [NodeId],
}

impl PrimitiveExecutor for NodeExecutor<'_, '_> {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn eval_child(&mut self, index: usize, data: &mut ProgramText) -> EvalResult {
        let Some(&child) = self.children.get(index) else {
            return Err(missing_child(self.name, index, self.children.len()));
        };
        self.interpreter.eval_node(child, data)
    }
}
