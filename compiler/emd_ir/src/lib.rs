//! EMD IR - expression trees for generated agent rules.
//!
//! A GP individual is a tree of primitive nodes. This crate provides:
//! - `Tree`: flat arena of nodes addressed by `NodeId`, immutable once built
//! - `TreeBuilder`: bottom-up construction with arity checking
//! - `ArityTable`: the lookup the builder validates against
//! - `syntax`: the prefix notation trees are written in, e.g.
//!   `closest-water-patch(patches-with-water, farms)`
//!
//! Nodes only carry the name of the primitive they instantiate. Resolving a
//! name to behavior is the evaluator's job.

mod node_id;
mod span;
pub mod syntax;
mod tree;

pub use node_id::{ChildRange, NodeId};
pub use span::Span;
pub use syntax::{parse_tree, parse_trees, ParseError, ParseErrorKind};
pub use tree::{ArityTable, BuildError, Node, Tree, TreeBuilder};
