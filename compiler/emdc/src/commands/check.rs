//! The `check` command: parse and arity-check a file without generating.

use std::fmt;

use emd_eval::PrimitiveRegistry;
use emd_ir::parse_trees;

use super::CliError;

/// Shape of a well-formed tree file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub trees: usize,
    pub nodes: usize,
    /// Depth of the deepest tree. A lone terminal has depth 1.
    pub max_depth: usize,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trees, {} nodes, max depth {}",
            self.trees, self.nodes, self.max_depth
        )
    }
}

pub fn check_source(source: &str, registry: &PrimitiveRegistry) -> Result<CheckReport, CliError> {
    let trees = parse_trees(source, registry).map_err(|e| CliError::parse(source, e))?;
    Ok(trees.iter().fold(CheckReport::default(), |report, tree| CheckReport {
        trees: report.trees + 1,
        nodes: report.nodes + tree.node_count(),
        max_depth: report.max_depth.max(tree.depth()),
    }))
}
