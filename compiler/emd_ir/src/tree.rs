//! Tree arena and its builder.
//!
//! A [`Tree`] is built bottom-up: children are added before the node that
//! owns them, and [`TreeBuilder::finish`] names the root. Every node is
//! checked against an [`ArityTable`] as it is added, so a finished tree
//! always has exactly as many children per node as its primitive declares.

use std::fmt;

use crate::node_id::{ChildRange, NodeId};

/// Declared child counts for primitive names.
///
/// Implemented by the primitive registry; tests may use a plain map.
pub trait ArityTable {
    /// The declared arity of `name`, or `None` if the name is unknown.
    fn arity(&self, name: &str) -> Option<usize>;
}

impl<S: std::hash::BuildHasher> ArityTable for std::collections::HashMap<&str, usize, S> {
    fn arity(&self, name: &str) -> Option<usize> {
        self.get(name).copied()
    }
}

/// Structural error raised while building a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unknown primitive `{name}`")]
    UnknownPrimitive { name: String },

    #[error("`{name}` expects {expected} children, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("{id} is not a node of this tree")]
    DanglingChild { id: NodeId },

    #[error("{id} already has a parent")]
    SharedChild { id: NodeId },

    #[error("tree has no nodes")]
    EmptyTree,

    #[error("{count} node(s) are not reachable from the root")]
    Detached { count: usize },
}

/// A single node: the primitive it instantiates and its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    name: Box<str>,
    children: ChildRange,
}

impl Node {
    /// Name of the primitive this node instantiates.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of children (always the primitive's declared arity).
    #[inline]
    pub fn arity(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }
}

/// An immutable GP expression tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
    child_list: Vec<NodeId>,
    root: NodeId,
}

impl Tree {
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if `id` was not produced by the builder of this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a node by id, or `None` if it does not belong to this tree.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Ordered children of `id`.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.child_list[self.node(id).children.as_range()]
    }

    /// Number of nodes in the tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self.root, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(self.children(id).iter().map(|&child| (child, depth + 1)));
        }
        max
    }
}

/// Writes the tree in prefix notation: `name(child, child)`.
///
/// Iterative so that very deep trees print without recursion.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step {
            Node(NodeId),
            Text(&'static str),
        }

        let mut stack = vec![Step::Node(self.root)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Text(text) => f.write_str(text)?,
                Step::Node(id) => {
                    f.write_str(self.node(id).name())?;
                    let children = self.children(id);
                    if children.is_empty() {
                        continue;
                    }
                    f.write_str("(")?;
                    stack.push(Step::Text(")"));
                    for (i, &child) in children.iter().enumerate().rev() {
                        stack.push(Step::Node(child));
                        if i > 0 {
                            stack.push(Step::Text(", "));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Bottom-up tree constructor.
pub struct TreeBuilder<'a> {
    arities: &'a dyn ArityTable,
    nodes: Vec<Node>,
    child_list: Vec<NodeId>,
    has_parent: Vec<bool>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(arities: &'a dyn ArityTable) -> Self {
        TreeBuilder {
            arities,
            nodes: Vec::new(),
            child_list: Vec::new(),
            has_parent: Vec::new(),
        }
    }

    /// Add a node whose children were already added to this builder.
    ///
    /// Fails if `name` is unknown, if `children.len()` differs from the
    /// declared arity, or if a child is foreign or already attached.
    pub fn node(&mut self, name: &str, children: &[NodeId]) -> Result<NodeId, BuildError> {
        let expected = self
            .arities
            .arity(name)
            .ok_or_else(|| BuildError::UnknownPrimitive {
                name: name.to_owned(),
            })?;
        if children.len() != expected {
            return Err(BuildError::ArityMismatch {
                name: name.to_owned(),
                expected,
                got: children.len(),
            });
        }

        for (i, &child) in children.iter().enumerate() {
            match self.has_parent.get(child.index()) {
                None => return Err(BuildError::DanglingChild { id: child }),
                Some(true) => return Err(BuildError::SharedChild { id: child }),
                Some(false) if children[..i].contains(&child) => {
                    return Err(BuildError::SharedChild { id: child })
                }
                Some(false) => {}
            }
        }
        for &child in children {
            self.has_parent[child.index()] = true;
        }

        let range = ChildRange::new(to_u32(self.child_list.len()), to_u32(children.len()));
        self.child_list.extend_from_slice(children);

        let id = NodeId::new(to_u32(self.nodes.len()));
        self.nodes.push(Node {
            name: name.into(),
            children: range,
        });
        self.has_parent.push(false);
        Ok(id)
    }

    /// Finish the tree rooted at `root`.
    ///
    /// Every other node added to the builder must be a descendant of `root`.
    pub fn finish(self, root: NodeId) -> Result<Tree, BuildError> {
        if self.nodes.is_empty() {
            return Err(BuildError::EmptyTree);
        }
        match self.has_parent.get(root.index()) {
            None => return Err(BuildError::DanglingChild { id: root }),
            Some(true) => return Err(BuildError::SharedChild { id: root }),
            Some(false) => {}
        }
        let detached = self.has_parent.iter().filter(|&&attached| !attached).count() - 1;
        if detached > 0 {
            return Err(BuildError::Detached { count: detached });
        }

        Ok(Tree {
            nodes: self.nodes,
            child_list: self.child_list,
            root,
        })
    }
}

/// Arena sizes are bounded by memory long before `u32::MAX` nodes.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
