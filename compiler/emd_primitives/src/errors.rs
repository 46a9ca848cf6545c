//! Error types for primitive evaluation.
//!
//! Factory functions (`missing_child()`, ...) are the preferred way to build
//! errors so that message wording stays in one place.
//!
//! Child failures are never wrapped: a primitive returns its child's error
//! as-is with `?`, so the error a caller sees is the one raised deepest in
//! the tree.

/// Result of evaluating a node. The output is left in the carrier.
pub type EvalResult = Result<(), EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A primitive asked for a child its node does not have.
    #[error("`{primitive}` has no child {index} (node has {count})")]
    MissingChild {
        primitive: String,
        index: usize,
        count: usize,
    },

    /// A node's child count differs from its primitive's declared arity.
    ///
    /// Trees built against the evaluating registry never hit this; it guards
    /// trees built against a different one.
    #[error("`{primitive}` expects {expected} children, node has {got}")]
    ArityMismatch {
        primitive: String,
        expected: usize,
        got: usize,
    },

    /// The tree names a primitive the evaluating registry does not know.
    #[error("unknown primitive `{name}`")]
    UnknownPrimitive { name: String },

    /// A primitive failed on its own account.
    #[error("`{primitive}` failed: {message}")]
    Primitive { primitive: String, message: String },
}

pub fn missing_child(primitive: &str, index: usize, count: usize) -> EvalError {
    EvalError::MissingChild {
        primitive: primitive.to_owned(),
        index,
        count,
    }
}

pub fn arity_mismatch(primitive: &str, expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        primitive: primitive.to_owned(),
        expected,
        got,
    }
}

pub fn unknown_primitive(name: &str) -> EvalError {
    EvalError::UnknownPrimitive {
        name: name.to_owned(),
    }
}

pub fn primitive_failed(primitive: &str, message: impl Into<String>) -> EvalError {
    EvalError::Primitive {
        primitive: primitive.to_owned(),
        message: message.into(),
    }
}
