//! The `prims` command.

use emd_eval::PrimitiveRegistry;

/// One `name/arity` line per primitive, in registration order.
pub fn list_primitives(registry: &PrimitiveRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|p| format!("{}/{}", p.name(), p.arity()))
        .collect()
}
