//! Primitive registry for looking up node kinds by name.

use std::sync::Arc;

use emd_ir::ArityTable;
use rustc_hash::FxHashMap;

use crate::builtins::{ClosestWaterPatch, FARMS, MYSELF, PATCHES, PATCHES_WITH_WATER};
use crate::Primitive;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("primitive `{0}` is already registered")]
    Duplicate(String),
}

/// Registry mapping names to primitive definitions.
///
/// Shared read-only by every evaluation once populated. Primitives are kept
/// in registration order so listings are stable.
#[derive(Clone, Default)]
pub struct PrimitiveRegistry {
    primitives: Vec<Arc<dyn Primitive>>,
    by_name: FxHashMap<String, usize>,
}

impl PrimitiveRegistry {
    /// Create a registry with no primitives.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in NetLogo primitive.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        let builtins: [Arc<dyn Primitive>; 5] = [
            Arc::new(ClosestWaterPatch),
            Arc::new(PATCHES),
            Arc::new(PATCHES_WITH_WATER),
            Arc::new(FARMS),
            Arc::new(MYSELF),
        ];
        for primitive in builtins {
            // Built-in names are distinct.
            let _ = registry.register_shared(primitive);
        }
        registry
    }

    /// Register a primitive under its own name.
    pub fn register(&mut self, primitive: impl Primitive + 'static) -> Result<(), RegistryError> {
        self.register_shared(Arc::new(primitive))
    }

    /// Register an already shared primitive.
    pub fn register_shared(&mut self, primitive: Arc<dyn Primitive>) -> Result<(), RegistryError> {
        let name = primitive.name().to_owned();
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        tracing::debug!(name = %name, arity = primitive.arity(), "registered primitive");
        self.by_name.insert(name, self.primitives.len());
        self.primitives.push(primitive);
        Ok(())
    }

    /// Look up a primitive by name.
    pub fn get(&self, name: &str) -> Option<&dyn Primitive> {
        self.by_name
            .get(name)
            .map(|&index| &*self.primitives[index])
    }

    /// All primitives, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Primitive> {
        self.primitives.iter().map(|p| &**p)
    }

    /// Get the number of registered primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl ArityTable for PrimitiveRegistry {
    fn arity(&self, name: &str) -> Option<usize> {
        self.get(name).map(Primitive::arity)
    }
}

impl std::fmt::Debug for PrimitiveRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|p| (p.name(), p.arity())))
            .finish()
    }
}
