use std::collections::HashMap;

use crate::{RootKey, WorldId};

/// Resolves the structural outer of a subobject to the world it lives in
pub trait ContextResolver {
    fn resolve_context(&self, outer: &RootKey) -> Option<WorldId>;
}

/// A detached copy of every Root's world, used when the Roots themselves are
/// mutably borrowed
pub struct ContextSnapshot {
    worlds: HashMap<RootKey, WorldId>,
}

impl ContextSnapshot {
    pub fn new() -> Self {
        Self {
            worlds: HashMap::new(),
        }
    }

    pub fn insert(&mut self, root: RootKey, world: WorldId) {
        self.worlds.insert(root, world);
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }
}

impl Default for ContextSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextResolver for ContextSnapshot {
    fn resolve_context(&self, outer: &RootKey) -> Option<WorldId> {
        self.worlds.get(outer).copied()
    }
}
