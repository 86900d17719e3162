use std::collections::HashMap;

use log::{info, warn};

use crate::{
    key_generator::KeyGenerator,
    replicant::lifecycle,
    root::{
        error::RegistryError,
        root_entity::{RootEntity, RootLookup},
    },
    transport::context_resolver::{ContextResolver, ContextSnapshot},
    ReplicationConfig, RootKey, WorldId,
};

/// Owns every live Root in a simulation and answers the lookups children make
/// through their non-owning `RootKey`
pub struct RootRegistry<R: RootEntity> {
    config: ReplicationConfig,
    key_generator: KeyGenerator<RootKey>,
    roots: HashMap<RootKey, R>,
}

impl<R: RootEntity> RootRegistry<R> {
    pub fn new(config: ReplicationConfig) -> Self {
        Self {
            config,
            key_generator: KeyGenerator::new(),
            roots: HashMap::new(),
        }
    }

    pub fn config(&self) -> &ReplicationConfig {
        &self.config
    }

    /// Generates a key, builds the Root with it, and registers it
    ///
    /// # Panics
    ///
    /// Panics if `try_spawn` would return an error.
    pub fn spawn<F: FnOnce(RootKey) -> R>(&mut self, build: F) -> RootKey {
        match self.try_spawn(build) {
            Ok(key) => key,
            Err(error) => panic!("RootRegistry: {}", error),
        }
    }

    /// Generates a key, builds the Root with it, and registers it
    ///
    /// Returns an error if no key is left, if the built Root reports a key
    /// other than the one it was given, or if the key is somehow taken. A
    /// rejected Root is dropped before any of its subobjects began play.
    pub fn try_spawn<F: FnOnce(RootKey) -> R>(
        &mut self,
        build: F,
    ) -> Result<RootKey, RegistryError> {
        let key = self
            .key_generator
            .generate()
            .ok_or(RegistryError::KeysExhausted)?;
        let root = build(key);
        if root.key() != key {
            return Err(RegistryError::KeyMismatch {
                expected: key,
                actual: root.key(),
            });
        }
        self.register(root)
    }

    /// Registers a Root whose key was chosen elsewhere (e.g. one announced by
    /// a remote authority)
    ///
    /// Returns an error if the key is already taken.
    pub fn try_insert(&mut self, root: R) -> Result<RootKey, RegistryError> {
        let key = self.register(root)?;
        self.key_generator.skip_past(key.to_u64());
        Ok(key)
    }

    /// Refuses a key that's already registered, the registered Root stays
    fn register(&mut self, root: R) -> Result<RootKey, RegistryError> {
        let key = root.key();
        if self.roots.contains_key(&key) {
            return Err(RegistryError::RootAlreadyRegistered { key });
        }

        info!(
            "RootRegistry: registering Root {:?} with role {:?}",
            key,
            root.local_role()
        );
        self.roots.insert(key, root);

        if self.config.initialize_on_spawn {
            if let Err(error) = self.initialize_subobjects(&key) {
                warn!("RootRegistry: {}", error);
            }
        }

        Ok(key)
    }

    /// Runs the construction hook for every subobject of the Root that hasn't
    /// begun play and can resolve a world. Returns how many hooks fired.
    ///
    /// Returns an error if the Root isn't registered.
    pub fn initialize_subobjects(&mut self, key: &RootKey) -> Result<usize, RegistryError> {
        let contexts = self.context_snapshot();
        let root = self
            .roots
            .get_mut(key)
            .ok_or(RegistryError::RootNotFound {
                key: *key,
                operation: "initialize_subobjects",
            })?;

        Ok(lifecycle::initialize_subobjects(root, &contexts))
    }

    /// Removes the Root and, if configured, tears down its subobjects. The
    /// Root is handed back so the caller decides when it's dropped.
    ///
    /// Returns an error if the Root isn't registered.
    pub fn despawn(&mut self, key: &RootKey) -> Result<R, RegistryError> {
        let mut root = self
            .roots
            .remove(key)
            .ok_or(RegistryError::RootNotFound {
                key: *key,
                operation: "despawn",
            })?;

        if self.config.teardown_on_despawn {
            let torn_down = lifecycle::destroy_subobjects(&mut root);
            info!(
                "RootRegistry: despawned Root {:?}, tore down {} subobjects",
                key, torn_down
            );
        } else {
            info!("RootRegistry: despawned Root {:?}", key);
        }

        Ok(root)
    }

    pub fn get(&self, key: &RootKey) -> Option<&R> {
        self.roots.get(key)
    }

    pub fn get_mut(&mut self, key: &RootKey) -> Option<&mut R> {
        self.roots.get_mut(key)
    }

    pub fn contains(&self, key: &RootKey) -> bool {
        self.roots.contains_key(key)
    }

    pub fn keys(&self) -> Vec<RootKey> {
        self.roots.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Copies out the world of every registered Root so that world
    /// resolution doesn't need to borrow the registry
    pub fn context_snapshot(&self) -> ContextSnapshot {
        let mut snapshot = ContextSnapshot::new();
        for (key, root) in self.roots.iter() {
            if let Some(world) = root.world() {
                snapshot.insert(*key, world);
            }
        }
        snapshot
    }
}

impl<R: RootEntity> RootLookup for RootRegistry<R> {
    fn root(&self, key: &RootKey) -> Option<&dyn RootEntity> {
        self.roots.get(key).map(|root| root as &dyn RootEntity)
    }
}

impl<R: RootEntity> ContextResolver for RootRegistry<R> {
    fn resolve_context(&self, outer: &RootKey) -> Option<WorldId> {
        self.roots.get(outer).and_then(|root| root.world())
    }
}
