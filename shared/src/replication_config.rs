use std::default::Default;

/// Contains Config properties which will be used by a RootRegistry
#[derive(Clone, Debug)]
pub struct ReplicationConfig {
    /// Determines whether spawning a Root immediately runs the construction
    /// hook of every subobject that can resolve a world.
    pub initialize_on_spawn: bool,
    /// Determines whether despawning a Root tears down its subobjects before
    /// handing the Root back to the caller.
    pub teardown_on_despawn: bool,
}

impl Default for ReplicationConfig {
    fn default() -> Self {
        Self {
            initialize_on_spawn: true,
            teardown_on_despawn: true,
        }
    }
}
