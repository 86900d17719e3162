use thiserror::Error;

use crate::RootKey;

/// Errors that can occur during RootRegistry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Attempted to operate on a Root that isn't registered
    #[error("Root {key:?} not found in registry during {operation}")]
    RootNotFound {
        key: RootKey,
        operation: &'static str,
    },

    /// Attempted to register a Root under a key that's already taken
    #[error("Root {key:?} is already registered")]
    RootAlreadyRegistered { key: RootKey },

    /// A Root built for a generated key reported a different key
    #[error("Root built for key {expected:?} reports key {actual:?}")]
    KeyMismatch { expected: RootKey, actual: RootKey },

    /// Every key has been handed out or skipped past
    #[error("RootRegistry has no keys left to generate")]
    KeysExhausted,
}
