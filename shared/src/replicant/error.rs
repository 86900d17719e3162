use thiserror::Error;

/// Errors that can occur during replicant operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicantError {
    /// Attempted to reassign the owner of a replicant that's tearing down
    #[error("Replicant `{name}` is tearing down, its owner can no longer be changed")]
    OwnerChangeWhileTearingDown { name: String },

    /// The field index isn't part of the replicant's declared field set
    #[error("Replicant `{name}` declares no replicated field with index {index}")]
    UnknownField { name: String, index: u8 },

    /// Network updates are only ever applied on the receiving side
    #[error("Replicant `{name}` has authority, refusing network update of field {index}")]
    ReceiveOnAuthority { name: String, index: u8 },

    /// The incoming bits didn't decode to the field's type
    #[error("Replicant `{name}` could not read field {index} from incoming data")]
    MalformedField { name: String, index: u8 },
}
