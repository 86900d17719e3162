use crate::{subobjects::replication_flags::ReplicationFlags, Replicant};

/// The per-connection channel a replication pass writes into
pub trait SubobjectChannel {
    /// Transport-owned outgoing payload for the current pass
    type Bunch;

    /// Replicates one child's state on this channel. Returns true if anything
    /// was written.
    fn replicate_child_state(
        &mut self,
        bunch: &mut Self::Bunch,
        flags: &ReplicationFlags,
        child: &dyn Replicant,
    ) -> bool;
}
