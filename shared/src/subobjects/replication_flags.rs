/// Per-pass flags the transport hands to a replication pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplicationFlags {
    /// First pass for this connection, everything must be sent
    pub net_initial: bool,
    /// The connection owns the Root
    pub net_owner: bool,
    /// The connection only simulates the Root
    pub net_simulated: bool,
    /// Recording for replay rather than a live peer
    pub replay: bool,
}

impl ReplicationFlags {
    pub fn initial() -> Self {
        Self {
            net_initial: true,
            ..Self::default()
        }
    }
}
