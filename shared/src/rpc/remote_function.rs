/// Which direction a remote function travels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RpcKind {
    /// Called by a Root's owning client, executed on the authority
    Server,
    /// Called by the authority, executed on the Root's owning client
    Client,
    /// Called by the authority, executed on the authority and every proxy
    Multicast,
}

/// Descriptor of a remote procedure declared on a replicant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RemoteFunction {
    name: &'static str,
    kind: RpcKind,
    reliable: bool,
}

impl RemoteFunction {
    pub const fn server(name: &'static str) -> Self {
        Self::new(name, RpcKind::Server)
    }

    pub const fn client(name: &'static str) -> Self {
        Self::new(name, RpcKind::Client)
    }

    pub const fn multicast(name: &'static str) -> Self {
        Self::new(name, RpcKind::Multicast)
    }

    const fn new(name: &'static str, kind: RpcKind) -> Self {
        Self {
            name,
            kind,
            reliable: true,
        }
    }

    /// Marks the function as droppable by the transport
    pub const fn unreliable(mut self) -> Self {
        self.reliable = false;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> RpcKind {
        self.kind
    }

    pub fn is_reliable(&self) -> bool {
        self.reliable
    }
}
