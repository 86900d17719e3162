use crate::{rpc::remote_function::RpcKind, NetRole};

/// Where a function call should execute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Callspace {
    /// Dropped, it can't run anywhere from here
    Absorbed,
    Local,
    Remote,
    LocalAndRemote,
}

impl Callspace {
    /// The default decision for a Root in `role` calling a function of `kind`
    pub fn for_role(role: NetRole, kind: RpcKind) -> Self {
        match (kind, role) {
            (_, NetRole::None) => Callspace::Local,
            (RpcKind::Server, NetRole::Authority) => Callspace::Local,
            (RpcKind::Server, NetRole::AutonomousProxy) => Callspace::Remote,
            (RpcKind::Server, NetRole::SimulatedProxy) => Callspace::Absorbed,
            (RpcKind::Client, NetRole::Authority) => Callspace::Remote,
            (RpcKind::Client, _) => Callspace::Local,
            (RpcKind::Multicast, NetRole::Authority) => Callspace::LocalAndRemote,
            (RpcKind::Multicast, _) => Callspace::Local,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Callspace::Local | Callspace::LocalAndRemote)
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Callspace::Remote | Callspace::LocalAndRemote)
    }
}
