use crate::{
    rpc::{remote_function::RemoteFunction, rpc_args::RpcArgs},
    ConnectionKey, Replicant, RootEntity, TransportError, WorldId,
};

/// The transport boundary RPC routing fans out through
pub trait NetDriver {
    /// Every currently active outbound connection of `world`, in a stable order
    fn active_connections(&self, world: &WorldId) -> Vec<ConnectionKey>;

    /// Whether `function`, called on `owner`, should be carried on
    /// `connection`. An error means the connection can't judge right now
    /// (e.g. it's closing) and is treated as not relevant.
    fn is_relevant_connection_for_function(
        &self,
        owner: &dyn RootEntity,
        function: &RemoteFunction,
        connection: &ConnectionKey,
    ) -> Result<bool, TransportError>;

    /// Queues the call on `connection`. `sender` is the subobject the call was
    /// made on, and is what the remote end matches the call against.
    fn process_remote_function(
        &mut self,
        connection: &ConnectionKey,
        owner: &dyn RootEntity,
        function: &RemoteFunction,
        args: &RpcArgs,
        sender: &dyn Replicant,
    );
}
