use log::{debug, trace, warn};

use crate::{
    rpc::{callspace::Callspace, remote_function::RemoteFunction, rpc_args::RpcArgs},
    NetDriver, Replicant, RootLookup,
};

/// What happened to a call made through `call_function`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallOutcome {
    pub callspace: Callspace,
    /// At least one connection accepted the call
    pub sent: bool,
}

impl CallOutcome {
    /// The caller should now run the function on the local replicant
    pub fn execute_locally(&self) -> bool {
        self.callspace.is_local()
    }
}

/// Asks the sender's owner where `function` should execute. A subobject has no
/// opinion of its own; without an owner every call is local.
pub fn function_callspace(
    sender: &dyn Replicant,
    roots: &dyn RootLookup,
    function: &RemoteFunction,
) -> Callspace {
    match sender.replicant().owner_entity(roots) {
        Some(owner) => owner.function_callspace(function),
        None => Callspace::Local,
    }
}

/// Forwards `function` to every active connection of the owner's world that
/// the driver judges relevant for the owner. Returns true iff at least one
/// connection accepted the call.
pub fn dispatch(
    sender: &dyn Replicant,
    roots: &dyn RootLookup,
    driver: &mut dyn NetDriver,
    function: &RemoteFunction,
    args: &RpcArgs,
) -> bool {
    let child = sender.replicant();

    let Some(owner) = child.owner_entity(roots) else {
        debug!(
            "Replicant `{}`: not sending `{}`, no owner",
            child.name(),
            function.name()
        );
        return false;
    };

    let Some(world) = owner.world() else {
        debug!(
            "Replicant `{}`: not sending `{}`, owner {:?} isn't in a world",
            child.name(),
            function.name(),
            owner.key()
        );
        return false;
    };

    let mut processed = false;

    for connection in driver.active_connections(&world) {
        match driver.is_relevant_connection_for_function(owner, function, &connection) {
            Ok(true) => {
                trace!(
                    "Replicant `{}`: sending `{}` on {:?}",
                    child.name(),
                    function.name(),
                    connection
                );
                driver.process_remote_function(&connection, owner, function, args, sender);
                processed = true;
            }
            Ok(false) => {}
            Err(error) => {
                warn!(
                    "Replicant `{}`: skipping {:?} for `{}`: {}",
                    child.name(),
                    connection,
                    function.name(),
                    error
                );
            }
        }
    }

    processed
}

/// Resolves the callspace through the owner and dispatches when it includes
/// remote. Local execution is left to the caller (see
/// `CallOutcome::execute_locally`), since it needs the replicant mutably.
pub fn call_function(
    sender: &dyn Replicant,
    roots: &dyn RootLookup,
    driver: &mut dyn NetDriver,
    function: &RemoteFunction,
    args: &RpcArgs,
) -> CallOutcome {
    let callspace = function_callspace(sender, roots, function);

    let sent = if callspace.is_remote() {
        dispatch(sender, roots, driver, function, args)
    } else {
        false
    };

    if callspace == Callspace::Absorbed {
        debug!(
            "Replicant `{}`: call to `{}` absorbed",
            sender.replicant().name(),
            function.name()
        );
    }

    CallOutcome { callspace, sent }
}
