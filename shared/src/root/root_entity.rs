use crate::{
    rpc::{callspace::Callspace, remote_function::RemoteFunction},
    subobjects::subobject_slot::Subobjects,
    NetRole, RootKey, WorldId,
};

/// The independently network-addressable object at the top of a replication
/// tree. Implemented by application types; children reach it through a
/// `RootKey` and never hold it directly.
pub trait RootEntity: Subobjects {
    /// The key this Root is registered under
    fn key(&self) -> RootKey;

    /// The role the local simulation plays for this Root
    fn local_role(&self) -> NetRole;

    /// Whether the local simulation holds ground-truth state for this Root
    fn has_authority(&self) -> bool {
        self.local_role().is_authority()
    }

    /// The world this Root lives in, if it's live
    fn world(&self) -> Option<WorldId>;

    /// Where a call to `function` made on this Root (or on one of its
    /// subobjects) should execute
    fn function_callspace(&self, function: &RemoteFunction) -> Callspace {
        Callspace::for_role(self.local_role(), function.kind())
    }
}

/// Resolves a `RootKey` to the Root it refers to
pub trait RootLookup {
    fn root(&self, key: &RootKey) -> Option<&dyn RootEntity>;
}
