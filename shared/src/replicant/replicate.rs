use naia_serde::{BitReader, BitWrite};

use crate::{
    replicant::field::{FieldIndex, ReplicatedField, BASE_FIELDS},
    rpc::{remote_function::RemoteFunction, rpc_args::RpcArgs},
    subobjects::subobject_slot::Subobjects,
    ChildReplicant, ReplicantError,
};

/// A secondary object that replicates through the Root that owns it.
///
/// Concrete types compose a `ChildReplicant` and override only the hooks
/// they need; every hook defaults to a no-op.
pub trait Replicant: Subobjects {
    /// The shared replicant state
    fn replicant(&self) -> &ChildReplicant;

    fn replicant_mut(&mut self) -> &mut ChildReplicant;

    /// The static, ordered set of replicated fields of this type. Types that
    /// add fields must keep `OWNER_FIELD` first.
    fn declared_fields(&self) -> &'static [ReplicatedField] {
        BASE_FIELDS
    }

    /// Writes the current value of one declared field
    fn write_field(&self, index: FieldIndex, writer: &mut dyn BitWrite) -> Result<(), ReplicantError> {
        self.replicant().write_base_field(index, writer)
    }

    /// Overwrites one declared field with an incoming value
    fn read_field(&mut self, index: FieldIndex, reader: &mut BitReader) -> Result<(), ReplicantError> {
        self.replicant_mut().read_base_field(index, reader)
    }

    fn is_supported_for_networking(&self) -> bool {
        true
    }

    /// Runs once, when the replicant first becomes live in a world
    fn on_begin_play(&mut self) {}

    /// Runs once, when a replicant that began play starts tearing down
    fn on_end_play(&mut self) {}

    /// Runs on receivers after a notifying field was updated by the network
    fn on_rep(&mut self, _field: FieldIndex) {}

    /// Runs a remote function on this replicant, either because the local
    /// callspace included it or because a peer sent it
    fn receive_rpc(&mut self, _function: &RemoteFunction, _args: &RpcArgs) {}
}

impl<T: Replicant + ?Sized> Replicant for Box<T> {
    fn replicant(&self) -> &ChildReplicant {
        (**self).replicant()
    }

    fn replicant_mut(&mut self) -> &mut ChildReplicant {
        (**self).replicant_mut()
    }

    fn declared_fields(&self) -> &'static [ReplicatedField] {
        (**self).declared_fields()
    }

    fn write_field(&self, index: FieldIndex, writer: &mut dyn BitWrite) -> Result<(), ReplicantError> {
        (**self).write_field(index, writer)
    }

    fn read_field(&mut self, index: FieldIndex, reader: &mut BitReader) -> Result<(), ReplicantError> {
        (**self).read_field(index, reader)
    }

    fn is_supported_for_networking(&self) -> bool {
        (**self).is_supported_for_networking()
    }

    fn on_begin_play(&mut self) {
        (**self).on_begin_play()
    }

    fn on_end_play(&mut self) {
        (**self).on_end_play()
    }

    fn on_rep(&mut self, field: FieldIndex) {
        (**self).on_rep(field)
    }

    fn receive_rpc(&mut self, function: &RemoteFunction, args: &RpcArgs) {
        (**self).receive_rpc(function, args)
    }
}
