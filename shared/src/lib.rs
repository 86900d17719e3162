//! # Replicant Shared
//! Sub-object replication: child replicants that carry replicated state and
//! RPCs, but exist on the network only through the Root entity that owns them.
//!
//! The transport stays outside this crate. It hands a replication pass a
//! [`SubobjectChannel`], routes calls through a [`NetDriver`], and resolves
//! worlds through a [`ContextResolver`]; this crate decides *which* subobjects
//! and *which* connections.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod key_generator;
mod replicant;
mod replication_config;
mod root;
mod rpc;
mod subobjects;
mod transport;
mod types;

pub use naia_serde::{BitReader, BitWrite, BitWriter, Serde, SerdeErr};

pub use key_generator::KeyGenerator;
pub use replicant::{
    child_replicant::ChildReplicant,
    error::ReplicantError,
    field::{
        receive_declared_fields, receive_field, write_declared_fields, FieldIndex,
        ReplicatedField, BASE_FIELDS, OWNER_FIELD,
    },
    lifecycle::{
        begin_destroy, destroy_subobjects, initialize, initialize_subobjects, LifecycleState,
    },
    replicate::Replicant,
};
pub use replication_config::ReplicationConfig;
pub use root::{
    error::RegistryError,
    root_entity::{RootEntity, RootLookup},
    root_key::RootKey,
    root_registry::RootRegistry,
};
pub use rpc::{
    callspace::Callspace,
    dispatch::{call_function, dispatch, function_callspace, CallOutcome},
    remote_function::{RemoteFunction, RpcKind},
    rpc_args::RpcArgs,
};
pub use subobjects::{
    replication_flags::ReplicationFlags,
    subobject_slot::{SubobjectMut, SubobjectRef, Subobjects},
    walk::replicate_subobjects,
};
pub use transport::{
    connection_key::ConnectionKey,
    context_resolver::{ContextResolver, ContextSnapshot},
    error::TransportError,
    net_driver::NetDriver,
    subobject_channel::SubobjectChannel,
};
pub use types::{NetRole, WorldId};
