use log::{info, warn};
use naia_serde::{BitReader, BitWrite, Serde};

use crate::{
    replicant::{
        field::{FieldIndex, OWNER_FIELD},
        lifecycle::LifecycleState,
    },
    ContextResolver, NetRole, ReplicantError, RootEntity, RootKey, RootLookup, WorldId,
};

/// State every replicant carries: who owns it, which Root it was created in,
/// and where it is in its lifecycle.
///
/// The owner is a non-owning `RootKey`. Anything that depends on the owner
/// (authority, routing) falls back to "none" when the key is unset or no
/// longer resolves.
#[derive(Clone, Debug)]
pub struct ChildReplicant {
    name: String,
    outer: Option<RootKey>,
    owner: Option<RootKey>,
    lifecycle: LifecycleState,
}

impl ChildReplicant {
    /// Creates a replicant inside `outer`, which also becomes its owner
    pub fn new<S: Into<String>>(name: S, outer: Option<RootKey>) -> Self {
        Self {
            name: name.into(),
            outer,
            owner: outer,
            lifecycle: LifecycleState::Created,
        }
    }

    /// Identifies the replicant within its Root
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The Root this replicant was created in
    pub fn outer(&self) -> Option<RootKey> {
        self.outer
    }

    pub fn owner(&self) -> Option<RootKey> {
        self.owner
    }

    /// Reassigns the owner. Returns whether anything changed.
    ///
    /// Returns an error if the replicant is tearing down or destroyed, in
    /// which case the owner is left as it was.
    pub fn try_set_owner(&mut self, owner: Option<RootKey>) -> Result<bool, ReplicantError> {
        if self.owner == owner {
            return Ok(false);
        }
        if self.lifecycle.is_tearing_down() {
            return Err(ReplicantError::OwnerChangeWhileTearingDown {
                name: self.name.clone(),
            });
        }

        info!(
            "Replicant `{}`: owner {:?} -> {:?}",
            self.name, self.owner, owner
        );
        self.owner = owner;
        Ok(true)
    }

    /// Reassigns the owner, ignoring the request if the replicant is tearing
    /// down.
    ///
    /// Consider using `try_set_owner` to observe the rejection.
    pub fn set_owner(&mut self, owner: Option<RootKey>) {
        if let Err(error) = self.try_set_owner(owner) {
            warn!("{}", error);
        }
    }

    /// The owning Root, if the owner key resolves
    pub fn owner_entity<'r>(&self, roots: &'r dyn RootLookup) -> Option<&'r dyn RootEntity> {
        let key = self.owner?;
        roots.root(&key)
    }

    /// The local role of the owner, `NetRole::None` without one
    pub fn owner_role(&self, roots: &dyn RootLookup) -> NetRole {
        match self.owner_entity(roots) {
            Some(owner) => owner.local_role(),
            None => NetRole::None,
        }
    }

    /// Authority is always the owner's
    pub fn has_authority(&self, roots: &dyn RootLookup) -> bool {
        match self.owner_entity(roots) {
            Some(owner) => owner.has_authority(),
            None => false,
        }
    }

    /// The world of the Root this replicant was created in
    pub fn world(&self, resolver: &dyn ContextResolver) -> Option<WorldId> {
        let outer = self.outer?;
        resolver.resolve_context(&outer)
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }

    /// Whether the replicant still takes part in replication
    pub fn is_valid(&self) -> bool {
        !self.lifecycle.is_tearing_down()
    }

    pub fn has_begun_play(&self) -> bool {
        self.lifecycle == LifecycleState::Live
    }

    pub(crate) fn set_lifecycle(&mut self, lifecycle: LifecycleState) {
        self.lifecycle = lifecycle;
    }

    /// Writes a field every replicant declares. Types with their own fields
    /// fall back to this for indices they don't handle.
    pub fn write_base_field(
        &self,
        index: FieldIndex,
        writer: &mut dyn BitWrite,
    ) -> Result<(), ReplicantError> {
        if index != OWNER_FIELD.index() {
            return Err(ReplicantError::UnknownField {
                name: self.name.clone(),
                index,
            });
        }
        self.owner.ser(writer);
        Ok(())
    }

    /// Reads a field every replicant declares. Network writes bypass
    /// `try_set_owner`: the authority already decided.
    pub fn read_base_field(
        &mut self,
        index: FieldIndex,
        reader: &mut BitReader,
    ) -> Result<(), ReplicantError> {
        if index != OWNER_FIELD.index() {
            return Err(ReplicantError::UnknownField {
                name: self.name.clone(),
                index,
            });
        }
        self.owner = Option::<RootKey>::de(reader).map_err(|_| ReplicantError::MalformedField {
            name: self.name.clone(),
            index,
        })?;
        Ok(())
    }
}
