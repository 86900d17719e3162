use replicant_shared::{
    receive_declared_fields, BitReader, NetRole, ReplicantError, RootEntity, RootKey,
    SubobjectMut, SubobjectRef, Subobjects, WorldId,
};

use crate::helpers::{test_channel::TestBunch, test_replicant::TestReplicant};

/// A Root holding one single slot and one collection of replicants
pub struct TestRoot {
    key: RootKey,
    role: NetRole,
    world: Option<WorldId>,
    pub slot: Option<TestReplicant>,
    pub items: Vec<Option<TestReplicant>>,
}

impl TestRoot {
    pub fn new(key: RootKey, role: NetRole, world: Option<WorldId>) -> Self {
        Self {
            key,
            role,
            world,
            slot: None,
            items: Vec::new(),
        }
    }

    pub fn authority(key: RootKey, world: WorldId) -> Self {
        Self::new(key, NetRole::Authority, Some(world))
    }

    pub fn proxy(key: RootKey, world: WorldId) -> Self {
        Self::new(key, NetRole::SimulatedProxy, Some(world))
    }

    /// A replicant created inside this Root
    pub fn new_child(&self, name: &str) -> TestReplicant {
        TestReplicant::new(name, Some(self.key))
    }

    /// Creates `slot` plus a two-element collection, only on the authority.
    /// Proxies leave them empty until state arrives.
    pub fn populate(mut self) -> Self {
        if self.has_authority() {
            let slot = self.new_child("slot");
            let item_0 = self.new_child("item_0");
            let item_1 = self.new_child("item_1");
            self.slot = Some(slot);
            self.items.push(Some(item_0));
            self.items.push(Some(item_1));
        }
        self
    }

    pub fn set_role(&mut self, role: NetRole) {
        self.role = role;
    }

    pub fn set_world(&mut self, world: Option<WorldId>) {
        self.world = world;
    }

    pub fn find(&self, name: &str) -> Option<&TestReplicant> {
        if let Some(found) = self.slot.as_ref().and_then(|slot| slot.find(name)) {
            return Some(found);
        }
        self.items
            .iter()
            .flatten()
            .find_map(|item| item.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut TestReplicant> {
        if let Some(found) = self.slot.as_mut().and_then(|slot| slot.find_mut(name)) {
            return Some(found);
        }
        self.items
            .iter_mut()
            .flatten()
            .find_map(|item| item.find_mut(name))
    }

    /// Applies every record of `bunch` to the replicant of the same name.
    /// Returns how many records found a replicant.
    pub fn apply_bunch(&mut self, bunch: &TestBunch) -> Result<usize, ReplicantError> {
        let role = self.role;
        let mut applied = 0;
        for record in bunch.records.iter() {
            let Some(replicant) = self.find_mut(&record.name) else {
                continue;
            };
            let mut reader = BitReader::new(&record.bytes);
            receive_declared_fields(replicant, role, &mut reader)?;
            applied += 1;
        }
        Ok(applied)
    }
}

impl Subobjects for TestRoot {
    fn subobjects(&self) -> Vec<SubobjectRef<'_>> {
        vec![
            SubobjectRef::single(&self.slot),
            SubobjectRef::collection(&self.items),
        ]
    }

    fn subobjects_mut(&mut self) -> Vec<SubobjectMut<'_>> {
        vec![
            SubobjectMut::single(&mut self.slot),
            SubobjectMut::collection(&mut self.items),
        ]
    }
}

impl RootEntity for TestRoot {
    fn key(&self) -> RootKey {
        self.key
    }

    fn local_role(&self) -> NetRole {
        self.role
    }

    fn world(&self) -> Option<WorldId> {
        self.world
    }
}
