use naia_serde::{BitReader, BitWrite, Serde, SerdeErr};

/// The role the local simulation plays for a given Root
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetRole {
    /// Not networked, or no Root to ask
    None,
    /// A remote copy that only receives state
    SimulatedProxy,
    /// A remote copy driven by the local player's connection
    AutonomousProxy,
    /// Holds the ground-truth state
    Authority,
}

impl NetRole {
    pub fn is_authority(self) -> bool {
        self == NetRole::Authority
    }

    pub fn is_proxy(self) -> bool {
        matches!(self, NetRole::SimulatedProxy | NetRole::AutonomousProxy)
    }
}

// WorldId
/// Identifies one live simulation context (a world hosting Roots)
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct WorldId(u64);

impl WorldId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Serde for WorldId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self(u64::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        self.0.bit_length()
    }
}
