use naia_serde::{BitReader, BitWrite, Serde, SerdeErr};

// RootKey
/// Non-owning handle to a Root held in a RootRegistry
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct RootKey(u64);

impl RootKey {
    pub fn to_u64(&self) -> u64 {
        self.0
    }

    pub fn from_u64(value: u64) -> Self {
        RootKey(value)
    }
}

impl From<u64> for RootKey {
    fn from(value: u64) -> Self {
        RootKey(value)
    }
}

impl Serde for RootKey {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(RootKey(u64::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        self.0.bit_length()
    }
}
