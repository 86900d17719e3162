use naia_serde::{BitReader, BitWriter, Serde, SerdeErr};

/// Serialized arguments of a remote function call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RpcArgs {
    bytes: Vec<u8>,
}

impl RpcArgs {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Serializes `value` as the whole argument list
    pub fn from_value<T: Serde>(value: &T) -> Self {
        let mut writer = BitWriter::new();
        value.ser(&mut writer);
        Self {
            bytes: writer.to_bytes().to_vec(),
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Deserializes the argument list as `T`
    pub fn read<T: Serde>(&self) -> Result<T, SerdeErr> {
        let mut reader = BitReader::new(&self.bytes);
        T::de(&mut reader)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
