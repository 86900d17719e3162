// ConnectionKey
/// Identifies one active outbound connection of a world
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct ConnectionKey(u64);

impl ConnectionKey {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}
