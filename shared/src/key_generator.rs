use std::marker::PhantomData;

/// Hands out monotonically increasing u64-backed keys. Keys are never reused:
/// once `u64::MAX` has been handed out (or skipped past) the generator is
/// exhausted.
pub struct KeyGenerator<K: From<u64>> {
    next: Option<u64>,
    phantom_k: PhantomData<K>,
}

impl<K: From<u64>> KeyGenerator<K> {
    pub fn new() -> Self {
        Self {
            next: Some(0),
            phantom_k: PhantomData,
        }
    }

    /// Get the next key in the sequence, `None` once exhausted
    pub fn generate(&mut self) -> Option<K> {
        let value = self.next?;
        self.next = value.checked_add(1);
        Some(K::from(value))
    }

    /// Make sure `value` is never handed out by `generate()`
    pub fn skip_past(&mut self, value: u64) {
        if let Some(next) = self.next {
            if value >= next {
                self.next = value.checked_add(1);
            }
        }
    }
}

impl<K: From<u64>> Default for KeyGenerator<K> {
    fn default() -> Self {
        Self::new()
    }
}
