//! Counter over an ordered chain of sequence stores.

use crate::store::SequenceStore;

/// Sequence counter backed by an ordered list of stores.
///
/// Reads walk the chain in order: a store that errors or has no value for the key is
/// skipped, and the first stored value wins. When every store is empty or failing the
/// counter is 0. Writes go to every store; individual failures are logged and ignored.
///
/// The read-increment-write in [`DurableCounter::next`] is not atomic across counters.
/// Two counters over the same durable storage can hand out the same value.
pub struct DurableCounter {
    stores: Vec<Box<dyn SequenceStore>>,
}

impl DurableCounter {
    pub fn new(stores: Vec<Box<dyn SequenceStore>>) -> Self {
        Self { stores }
    }

    /// Append a store at the end of the chain (lowest priority).
    pub fn with_store(mut self, store: impl SequenceStore + 'static) -> Self {
        self.stores.push(Box::new(store));
        self
    }

    /// Names of the stores, highest priority first.
    pub fn store_names(&self) -> Vec<&str> {
        self.stores.iter().map(|s| s.name()).collect()
    }

    /// Current counter value for `key` without incrementing.
    pub fn current(&self, key: &str) -> u64 {
        for store in &self.stores {
            match store.get(key) {
                Ok(Some(value)) => return value,
                Ok(None) => {
                    tracing::trace!(store = store.name(), key, "no counter stored; trying next store");
                }
                Err(err) => {
                    tracing::warn!(
                        store = store.name(),
                        key,
                        error = %err,
                        "sequence store read failed; trying next store"
                    );
                }
            }
        }
        0
    }

    /// Increment the counter for `key` and return the new value.
    pub fn next(&self, key: &str) -> u64 {
        let next = self.current(key).saturating_add(1);
        self.write(key, next);
        next
    }

    /// Write `value` to every store. Returns how many writes succeeded.
    fn write(&self, key: &str, value: u64) -> usize {
        let mut written = 0;
        for store in &self.stores {
            match store.set(key, value) {
                Ok(()) => written += 1,
                Err(err) => {
                    tracing::warn!(
                        store = store.name(),
                        key,
                        value,
                        error = %err,
                        "sequence store write failed; continuing with remaining stores"
                    );
                }
            }
        }

        if written == 0 && !self.stores.is_empty() {
            tracing::error!(key, value, "counter could not be persisted to any store");
        }
        written
    }
}

impl core::fmt::Debug for DurableCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DurableCounter")
            .field("stores", &self.store_names())
            .finish()
    }
}
