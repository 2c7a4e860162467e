use fnv::FnvHashMap;

/// Registry of callbacks that were scheduled but have not fired yet.
///
/// Each scheduled callback removes its own entry when it runs; whatever is
/// left at teardown can be drained and cancelled.
#[derive(Debug)]
pub struct PendingSet<T> {
    next_key: u32,
    entries: FnvHashMap<u32, T>,
}

impl<T> Default for PendingSet<T> {
    fn default() -> Self {
        Self {
            next_key: 0,
            entries: FnvHashMap::default(),
        }
    }
}

impl<T> PendingSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a key before the callback is scheduled, so the callback can
    /// capture it.
    pub fn reserve_key(&mut self) -> u32 {
        let key = self.next_key;
        self.next_key = self.next_key.wrapping_add(1);
        key
    }

    pub fn insert(&mut self, key: u32, value: T) {
        self.entries.insert(key, value);
    }

    pub fn take(&mut self, key: u32) -> Option<T> {
        self.entries.remove(&key)
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.entries.drain().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
