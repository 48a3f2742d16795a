use rustc_hash::FxHashMap;

use crate::parts::id::StateKey;

/// Open/closed flags keyed by part or group. Absent keys read as closed.
#[derive(Debug, Default, Clone)]
pub struct ToggleStateStore {
    flags: FxHashMap<StateKey, bool>,
    revision: u64,
}

impl ToggleStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: impl Into<StateKey>) -> bool {
        self.flags.get(&key.into()).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<StateKey>, open: bool) {
        let key = key.into();
        self.flags.insert(key, open);
        self.revision += 1;
        log::info!("state {key} = {open}");
    }

    /// Inverts a flag and returns the new value.
    pub fn flip(&mut self, key: impl Into<StateKey>) -> bool {
        let key = key.into();
        let open = !self.get(key);
        self.set(key, open);
        open
    }

    /// Number of writes so far. Unchanged across a click that mutated nothing.
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Keys currently flagged open.
    pub fn open_keys(&self) -> impl Iterator<Item = StateKey> + '_ {
        self.flags.iter().filter(|(_, open)| **open).map(|(key, _)| *key)
    }
}
