//! In-memory preference store for testing.
//!
//! Drop-in [`PrefStore`] fake so registry and rename logic can be exercised
//! without touching the real settings file. Also records how many puts were
//! issued, which lets tests assert on read-modify-write behavior.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::error::Result;
use crate::prefs::PrefStore;

/// Thread-safe in-memory implementation of [`PrefStore`].
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    doc: BTreeMap<String, BTreeSet<String>>,
    put_count: usize,
}

impl MemoryPrefStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of puts issued since creation.
    #[must_use]
    pub fn put_count(&self) -> usize {
        self.inner.lock().expect("pref store lock poisoned").put_count
    }

    /// Snapshot of every key currently present.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.inner
            .lock()
            .expect("pref store lock poisoned")
            .doc
            .keys()
            .cloned()
            .collect()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get_string_set(&self, key: &str) -> Result<Option<BTreeSet<String>>> {
        let inner = self.inner.lock().expect("pref store lock poisoned");
        Ok(inner.doc.get(key).cloned())
    }

    fn put_string_set(&self, key: &str, values: &BTreeSet<String>) -> Result<()> {
        let mut inner = self.inner.lock().expect("pref store lock poisoned");
        inner.doc.insert(key.to_string(), values.clone());
        inner.put_count += 1;
        Ok(())
    }
}
