//! Auto-start membership registry.
//!
//! Tracks which configuration files (by basename) should be launched
//! automatically at service start. The set lives under a single well-known
//! key in the host's preference store; this module only re-keys and toggles
//! membership, the launch itself happens elsewhere in the host.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::error::Result;
use crate::prefs::PrefStore;

/// Well-known preference key holding the auto-start basename set.
pub const AUTO_START_KEY: &str = "auto_start_launch_list";

/// Membership registry over a borrowed preference store.
///
/// Membership is binary per basename and every mutation is a full
/// read-modify-write of the set (the store only offers whole-value
/// get/put for the key), so concurrent writers can lose updates;
/// one logical writer per process is assumed.
pub struct AutoStartRegistry<'a> {
    store: &'a dyn PrefStore,
    key: &'a str,
}

impl<'a> AutoStartRegistry<'a> {
    /// Create a registry over `store` using the default key.
    pub fn new(store: &'a dyn PrefStore) -> Self {
        Self {
            store,
            key: AUTO_START_KEY,
        }
    }

    /// Create a registry over `store` using a custom preference key.
    pub fn with_key(store: &'a dyn PrefStore, key: &'a str) -> Self {
        Self { store, key }
    }

    /// Whether `basename` is currently marked for auto-start.
    ///
    /// An absent key is an empty set, never an error.
    pub fn is_member(&self, basename: &str) -> Result<bool> {
        let set = self.store.get_string_set(self.key)?.unwrap_or_default();
        let member = set.contains(basename);
        trace!(basename = %basename, member = member, "Auto-start membership query");
        Ok(member)
    }

    /// Add or remove `basename` from the auto-start set.
    ///
    /// Idempotent: setting an existing member or clearing a non-member
    /// writes the set back unchanged.
    pub fn set_member(&self, basename: &str, present: bool) -> Result<()> {
        let mut set = self.store.get_string_set(self.key)?.unwrap_or_default();
        if present {
            set.insert(basename.to_string());
        } else {
            set.remove(basename);
        }
        self.store.put_string_set(self.key, &set)?;

        debug!(
            basename = %basename,
            present = present,
            size = set.len(),
            "Auto-start membership updated"
        );
        Ok(())
    }

    /// Snapshot of the full auto-start set.
    pub fn members(&self) -> Result<BTreeSet<String>> {
        Ok(self.store.get_string_set(self.key)?.unwrap_or_default())
    }

    /// Transfer membership from `old` to `new`.
    ///
    /// No-op when `old` is not a member. Used by the config store after a
    /// successful file rename so the set never keeps a stale basename.
    pub fn rekey(&self, old: &str, new: &str) -> Result<()> {
        let mut set = self.store.get_string_set(self.key)?.unwrap_or_default();
        if set.remove(old) {
            set.insert(new.to_string());
            self.store.put_string_set(self.key, &set)?;
            debug!(old = %old, new = %new, "Auto-start membership re-keyed");
        }
        Ok(())
    }
}
