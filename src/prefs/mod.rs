//! Key-value preference store abstraction.
//!
//! The auto-start registry persists its membership set through this trait
//! rather than a process-wide singleton, so hosts can hand in whichever
//! backing they use for the rest of their settings and tests can run
//! against an in-memory fake.

mod json;
pub mod memory;

pub use json::JsonPrefStore;
pub use memory::MemoryPrefStore;

use std::collections::BTreeSet;

use crate::error::Result;

/// Whole-value get/put contract for one preference key.
///
/// The only shape this crate needs from the host's settings store is a
/// string-set per key. Implementations must make `put_string_set` durable
/// by the time it returns (commit, not deferred apply); there is no
/// delta-append operation, so every mutation is a full read-modify-write
/// by the caller.
pub trait PrefStore {
    /// Read the set stored under `key`, or `None` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error only on genuine store failures (unreadable or
    /// corrupt backing data). A missing key is not an error.
    fn get_string_set(&self, key: &str) -> Result<Option<BTreeSet<String>>>;

    /// Replace the set stored under `key`, creating it on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be durably committed.
    fn put_string_set(&self, key: &str, values: &BTreeSet<String>) -> Result<()>;
}
