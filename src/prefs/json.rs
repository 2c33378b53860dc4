//! JSON-file-backed preference store.
//!
//! Persists all keys in a single JSON document, one object mapping key
//! names to sorted string arrays. Every put rewrites the whole document
//! and fsyncs it, so a completed call survives process death.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{ConfError, Result};
use crate::prefs::PrefStore;

/// Document type on disk: key -> set of strings.
type PrefDoc = BTreeMap<String, BTreeSet<String>>;

/// Preference store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonPrefStore {
    path: PathBuf,
}

impl JsonPrefStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not need to exist yet; it is created on first put.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        trace!(path = %path.display(), "Opening JSON preference store");
        Self { path }
    }

    /// Create a store at the platform-default location
    /// (`<data dir>/launchconf/prefs.json`).
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| ConfError::Other("Could not determine data directory".to_string()))?;
        Ok(Self::open(base.join("launchconf").join("prefs.json")))
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document; a missing file is an empty document.
    fn read_doc(&self) -> Result<PrefDoc> {
        if !self.path.exists() {
            return Ok(PrefDoc::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|e| {
            ConfError::PrefsCorrupt(format!("{}: {e}", self.path.display()))
        })
    }

    /// Serialize and durably write the whole document.
    fn write_doc(&self, doc: &PrefDoc) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&self.path)?;
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| ConfError::Other(format!("Failed to serialize preferences: {e}")))?;
        file.write_all(json.as_bytes())?;
        // Commit semantics: the put must be on disk before we return.
        file.sync_all()?;

        debug!(path = %self.path.display(), keys = doc.len(), "Preferences committed");
        Ok(())
    }
}

impl PrefStore for JsonPrefStore {
    fn get_string_set(&self, key: &str) -> Result<Option<BTreeSet<String>>> {
        let doc = self.read_doc()?;
        Ok(doc.get(key).cloned())
    }

    fn put_string_set(&self, key: &str, values: &BTreeSet<String>) -> Result<()> {
        let mut doc = self.read_doc()?;
        doc.insert(key.to_string(), values.clone());
        self.write_doc(&doc)
    }
}
