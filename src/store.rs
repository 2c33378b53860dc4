//! Bound-file configuration store.
//!
//! A [`ConfigStore`] targets exactly one on-disk configuration file and
//! exposes load/save/rename on its raw text. Content is an opaque blob:
//! it is read and written verbatim, with no syntax validation and no
//! newline normalization. The file's basename doubles as its identity key
//! in the auto-start registry, so rename re-keys membership as part of the
//! same operation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::autostart::AutoStartRegistry;
use crate::error::{ConfError, Result};

/// Validate a bare configuration file name.
///
/// Registry identity is the basename string, so a valid name is non-empty
/// and contains no path separator on any platform.
pub fn validate_basename(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfError::InvalidName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if name.contains('/') || name.contains('\\') || name.chars().any(std::path::is_separator) {
        return Err(ConfError::InvalidName {
            name: name.to_string(),
            reason: "name contains a path separator".to_string(),
        });
    }
    Ok(())
}

/// Store bound to a single configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    basename: String,
}

impl ConfigStore {
    /// Bind to a configuration file path.
    ///
    /// The file itself may or may not exist yet (existence is checked at
    /// [`load`](Self::load) time), but the path must name a file: it needs
    /// a UTF-8 basename component. A caller that cannot produce a valid
    /// file reference has no session to run.
    pub fn bind<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let basename = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| ConfError::InvalidName {
                name: path.display().to_string(),
                reason: "path does not name a file with a UTF-8 basename".to_string(),
            })?;

        debug!(path = %path.display(), "Bound configuration store");
        Ok(Self { path, basename })
    }

    /// Current on-disk location of the bound file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Basename used as the registry identity key.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Read the bound file's full text content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::ConfigNotFound`] if the bound path does not
    /// exist; the file is never created by a load.
    pub fn load(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(ConfError::ConfigNotFound {
                path: self.path.display().to_string(),
            });
        }

        let text = fs::read_to_string(&self.path)?;
        trace!(path = %self.path.display(), bytes = text.len(), "Loaded configuration text");
        Ok(text)
    }

    /// Overwrite the bound file's entire content with `text`.
    ///
    /// Creates the file if absent. The write is a plain truncate-and-write;
    /// a failure mid-write leaves prior on-disk content undefined (known
    /// limitation, no partial-write recovery).
    pub fn save(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text)?;
        info!(path = %self.path.display(), bytes = text.len(), "Saved configuration");
        Ok(())
    }

    /// Rename the bound file within its parent directory, carrying any
    /// auto-start membership over to the new name.
    ///
    /// `new_basename` must be a bare name (no path separators, non-empty)
    /// and must not collide with an existing file; a collision fails with
    /// [`ConfError::RenameConflict`] rather than following filesystem
    /// overwrite semantics. Renaming to the current name is a no-op.
    ///
    /// The filesystem rename happens first and the registry is re-keyed
    /// only after it succeeds, so a failed rename leaves membership
    /// untouched. If the registry write itself fails after the rename, the
    /// error is surfaced and the set still holds the old basename.
    pub fn rename(&mut self, new_basename: &str, registry: &AutoStartRegistry<'_>) -> Result<()> {
        validate_basename(new_basename)?;

        if new_basename == self.basename {
            debug!(basename = %self.basename, "Rename to current name, nothing to do");
            return Ok(());
        }

        let new_path = self.path.with_file_name(new_basename);
        if new_path.exists() {
            return Err(ConfError::RenameConflict {
                path: new_path.display().to_string(),
            });
        }

        fs::rename(&self.path, &new_path)?;

        let old_basename = std::mem::replace(&mut self.basename, new_basename.to_string());
        self.path = new_path;

        registry.rekey(&old_basename, new_basename)?;

        info!(
            old = %old_basename,
            new = %new_basename,
            path = %self.path.display(),
            "Renamed configuration"
        );
        Ok(())
    }
}
