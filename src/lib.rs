//! Launcher configuration core - file and auto-start-set management for
//! proxy launcher frontends.
//!
//! This library owns the non-UI half of a launcher's configuration editor:
//! loading and saving the raw text of a named configuration file, renaming
//! it, and keeping the persisted auto-start set keyed consistently when a
//! file changes name. The presentation layer (forms, dialogs, activity
//! lifecycle) is the caller and stays outside this crate.
//!
//! # Modules
//!
//! - `store`: Bound-file text load/save/rename
//! - `autostart`: Auto-start membership registry
//! - `prefs`: Key-value preference store abstraction and backends
//! - `error`: Error types with user-recoverable hints
//! - `logging`: Structured logging initialization
#![forbid(unsafe_code)]

pub mod autostart;
pub mod error;
pub mod logging;
pub mod prefs;
pub mod store;
