//! Collaborator interfaces for the preference engine
//!
//! Implementations live outside the engine: the crate ships file-backed and
//! environment-backed defaults under `platform/`, and a custom-property
//! registry under `ui/`. Anything satisfying these traits can stand in, which
//! is how the tests exercise failure paths.

use crate::domain::theme::Palette;
use thiserror::Error;

/// Failure raised by a storage collaborator
///
/// Carried only as far as a log line; the preference engine never propagates
/// storage failures to its callers.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference store contents are not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Plain string key-value persistence
///
/// The engine uses a single fixed key; no schema beyond a string value.
pub trait PreferenceStorage {
    /// Reads the value for `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes the value for `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read-only system dark-mode hint, queried only during initial resolution
pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;
}

/// Destination for emitted palettes
///
/// Expected to make the token values live (for example as custom properties
/// in a style registry); the preference engine neither verifies nor depends
/// on how that happens.
pub trait StyleSink {
    fn apply_palette(&mut self, palette: &Palette);
}
