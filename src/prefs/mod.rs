//! Theme preference resolution, persistence, and palette propagation
//!
//! The preference engine owns the in-memory theme for a session. It talks to
//! the outside world through three narrow collaborator traits: a string
//! key-value store for the persisted mirror, a system hint queried once at
//! startup, and a style sink that makes emitted palettes live.

pub mod engine;
pub mod traits;

pub use engine::{PreferenceEngine, THEME_KEY};
pub use traits::{PreferenceStorage, StorageError, StyleSink, SystemPreference};
