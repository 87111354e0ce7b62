//! Platform-specific collaborator implementations
//!
//! This module encapsulates all interaction with the host system (local
//! disk, process environment) and provides the default implementations of
//! the preference engine's collaborator traits.

pub mod storage;
pub mod system;

pub use storage::FileStorage;
pub use system::EnvPreference;
