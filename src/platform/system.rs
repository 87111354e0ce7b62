//! System dark-mode detection from the desktop environment
//!
//! Headless equivalent of a `prefers-color-scheme` media query: inspect the
//! environment variables desktop sessions and terminals commonly export.
//! The hints are heuristic; callers treat the result as a tie-breaker, not
//! a guarantee.

use std::env;

use crate::prefs::traits::SystemPreference;

/// Dark-mode hint read from process environment variables
///
/// Checks `GTK_THEME` for a dark variant name, then `COLORFGBG` (exported by
/// several terminal emulators as `<fg>;<bg>`) for a dark background color.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPreference;

impl EnvPreference {
    pub fn new() -> Self {
        Self
    }
}

impl SystemPreference for EnvPreference {
    fn prefers_dark(&self) -> bool {
        if let Ok(theme) = env::var("GTK_THEME") {
            if theme_name_is_dark(&theme) {
                return true;
            }
        }

        if let Ok(colorfgbg) = env::var("COLORFGBG") {
            if background_is_dark(&colorfgbg) {
                return true;
            }
        }

        false
    }
}

/// True when a theme name carries a dark variant marker
fn theme_name_is_dark(name: &str) -> bool {
    name.to_ascii_lowercase().contains("dark")
}

/// Parses a `COLORFGBG` value and reports whether the background is dark
///
/// The last `;`-separated field is the background color in the 16-color
/// palette; 0-6 and 8 are the dark entries.
fn background_is_dark(colorfgbg: &str) -> bool {
    let Some(background) = colorfgbg.rsplit(';').next() else {
        return false;
    };
    match background.trim().parse::<u8>() {
        Ok(color) => color <= 6 || color == 8,
        Err(_) => false,
    }
}
