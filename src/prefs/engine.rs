//! Preference engine: initial resolution, set/toggle, palette emission

use log::{info, warn};

use crate::domain::theme::Theme;
use crate::prefs::traits::{PreferenceStorage, StyleSink, SystemPreference};

/// Fixed storage key for the active theme identifier
pub const THEME_KEY: &str = "theme";

/// Owns the in-memory theme for a session
///
/// Construction resolves the initial theme exactly once: the persisted value
/// wins, then the system dark-mode hint, then light. Every change afterwards
/// goes through [`set`](PreferenceEngine::set) or
/// [`toggle`](PreferenceEngine::toggle), which persist best-effort and emit
/// the full palette to the style sink. Storage failures are logged and
/// swallowed; they never alter the in-memory theme and never reach callers.
pub struct PreferenceEngine<S, K>
where
    S: PreferenceStorage,
    K: StyleSink,
{
    theme: Theme,
    storage: S,
    style: K,
}

impl<S, K> PreferenceEngine<S, K>
where
    S: PreferenceStorage,
    K: StyleSink,
{
    /// Creates the engine and applies the resolved theme's palette
    ///
    /// The system-preference collaborator is only consulted here, which is
    /// why it is borrowed rather than owned.
    pub fn new(storage: S, system: &dyn SystemPreference, style: K) -> Self {
        let theme = resolve_initial(&storage, system);
        info!("resolved initial theme: {theme}");

        let mut engine = Self {
            theme,
            storage,
            style,
        };
        engine.style.apply_palette(&theme.palette());
        engine
    }

    /// The active theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Read access to the style sink, for collaborators that render from it
    pub fn style(&self) -> &K {
        &self.style
    }

    /// Replaces the active theme
    ///
    /// Persists the new value best-effort and emits the full palette. A
    /// failed write leaves the in-memory theme in place and is only logged.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;

        if let Err(err) = self.storage.set(THEME_KEY, theme.as_str()) {
            warn!("failed to persist theme {theme}: {err}");
        }

        self.style.apply_palette(&theme.palette());
    }

    /// Switches to the other member of the light/dark pair
    ///
    /// Defined only over the binary pair; generalizing to further presets is
    /// a documented non-goal.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.other());
        self.theme
    }
}

/// Startup theme resolution: persisted value, then system hint, then light
///
/// A failed or unrecognized read falls through to the system hint rather
/// than surfacing anywhere.
fn resolve_initial(storage: &dyn PreferenceStorage, system: &dyn SystemPreference) -> Theme {
    match storage.get(THEME_KEY) {
        Ok(Some(saved)) => {
            if let Some(theme) = Theme::from_name(&saved) {
                return theme;
            }
            warn!("ignoring unrecognized persisted theme {saved:?}");
        }
        Ok(None) => {}
        Err(err) => {
            warn!("preference read failed, falling back to system hint: {err}");
        }
    }

    if system.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}
