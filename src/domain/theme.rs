//! Theme identifiers and palette derivation
//!
//! A theme is one of a closed set of identifiers; each maps to a [`Palette`],
//! the full table of named style tokens a style-injection collaborator needs
//! to make the theme live. Palette values are plain strings, so this module
//! carries no rendering logic.

use serde::{Deserialize, Serialize};

/// The closed set of theme identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other member of the light/dark pair
    pub fn other(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stable identifier used for persistence
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted identifier; unknown values yield `None`
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The full token table for this theme
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                primary: "#667eea",
                secondary: "#764ba2",
                background: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
                card_bg: "rgba(255, 255, 255, 0.1)",
                text: "#ffffff",
                text_secondary: "rgba(255, 255, 255, 0.8)",
                border: "rgba(255, 255, 255, 0.2)",
            },
            Theme::Dark => Palette {
                primary: "#6c5ce7",
                secondary: "#a29bfe",
                background: "linear-gradient(135deg, #2d3436 0%, #636e72 100%)",
                card_bg: "rgba(255, 255, 255, 0.05)",
                text: "#ffffff",
                text_secondary: "rgba(255, 255, 255, 0.7)",
                border: "rgba(255, 255, 255, 0.1)",
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from named style tokens to concrete values
///
/// Consumers that expose the palette as custom properties prefix each token
/// name with `--color-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub card_bg: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
}

impl Palette {
    /// Token name/value pairs in a stable order
    pub fn entries(&self) -> [(&'static str, &'static str); 7] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("cardBg", self.card_bg),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("border", self.border),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_pair_is_symmetric() {
        assert_eq!(Theme::Light.other(), Theme::Dark);
        assert_eq!(Theme::Dark.other(), Theme::Light);
        assert_eq!(Theme::Light.other().other(), Theme::Light);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Theme::from_name(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_name(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(Theme::from_name("solarized"), None);
        assert_eq!(Theme::from_name(""), None);
        assert_eq!(Theme::from_name("Dark"), None);
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Light.palette().primary, "#667eea");
        assert_eq!(Theme::Dark.palette().primary, "#6c5ce7");
    }

    #[test]
    fn entries_cover_every_token() {
        let palette = Theme::Dark.palette();
        let entries = palette.entries();
        assert_eq!(entries.len(), 7);

        let tokens: Vec<_> = entries.iter().map(|(token, _)| *token).collect();
        assert_eq!(
            tokens,
            ["primary", "secondary", "background", "cardBg", "text", "textSecondary", "border"]
        );
    }
}
