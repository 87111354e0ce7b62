//! Live style registry for emitted palettes
//!
//! The crate's default style-injection collaborator: a map of CSS custom
//! properties kept current by the preference engine. Rendering layers read
//! individual properties or take the whole block as CSS text; nothing here
//! knows how (or whether) the values end up on screen.

use std::collections::BTreeMap;

use crate::domain::theme::Palette;
use crate::prefs::traits::StyleSink;

/// Mapping of custom property names to their current values
///
/// Property names are the palette tokens prefixed with `--color-`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    properties: BTreeMap<String, String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a custom property, if one has been applied
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Renders the registry as a `:root` declaration block
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (property, value) in &self.properties {
            css.push_str(&format!("  {property}: {value};\n"));
        }
        css.push('}');
        css
    }
}

impl StyleSink for StyleRegistry {
    fn apply_palette(&mut self, palette: &Palette) {
        for (token, value) in palette.entries() {
            self.properties
                .insert(format!("--color-{token}"), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::theme::Theme;

    #[test]
    fn new_registry_is_empty() {
        let registry = StyleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.get("--color-primary"), None);
    }

    #[test]
    fn apply_palette_sets_every_token() {
        let mut registry = StyleRegistry::new();
        registry.apply_palette(&Theme::Dark.palette());

        assert_eq!(registry.len(), 7);
        assert_eq!(registry.get("--color-primary"), Some("#6c5ce7"));
        assert_eq!(registry.get("--color-cardBg"), Some("rgba(255, 255, 255, 0.05)"));
        assert_eq!(
            registry.get("--color-textSecondary"),
            Some("rgba(255, 255, 255, 0.7)")
        );
    }

    #[test]
    fn reapplying_replaces_values_in_place() {
        let mut registry = StyleRegistry::new();
        registry.apply_palette(&Theme::Dark.palette());
        registry.apply_palette(&Theme::Light.palette());

        assert_eq!(registry.len(), 7);
        assert_eq!(registry.get("--color-primary"), Some("#667eea"));
    }

    #[test]
    fn css_block_lists_all_properties() {
        let mut registry = StyleRegistry::new();
        registry.apply_palette(&Theme::Light.palette());

        let css = registry.to_css();
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
        assert!(css.contains("--color-primary: #667eea;"));
        assert!(css.contains("--color-border: rgba(255, 255, 255, 0.2);"));
        assert_eq!(css.matches(';').count(), 7);
    }
}
