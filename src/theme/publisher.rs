//! Variable publisher
//!
//! Pushes the resolved palette into named, globally readable style slots so
//! hand-drawn surfaces can read theme colors without holding the store.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::palette::PaletteRecord;

pub const THEME_PRIMARY: &str = "--theme-primary";
pub const THEME_BACKGROUND: &str = "--theme-background";
pub const THEME_SURFACE: &str = "--theme-surface";
pub const THEME_SIDER: &str = "--theme-sider";
pub const THEME_BORDER: &str = "--theme-border";
pub const THEME_TEXT: &str = "--theme-text";
pub const THEME_TEXT_SECONDARY: &str = "--theme-text-secondary";

/// Every published slot
pub const VARIABLE_NAMES: [&str; 7] = [
    THEME_PRIMARY,
    THEME_BACKGROUND,
    THEME_SURFACE,
    THEME_SIDER,
    THEME_BORDER,
    THEME_TEXT,
    THEME_TEXT_SECONDARY,
];

/// Write primitive for global style variables
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Shared map of style variables
///
/// Cloning yields another handle onto the same map.
#[derive(Debug, Clone, Default)]
pub struct StyleVariables {
    values: Rc<RefCell<BTreeMap<String, String>>>,
}

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }
}

impl StyleSink for StyleVariables {
    fn set_property(&mut self, name: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

/// Write each palette color to its slot
pub fn publish(palette: &PaletteRecord, sink: &mut dyn StyleSink) {
    sink.set_property(THEME_PRIMARY, palette.primary_color);
    sink.set_property(THEME_BACKGROUND, palette.background_color);
    sink.set_property(THEME_SURFACE, palette.surface_color);
    sink.set_property(THEME_SIDER, palette.sider_color);
    sink.set_property(THEME_BORDER, palette.border_color);
    sink.set_property(THEME_TEXT, palette.text_color);
    sink.set_property(THEME_TEXT_SECONDARY, palette.secondary_text_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{ColorTheme, EffectiveMode, resolve_palette};

    #[test]
    fn test_publish_fills_every_slot() {
        let palette = resolve_palette(ColorTheme::Sky, EffectiveMode::Dark);
        let mut variables = StyleVariables::new();
        publish(&palette, &mut variables);

        for name in VARIABLE_NAMES {
            assert!(variables.get(name).is_some(), "{} should be set", name);
        }
        assert_eq!(variables.get(THEME_PRIMARY).unwrap(), "#40a9ff");
        assert_eq!(variables.get(THEME_SIDER).unwrap(), "#1a2a3a");
        assert_eq!(variables.get(THEME_TEXT_SECONDARY).unwrap(), "#a0a0a0");
    }

    #[test]
    fn test_publish_is_idempotent() {
        let palette = resolve_palette(ColorTheme::Mint, EffectiveMode::Light);
        let mut variables = StyleVariables::new();

        let read_all = |variables: &StyleVariables| -> Vec<Option<String>> {
            VARIABLE_NAMES.iter().map(|name| variables.get(name)).collect()
        };

        publish(&palette, &mut variables);
        let first = read_all(&variables);
        publish(&palette, &mut variables);

        assert_eq!(first, read_all(&variables));
        assert_eq!(variables.get(THEME_BACKGROUND).unwrap(), "#fafafa");
    }

    #[test]
    fn test_handles_share_values() {
        let reader = StyleVariables::new();
        let mut writer = reader.clone();

        writer.set_property(THEME_BORDER, "#e8e8e8");
        assert_eq!(reader.get(THEME_BORDER).as_deref(), Some("#e8e8e8"));
    }
}
