//! Theme identities and palette resolution
//!
//! A palette is fully determined by a (color theme, effective mode) pair.
//! `resolve_palette` is total over that domain and has no hidden state.

use std::fmt;

use super::tables::{accent_tint, base_preset, color_theme_info};

/// Named accent-color palette choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorTheme {
    #[default]
    Lavender,
    Mint,
    Peach,
    Sky,
    Rose,
}

impl ColorTheme {
    /// Every color theme, in the order the switcher shows them
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Lavender,
        ColorTheme::Mint,
        ColorTheme::Peach,
        ColorTheme::Sky,
        ColorTheme::Rose,
    ];

    /// Stable identifier used for persistence
    pub fn id(self) -> &'static str {
        match self {
            ColorTheme::Lavender => "lavender",
            ColorTheme::Mint => "mint",
            ColorTheme::Peach => "peach",
            ColorTheme::Sky => "sky",
            ColorTheme::Rose => "rose",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        color_theme_info(self).name
    }

    pub fn dot_color(self) -> &'static str {
        color_theme_info(self).dot
    }

    /// The theme after this one, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl TryFrom<&str> for ColorTheme {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.id() == value)
            .ok_or_else(|| format!("Unknown color theme: {:?}", value))
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Requested light/dark preference; `Auto` follows the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Light, Mode::Dark, Mode::Auto];

    pub fn id(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::Auto => "auto",
        }
    }

    /// The mode this request pins, or `None` for `Auto`
    pub fn explicit(self) -> Option<EffectiveMode> {
        match self {
            Mode::Light => Some(EffectiveMode::Light),
            Mode::Dark => Some(EffectiveMode::Dark),
            Mode::Auto => None,
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.id() == value)
            .ok_or_else(|| format!("Unknown theme mode: {:?}", value))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Resolved mode actually applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectiveMode {
    #[default]
    Light,
    Dark,
}

impl EffectiveMode {
    pub fn is_dark(self) -> bool {
        self == EffectiveMode::Dark
    }

    /// Capitalized label ("Light" / "Dark")
    pub fn label(self) -> &'static str {
        match self {
            EffectiveMode::Light => "Light",
            EffectiveMode::Dark => "Dark",
        }
    }
}

/// The user's explicit choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSelection {
    pub color_theme: ColorTheme,
    pub mode: Mode,
}

/// Concrete colors derived from a (color theme, effective mode) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRecord {
    /// Display label, e.g. "Mint Fresh (Dark)"
    pub name: String,
    pub primary_color: &'static str,
    pub background_color: &'static str,
    pub surface_color: &'static str,
    pub sider_color: &'static str,
    pub border_color: &'static str,
    pub text_color: &'static str,
    pub secondary_text_color: &'static str,
    pub dot_color: &'static str,
}

/// Resolve the palette for a color theme in a resolved mode
pub fn resolve_palette(theme: ColorTheme, mode: EffectiveMode) -> PaletteRecord {
    let info = color_theme_info(theme);
    let base = base_preset(mode);
    let tint = accent_tint(info.accent, mode);

    PaletteRecord {
        name: format!("{} ({})", info.name, mode.label()),
        primary_color: info.accent,
        background_color: base.background,
        surface_color: base.surface,
        sider_color: tint.sider,
        border_color: tint.border,
        text_color: base.text,
        secondary_text_color: base.secondary_text,
        dot_color: info.dot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::tables::{DARK_BASE, LIGHT_BASE};

    #[test]
    fn test_resolve_palette_is_total() {
        for theme in ColorTheme::ALL {
            for mode in [EffectiveMode::Light, EffectiveMode::Dark] {
                let palette = resolve_palette(theme, mode);
                assert!(!palette.name.is_empty());
                let colors = [
                    ("primary", palette.primary_color),
                    ("background", palette.background_color),
                    ("surface", palette.surface_color),
                    ("sider", palette.sider_color),
                    ("border", palette.border_color),
                    ("text", palette.text_color),
                    ("secondary text", palette.secondary_text_color),
                    ("dot", palette.dot_color),
                ];
                for (field, value) in colors {
                    assert!(
                        value.starts_with('#') && value.len() == 7,
                        "{} for {}/{:?} should be a hex color, got {:?}",
                        field,
                        theme,
                        mode,
                        value
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolve_palette_is_deterministic() {
        for theme in ColorTheme::ALL {
            assert_eq!(
                resolve_palette(theme, EffectiveMode::Dark),
                resolve_palette(theme, EffectiveMode::Dark)
            );
        }
    }

    #[test]
    fn test_light_lavender_palette() {
        let palette = resolve_palette(ColorTheme::Lavender, EffectiveMode::Light);
        assert_eq!(palette.name, "Lavender Dreams (Light)");
        assert_eq!(palette.primary_color, "#b37feb");
        assert_eq!(palette.background_color, LIGHT_BASE.background);
        assert_eq!(palette.surface_color, LIGHT_BASE.surface);
        assert_eq!(palette.sider_color, "#f6f0ff");
        assert_eq!(palette.border_color, "#e6d7ff");
        assert_eq!(palette.text_color, "#2c2c2c");
    }

    #[test]
    fn test_dark_mode_keeps_accent_and_swaps_base() {
        let light = resolve_palette(ColorTheme::Rose, EffectiveMode::Light);
        let dark = resolve_palette(ColorTheme::Rose, EffectiveMode::Dark);

        assert_eq!(light.primary_color, dark.primary_color);
        assert_eq!(dark.background_color, DARK_BASE.background);
        assert_eq!(dark.secondary_text_color, DARK_BASE.secondary_text);
        assert_eq!(dark.sider_color, "#3a1a2a");
        assert_eq!(dark.border_color, "#5a3a4a");
        assert_eq!(dark.name, "Rose Garden (Dark)");
    }

    #[test]
    fn test_identifiers_parse() {
        assert_eq!(ColorTheme::try_from("mint"), Ok(ColorTheme::Mint));
        assert!(ColorTheme::try_from("Mint").is_err());
        assert!(ColorTheme::try_from("not-a-real-theme").is_err());
        assert_eq!(Mode::try_from("auto"), Ok(Mode::Auto));
        assert!(Mode::try_from("system").is_err());
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(ColorTheme::Lavender.next(), ColorTheme::Mint);
        assert_eq!(ColorTheme::Rose.next(), ColorTheme::Lavender);
    }

    #[test]
    fn test_defaults() {
        let selection = ThemeSelection::default();
        assert_eq!(selection.color_theme, ColorTheme::Lavender);
        assert_eq!(selection.mode, Mode::Auto);
        assert_eq!(Mode::Auto.explicit(), None);
        assert_eq!(Mode::Dark.explicit(), Some(EffectiveMode::Dark));
    }
}
