//! Static palette data
//!
//! Two lookup layers:
//! - color theme identity → display name and accent color
//! - (accent color, dark?) → sider and border tints
//!
//! The tint tables are keyed on the literal accent hex value, so an accent
//! that is missing from a table resolves to a neutral gray instead of failing.

use super::palette::{ColorTheme, EffectiveMode};

/// Display data for one color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorThemeInfo {
    /// Human-readable name shown in the switcher
    pub name: &'static str,
    /// Accent (primary) color
    pub accent: &'static str,
    /// Swatch color used for the theme picker dot
    pub dot: &'static str,
}

/// Mode-dependent base colors shared by every color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePreset {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
}

/// Accent-derived tints for the sider and borders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub sider: &'static str,
    pub border: &'static str,
}

const LAVENDER: ColorThemeInfo = ColorThemeInfo {
    name: "Lavender Dreams",
    accent: "#b37feb",
    dot: "#b37feb",
};

const MINT: ColorThemeInfo = ColorThemeInfo {
    name: "Mint Fresh",
    accent: "#52c41a",
    dot: "#52c41a",
};

const PEACH: ColorThemeInfo = ColorThemeInfo {
    name: "Peach Blossom",
    accent: "#ff9c6e",
    dot: "#ff9c6e",
};

const SKY: ColorThemeInfo = ColorThemeInfo {
    name: "Sky Blue",
    accent: "#40a9ff",
    dot: "#40a9ff",
};

const ROSE: ColorThemeInfo = ColorThemeInfo {
    name: "Rose Garden",
    accent: "#eb2f96",
    dot: "#eb2f96",
};

pub const LIGHT_BASE: BasePreset = BasePreset {
    background: "#fafafa",
    surface: "#ffffff",
    text: "#2c2c2c",
    secondary_text: "#666666",
};

pub const DARK_BASE: BasePreset = BasePreset {
    background: "#0f0f0f",
    surface: "#1a1a1a",
    text: "#ffffff",
    secondary_text: "#a0a0a0",
};

/// Tint used for any accent missing from the light table
pub const LIGHT_FALLBACK_TINT: Tint = Tint {
    sider: "#f5f5f5",
    border: "#e8e8e8",
};

/// Tint used for any accent missing from the dark table
pub const DARK_FALLBACK_TINT: Tint = Tint {
    sider: "#262626",
    border: "#434343",
};

const LIGHT_TINTS: [(&str, Tint); 5] = [
    ("#b37feb", Tint { sider: "#f6f0ff", border: "#e6d7ff" }), // lavender
    ("#52c41a", Tint { sider: "#f0fff4", border: "#d9f7be" }), // mint
    ("#ff9c6e", Tint { sider: "#fff7f0", border: "#ffd8bf" }), // peach
    ("#40a9ff", Tint { sider: "#f0f9ff", border: "#bae7ff" }), // sky
    ("#eb2f96", Tint { sider: "#fff0f6", border: "#ffadd2" }), // rose
];

const DARK_TINTS: [(&str, Tint); 5] = [
    ("#b37feb", Tint { sider: "#2a1a3a", border: "#4a3a5a" }),
    ("#52c41a", Tint { sider: "#1a2e1a", border: "#3a4e3a" }),
    ("#ff9c6e", Tint { sider: "#3a2a1a", border: "#5a4a3a" }),
    ("#40a9ff", Tint { sider: "#1a2a3a", border: "#3a4a5a" }),
    ("#eb2f96", Tint { sider: "#3a1a2a", border: "#5a3a4a" }),
];

/// Look up the display data for a color theme
pub fn color_theme_info(theme: ColorTheme) -> &'static ColorThemeInfo {
    match theme {
        ColorTheme::Lavender => &LAVENDER,
        ColorTheme::Mint => &MINT,
        ColorTheme::Peach => &PEACH,
        ColorTheme::Sky => &SKY,
        ColorTheme::Rose => &ROSE,
    }
}

/// Base preset for a resolved mode
pub fn base_preset(mode: EffectiveMode) -> &'static BasePreset {
    match mode {
        EffectiveMode::Light => &LIGHT_BASE,
        EffectiveMode::Dark => &DARK_BASE,
    }
}

/// Sider/border tint for an accent color, falling back to neutral gray
pub fn accent_tint(accent: &str, mode: EffectiveMode) -> Tint {
    let (table, fallback) = match mode {
        EffectiveMode::Light => (&LIGHT_TINTS, LIGHT_FALLBACK_TINT),
        EffectiveMode::Dark => (&DARK_TINTS, DARK_FALLBACK_TINT),
    };

    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(accent))
        .map(|(_, tint)| *tint)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_a_tint_in_both_tables() {
        for theme in ColorTheme::ALL {
            let accent = color_theme_info(theme).accent;
            assert_ne!(accent_tint(accent, EffectiveMode::Light), LIGHT_FALLBACK_TINT);
            assert_ne!(accent_tint(accent, EffectiveMode::Dark), DARK_FALLBACK_TINT);
        }
    }

    #[test]
    fn test_unknown_accent_uses_fallback() {
        assert_eq!(
            accent_tint("#123456", EffectiveMode::Light),
            LIGHT_FALLBACK_TINT
        );
        assert_eq!(
            accent_tint("not a color", EffectiveMode::Dark),
            DARK_FALLBACK_TINT
        );
    }

    #[test]
    fn test_accent_lookup_ignores_case() {
        let tint = accent_tint("#B37FEB", EffectiveMode::Dark);
        assert_eq!(tint.sider, "#2a1a3a");
        assert_eq!(tint.border, "#4a3a5a");
    }

    #[test]
    fn test_dot_matches_accent() {
        for theme in ColorTheme::ALL {
            let info = color_theme_info(theme);
            assert_eq!(info.dot, info.accent);
        }
    }
}
