//! Theme module - render colors built from the styling config
//!
//! Views never resolve palettes themselves: they convert the store's current
//! `StyleConfig` into gpui colors once per render.

use gpui::{App, FontWeight, Hsla, Pixels, Rgba, SharedString, px};

use crate::theme::{Algorithm, StyleConfig, Surface, family_name};
use crate::ui::appearance::GlobalThemeStore;

/// Color scheme and type scale for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Whether the dark algorithm is active
    pub is_dark: bool,
    /// Main window (layout body) background
    pub bg: Hsla,
    /// Card/container background
    pub bg_card: Hsla,
    /// Header bar background
    pub bg_header: Hsla,
    /// Sider background
    pub bg_sider: Hsla,
    /// Primary text color
    pub text: Hsla,
    /// Secondary/muted text color
    pub text_muted: Hsla,
    /// Border color
    pub border: Hsla,
    /// Accent color (primary)
    pub accent: Hsla,
    /// Menu item label color
    pub menu_item: Hsla,
    /// Menu item label color when selected
    pub menu_item_selected: Hsla,
    /// Menu item background when selected
    pub menu_selected_bg: Hsla,
    /// Menu item background on hover
    pub menu_hover_bg: Hsla,
    pub radius: Pixels,
    pub radius_lg: Pixels,
    /// UI font, first entry of the token's family list
    pub font_family: SharedString,
    /// Font for raw values such as variable names
    pub font_family_code: SharedString,
    pub font_size: Pixels,
    /// Heading sizes, level 1 first
    pub headings: [Pixels; 5],
    pub font_weight_strong: FontWeight,
    /// Menu glyph size
    pub icon_size: Pixels,
    /// Surfaces drawn without a drop shadow
    pub flat_button: bool,
    pub flat_card: bool,
    pub flat_dropdown: bool,
    pub flat_drawer: bool,
}

impl Theme {
    /// Build render colors from a styling config
    pub fn from_config(config: &StyleConfig) -> Self {
        let token = &config.token;
        let layout = &config.components.layout;
        let menu = &config.components.menu;

        Self {
            is_dark: config.algorithm == Algorithm::Dark,
            bg: parse_color(&layout.body_bg),
            bg_card: parse_color(&token.color_bg_container),
            bg_header: parse_color(&layout.header_bg),
            bg_sider: parse_color(&layout.sider_bg),
            text: parse_color(&token.color_text),
            text_muted: parse_color(&token.color_text_secondary),
            border: parse_color(&token.color_border),
            accent: parse_color(&token.color_primary),
            menu_item: parse_color(&menu.item_color),
            menu_item_selected: parse_color(&menu.item_selected_color),
            menu_selected_bg: parse_color(&menu.item_selected_bg),
            menu_hover_bg: parse_color(&menu.item_hover_bg),
            radius: px(token.border_radius as f32),
            radius_lg: px(token.border_radius_lg as f32),
            font_family: family_name(&token.font_family).to_string().into(),
            font_family_code: family_name(&token.font_family_code).to_string().into(),
            font_size: px(token.font_size as f32),
            headings: [
                token.font_size_heading1,
                token.font_size_heading2,
                token.font_size_heading3,
                token.font_size_heading4,
                token.font_size_heading5,
            ]
            .map(|size| px(size as f32)),
            font_weight_strong: FontWeight(token.font_weight_strong as f32),
            icon_size: px(menu.icon_size as f32),
            flat_button: config.is_flat(Surface::Button),
            flat_card: config.is_flat(Surface::Card),
            flat_dropdown: config.is_flat(Surface::Dropdown),
            flat_drawer: config.is_flat(Surface::Drawer),
        }
    }

    /// Heading size for a level, clamped to 1..=5
    pub fn heading(&self, level: usize) -> Pixels {
        self.headings[level.clamp(1, 5) - 1]
    }

    /// Render colors for the store's current selection
    pub fn current(cx: &App) -> Self {
        let store = cx.global::<GlobalThemeStore>().0.read(cx);
        Self::from_config(store.style_config())
    }
}

/// Parse a config color value (`#rrggbb`, `#rrggbbaa` or `transparent`)
pub fn parse_color(value: &str) -> Hsla {
    if value == "transparent" {
        return gpui::transparent_black();
    }

    match Rgba::try_from(value) {
        Ok(rgba) => rgba.into(),
        Err(e) => {
            log::warn!("Invalid theme color {:?}: {}", value, e);
            gpui::black()
        }
    }
}
