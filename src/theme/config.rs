//! Styling-config adapter
//!
//! Translates a resolved palette into the configuration the rendering layer
//! consumes: a light/dark algorithm selector, global token overrides and
//! per-component override blocks. Serializes to camelCase JSON.

use serde::Serialize;

use super::palette::{EffectiveMode, PaletteRecord};

const FONT_FAMILY: &str = "\"Inter\", -apple-system, BlinkMacSystemFont, sans-serif";
const FONT_FAMILY_CODE: &str = "\"Inter\", monospace";
const NO_SHADOW: &str = "none";

/// Alpha suffix for the selected menu item background (~12.5%)
const SELECTED_ALPHA: &str = "20";
/// Alpha suffix for the hovered menu item background (~6%)
const HOVER_ALPHA: &str = "10";

/// Base color algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Default,
    Dark,
}

/// Global design tokens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOverrides {
    pub color_primary: String,
    pub color_bg_container: String,
    pub color_bg_layout: String,
    pub color_border: String,
    pub color_text: String,
    pub color_text_secondary: String,
    pub font_family: String,
    pub font_family_code: String,
    pub font_size: u32,
    pub font_size_heading1: u32,
    pub font_size_heading2: u32,
    pub font_size_heading3: u32,
    pub font_size_heading4: u32,
    pub font_size_heading5: u32,
    pub font_weight_strong: u32,
    pub border_radius: u32,
    #[serde(rename = "borderRadiusLG")]
    pub border_radius_lg: u32,
    pub box_shadow: String,
    pub box_shadow_secondary: String,
    pub box_shadow_tertiary: String,
}

/// Page layout colors
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOverrides {
    pub sider_bg: String,
    pub header_bg: String,
    pub body_bg: String,
    pub trigger_bg: String,
}

/// Navigation menu colors
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOverrides {
    pub item_bg: String,
    pub item_selected_bg: String,
    pub item_hover_bg: String,
    pub item_selected_color: String,
    pub item_color: String,
    pub icon_size: u32,
}

/// Containers drawn flat (no drop shadow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Button,
    Card,
    Dropdown,
    Drawer,
    Modal,
    Popover,
    Table,
    Tooltip,
}

impl Surface {
    pub const ALL: [Surface; 8] = [
        Surface::Button,
        Surface::Card,
        Surface::Dropdown,
        Surface::Drawer,
        Surface::Modal,
        Surface::Popover,
        Surface::Table,
        Surface::Tooltip,
    ];
}

/// Per-component override blocks
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOverrides {
    pub layout: LayoutOverrides,
    pub menu: MenuOverrides,
    /// Surfaces with shadows suppressed
    pub flat: Vec<Surface>,
}

/// Complete styling configuration handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleConfig {
    pub algorithm: Algorithm,
    pub token: TokenOverrides,
    pub components: ComponentOverrides,
}

impl StyleConfig {
    /// Whether shadows are suppressed for a surface
    pub fn is_flat(&self, surface: Surface) -> bool {
        self.components.flat.contains(&surface)
    }

    /// Pretty JSON dump, for diagnostics
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize style config: {}", e))
    }
}

/// First family of a CSS-style font list, unquoted
pub fn family_name(list: &str) -> &str {
    list.split(',')
        .next()
        .unwrap_or(list)
        .trim()
        .trim_matches('"')
}

/// Build the styling configuration for a palette
pub fn to_style_config(palette: &PaletteRecord, mode: EffectiveMode) -> StyleConfig {
    let algorithm = match mode {
        EffectiveMode::Light => Algorithm::Default,
        EffectiveMode::Dark => Algorithm::Dark,
    };

    let token = TokenOverrides {
        color_primary: palette.primary_color.to_string(),
        color_bg_container: palette.surface_color.to_string(),
        color_bg_layout: palette.background_color.to_string(),
        color_border: palette.border_color.to_string(),
        color_text: palette.text_color.to_string(),
        color_text_secondary: palette.secondary_text_color.to_string(),
        font_family: FONT_FAMILY.to_string(),
        font_family_code: FONT_FAMILY_CODE.to_string(),
        font_size: 14,
        font_size_heading1: 28,
        font_size_heading2: 24,
        font_size_heading3: 20,
        font_size_heading4: 18,
        font_size_heading5: 16,
        font_weight_strong: 600,
        border_radius: 6,
        border_radius_lg: 8,
        box_shadow: NO_SHADOW.to_string(),
        box_shadow_secondary: NO_SHADOW.to_string(),
        box_shadow_tertiary: NO_SHADOW.to_string(),
    };

    let layout = LayoutOverrides {
        sider_bg: palette.sider_color.to_string(),
        header_bg: palette.surface_color.to_string(),
        body_bg: palette.background_color.to_string(),
        trigger_bg: palette.sider_color.to_string(),
    };

    // Dark mode menus always use white labels regardless of the text token
    let item_color = if mode.is_dark() {
        "#ffffff"
    } else {
        palette.text_color
    };

    let menu = MenuOverrides {
        item_bg: "transparent".to_string(),
        item_selected_bg: format!("{}{}", palette.primary_color, SELECTED_ALPHA),
        item_hover_bg: format!("{}{}", palette.primary_color, HOVER_ALPHA),
        item_selected_color: palette.primary_color.to_string(),
        item_color: item_color.to_string(),
        icon_size: 18,
    };

    StyleConfig {
        algorithm,
        token,
        components: ComponentOverrides {
            layout,
            menu,
            flat: Surface::ALL.to_vec(),
        },
    }
}
