//! Theme resolution engine
//!
//! This module contains:
//! - Static palette tables (color theme accents, base presets, tints)
//! - Palette resolution from a (color theme, effective mode) pair
//! - The styling-config adapter consumed by the rendering layer
//! - Persistence, OS color-scheme and style-variable collaborators
//! - The theme store that ties them together
//!
//! Nothing here depends on the UI toolkit; `ui::appearance` bridges it to gpui.

mod config;
mod palette;
mod publisher;
mod scheme;
mod storage;
mod store;
mod tables;

pub use config::{Algorithm, StyleConfig, Surface, family_name, to_style_config};
pub use palette::{ColorTheme, EffectiveMode, Mode, resolve_palette};
pub use publisher::{
    StyleSink, StyleVariables, THEME_BACKGROUND, THEME_BORDER, THEME_PRIMARY, THEME_SIDER,
    THEME_SURFACE, THEME_TEXT, THEME_TEXT_SECONDARY, VARIABLE_NAMES,
};
pub use scheme::SharedScheme;
pub use storage::{JsonFileStorage, MemoryStorage, SettingsStorage};
pub use store::ThemeStore;
