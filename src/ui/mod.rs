//! UI module - GPUI views and components
//!
//! This module contains all UI-related code:
//! - `components/` - The application shell and its parts (sider, header, pages)
//! - `theme` - Render colors built from the theme store's styling config
//! - `appearance` - gpui globals for the theme store and window appearance

pub mod appearance;
pub mod components;
pub mod theme;

pub use theme::Theme;
