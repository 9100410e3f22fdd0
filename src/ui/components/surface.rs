//! Shared building blocks for hand-styled page surfaces
//!
//! Page content reads its colors from the published style variables, falling
//! back to the render theme when a slot has not been published yet.

use gpui::{Div, Hsla, SharedString, Stateful, div, prelude::*, px, rgb};

use crate::core::board::ProgressLevel;
use crate::core::records::{Tone, status_tone};
use crate::theme::{
    StyleVariables, THEME_BACKGROUND, THEME_BORDER, THEME_PRIMARY, THEME_SIDER, THEME_SURFACE,
    THEME_TEXT, THEME_TEXT_SECONDARY,
};
use crate::ui::Theme;

/// Colors for a hand-styled surface, read from the style variables
#[derive(Debug, Clone, Copy)]
pub struct SurfaceColors {
    pub primary: Hsla,
    pub background: Hsla,
    pub surface: Hsla,
    pub sider: Hsla,
    pub border: Hsla,
    pub text: Hsla,
    pub text_secondary: Hsla,
}

impl SurfaceColors {
    pub fn read(variables: &StyleVariables, theme: &Theme) -> Self {
        Self {
            primary: variables.color(THEME_PRIMARY).unwrap_or(theme.accent),
            background: variables.color(THEME_BACKGROUND).unwrap_or(theme.bg),
            surface: variables.color(THEME_SURFACE).unwrap_or(theme.bg_card),
            sider: variables.color(THEME_SIDER).unwrap_or(theme.bg_sider),
            border: variables.color(THEME_BORDER).unwrap_or(theme.border),
            text: variables.color(THEME_TEXT).unwrap_or(theme.text),
            text_secondary: variables
                .color(THEME_TEXT_SECONDARY)
                .unwrap_or(theme.text_muted),
        }
    }
}

/// Bordered card with a heading
pub fn surface_card(title: &str, colors: &SurfaceColors, theme: &Theme) -> Div {
    div()
        .w_full()
        .flex()
        .flex_col()
        .gap_2()
        .p_4()
        .rounded(theme.radius_lg)
        .bg(colors.surface)
        .border_1()
        .border_color(colors.border)
        .when(!theme.flat_card, |el| el.shadow_sm())
        .child(
            div()
                .text_size(theme.heading(5))
                .font_weight(theme.font_weight_strong)
                .text_color(colors.text)
                .child(title.to_string()),
        )
}

/// Clickable button; primary buttons are filled with the accent
pub fn button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    primary: bool,
    enabled: bool,
    colors: &SurfaceColors,
    theme: &Theme,
) -> Stateful<Div> {
    let hover_bg = theme.menu_hover_bg;

    div()
        .id(id.into())
        .px_3()
        .py_1()
        .rounded(theme.radius)
        .text_size(theme.font_size)
        .border_1()
        .when(!theme.flat_button, |el| el.shadow_sm())
        .when(primary, |el| {
            el.bg(colors.primary)
                .border_color(colors.primary)
                .text_color(gpui::white())
        })
        .when(!primary, |el| {
            el.bg(colors.surface)
                .border_color(colors.border)
                .text_color(colors.text)
        })
        .when(enabled, |el| {
            el.cursor_pointer()
                .when(!primary, |el| el.hover(|s| s.bg(hover_bg)))
        })
        .when(!enabled, |el| el.opacity(0.45))
        .child(label.into())
}

fn tone_color(tone: Tone, colors: &SurfaceColors) -> Hsla {
    match tone {
        Tone::Positive => rgb(0x52c41a).into(),
        Tone::Warning => rgb(0xfaad14).into(),
        Tone::Negative => rgb(0xff4d4f).into(),
        Tone::Neutral => colors.primary,
    }
}

/// Small rounded label tinted by tone
pub fn tag(text: impl Into<SharedString>, tone: Tone, colors: &SurfaceColors, theme: &Theme) -> Div {
    let color = tone_color(tone, colors);
    // Dark mode: stronger tint, lighter label
    let (tint, label) = if theme.is_dark {
        (color.opacity(0.25), Hsla { l: (color.l + 0.2).min(0.9), ..color })
    } else {
        (color.opacity(0.12), Hsla { l: color.l * 0.75, ..color })
    };

    div()
        .px_2()
        .rounded(theme.radius)
        .text_xs()
        .bg(tint)
        .border_1()
        .border_color(color.opacity(0.4))
        .text_color(label)
        .child(text.into())
}

/// Tag for a record status value
pub fn status_tag(status: &'static str, colors: &SurfaceColors, theme: &Theme) -> Div {
    tag(status, status_tone(status), colors, theme)
}

/// Tag for a booking's completion
pub fn progress_tag(progress: u8, colors: &SurfaceColors, theme: &Theme) -> Div {
    let tone = match ProgressLevel::of(progress) {
        ProgressLevel::Low => Tone::Negative,
        ProgressLevel::Medium => Tone::Warning,
        ProgressLevel::High => Tone::Positive,
    };
    tag(format!("{}%", progress), tone, colors, theme)
}

/// Round color marker
pub fn dot(color: Hsla) -> Div {
    div().size(px(8.)).rounded_full().bg(color).flex_none()
}
