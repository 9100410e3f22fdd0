//! ThemeSwitcher component - one swatch per color theme

use gpui::{Div, SharedString, div, prelude::*, px};

use crate::theme::{ColorTheme, StyleVariables, THEME_TEXT};
use crate::ui::Theme;
use crate::ui::appearance::select_color_theme;
use crate::ui::theme::parse_color;

const SWATCH_SIZE: f32 = 28.;
const SELECTED_SWATCH_SIZE: f32 = 31.;

/// Render the color theme switcher
pub fn render_theme_switcher(
    current: ColorTheme,
    available: &[ColorTheme],
    variables: &StyleVariables,
    theme: &Theme,
) -> Div {
    // The selection ring follows the published text color
    let ring = variables.color(THEME_TEXT).unwrap_or(theme.text);

    let swatches = available.iter().map(|&color_theme| {
        let selected = color_theme == current;
        let size = if selected { SELECTED_SWATCH_SIZE } else { SWATCH_SIZE };

        div()
            .id(SharedString::from(format!("swatch-{}", color_theme.id())))
            .size(px(size))
            .rounded_full()
            .cursor_pointer()
            .bg(parse_color(color_theme.dot_color()))
            .border_2()
            .border_color(if selected { ring } else { gpui::transparent_black() })
            .on_click(move |_event, _window, cx| {
                select_color_theme(cx, color_theme);
            })
    });

    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_2()
        .px_4()
        .py_3()
        .child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .justify_center()
                .gap_3()
                .children(swatches),
        )
        .child(
            div()
                .text_sm()
                .text_color(theme.text_muted)
                .child(current.display_name()),
        )
}
