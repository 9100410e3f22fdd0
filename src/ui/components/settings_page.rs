//! Settings page - appearance controls and the published style variables

use gpui::{Div, div, prelude::*, px};

use crate::theme::{StyleVariables, ThemeStore, VARIABLE_NAMES};
use crate::ui::Theme;

use super::mode_toggle::render_mode_toggle;
use super::surface::{SurfaceColors, dot, surface_card};
use super::theme_switcher::render_theme_switcher;

/// One row per published variable: swatch, name and value
fn render_variables(variables: &StyleVariables, colors: &SurfaceColors, theme: &Theme) -> Div {
    let rows = VARIABLE_NAMES.iter().map(|&name| {
        let value = variables.get(name).unwrap_or_else(|| "unset".to_string());
        let swatch = variables.color(name).unwrap_or(gpui::transparent_black());

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap_3()
            .child(
                div()
                    .size(px(14.))
                    .rounded(theme.radius)
                    .border_1()
                    .border_color(colors.border)
                    .bg(swatch),
            )
            .child(
                div()
                    .w(px(200.))
                    .font_family(theme.font_family_code.clone())
                    .text_color(colors.text)
                    .child(name),
            )
            .child(
                div()
                    .font_family(theme.font_family_code.clone())
                    .text_color(colors.text_secondary)
                    .child(value),
            )
    });

    div().flex().flex_col().gap_2().text_sm().children(rows)
}

/// Render the settings page with the appearance controls
pub fn render_settings(store: &ThemeStore, variables: &StyleVariables, theme: &Theme) -> Div {
    let colors = SurfaceColors::read(variables, theme);
    let selection = store.selection();

    div()
        .w_full()
        .flex()
        .flex_col()
        .gap_4()
        .child(
            surface_card("Color Theme", &colors, theme).child(render_theme_switcher(
                selection.color_theme,
                store.available_color_themes(),
                variables,
                theme,
            )),
        )
        .child(
            surface_card("Appearance", &colors, theme)
                .child(render_mode_toggle(selection.mode, store.effective_mode(), theme))
                .when(store.is_watching_scheme(), |el| {
                    el.child(
                        div()
                            .px_4()
                            .text_xs()
                            .text_color(colors.text_secondary)
                            .child("Following the system appearance"),
                    )
                }),
        )
        .child(
            surface_card("Style Variables", &colors, theme)
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .text_sm()
                        .text_color(colors.text_secondary)
                        .child(dot(colors.primary))
                        .child(store.palette().name.clone()),
                )
                .child(render_variables(variables, &colors, theme)),
        )
}
