//! Sidebar component - collapsed navigation menu

use gpui::{Context, Div, SharedString, div, prelude::*, px};

use crate::core::Route;
use crate::ui::Theme;

use super::AppShell;

const SIDER_WIDTH: f32 = 80.;

/// Render the navigation sider
pub fn render_sidebar(current: Route, theme: &Theme, cx: &mut Context<AppShell>) -> Div {
    let hover_bg = theme.menu_hover_bg;

    let items = Route::MENU.into_iter().map(|route| {
        let selected = route == current;
        div()
            .id(SharedString::from(format!("nav-{}", route.label())))
            .w_full()
            .h_12()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .rounded(theme.radius)
            .cursor_pointer()
            .text_color(if selected {
                theme.menu_item_selected
            } else {
                theme.menu_item
            })
            .when(selected, |el| el.bg(theme.menu_selected_bg))
            .when(!selected, |el| el.hover(|s| s.bg(hover_bg)))
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.navigate(route, cx);
            }))
            .child(div().text_size(theme.icon_size).child(route.glyph()))
            .child(div().text_xs().child(route.label()))
    });

    div()
        .w(px(SIDER_WIDTH))
        .h_full()
        .flex()
        .flex_col()
        .bg(theme.bg_sider)
        .border_r_1()
        .border_color(theme.border)
        // Logo, leading back to the dashboard
        .child(
            div()
                .id("logo")
                .h_16()
                .cursor_pointer()
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.navigate(Route::Dashboard, cx);
                }))
                .flex()
                .items_center()
                .justify_center()
                .border_b_1()
                .border_color(theme.border)
                .child(
                    div()
                        .size(px(32.))
                        .rounded_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .bg(theme.accent)
                        .text_color(gpui::white())
                        .font_weight(gpui::FontWeight::BOLD)
                        .child("S"),
                ),
        )
        // Menu, vertically centered
        .child(
            div()
                .flex_1()
                .flex()
                .flex_col()
                .justify_center()
                .gap_1()
                .px_2()
                .children(items),
        )
}
