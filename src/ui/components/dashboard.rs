//! Dashboard page - headline numbers, recent activity and shortcuts

use gpui::{Context, Div, SharedString, div, prelude::*, px};

use crate::core::pages::{DASHBOARD_INTRO, DASHBOARD_STATS, QUICK_LINKS, RECENT_ACTIVITY};
use crate::ui::Theme;

use super::AppShell;
use super::surface::{SurfaceColors, surface_card};

/// Render the dashboard
pub fn render_dashboard(colors: &SurfaceColors, theme: &Theme, cx: &mut Context<AppShell>) -> Div {
    let stats = DASHBOARD_STATS.iter().map(|stat| {
        div()
            .flex_1()
            .min_w(px(160.))
            .p_4()
            .flex()
            .flex_col()
            .gap_1()
            .rounded(theme.radius_lg)
            .bg(colors.surface)
            .border_1()
            .border_color(colors.border)
            .when(!theme.flat_card, |el| el.shadow_sm())
            .child(
                div()
                    .text_sm()
                    .text_color(colors.text_secondary)
                    .child(stat.title),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_size(theme.icon_size)
                            .text_color(colors.primary)
                            .child(stat.glyph),
                    )
                    .child(
                        div()
                            .text_size(theme.heading(2))
                            .font_weight(theme.font_weight_strong)
                            .text_color(colors.text)
                            .child(stat.value),
                    ),
            )
    });

    let activity = RECENT_ACTIVITY.iter().map(|(who, what)| {
        div()
            .flex()
            .flex_row()
            .gap_1()
            .text_color(colors.text)
            .child(div().font_weight(theme.font_weight_strong).child(*who))
            .child(*what)
    });

    let hover_bg = theme.menu_hover_bg;
    let links: Vec<_> = QUICK_LINKS
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let route = link.route;
            let title = link.title;

            div()
                .id(SharedString::from(format!("quick-link-{}", index)))
                .p_2()
                .rounded(theme.radius)
                .cursor_pointer()
                .hover(|s| s.bg(hover_bg))
                .on_click(cx.listener(move |this, _event, _window, cx| match route {
                    Some(route) => this.navigate(route, cx),
                    None => log::info!("{} is not available yet", title),
                }))
                .child(
                    div()
                        .font_weight(theme.font_weight_strong)
                        .text_color(colors.text)
                        .child(link.title),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(colors.text_secondary)
                        .child(link.description),
                )
        })
        .collect();

    div()
        .w_full()
        .flex()
        .flex_col()
        .gap_4()
        .child(
            div()
                .text_size(theme.heading(2))
                .font_weight(theme.font_weight_strong)
                .text_color(colors.text)
                .child("Dashboard"),
        )
        .child(
            div()
                .text_color(colors.text_secondary)
                .child(DASHBOARD_INTRO),
        )
        .child(div().flex().flex_row().flex_wrap().gap_4().children(stats))
        .child(
            div()
                .flex()
                .flex_row()
                .gap_4()
                .child(
                    surface_card("Recent Activity", colors, theme)
                        .flex_1()
                        .child(div().flex().flex_col().gap_2().children(activity)),
                )
                .child(
                    surface_card("Quick Actions", colors, theme)
                        .flex_1()
                        .child(div().flex().flex_col().gap_1().children(links)),
                ),
        )
}
