//! Side drawer rendering for PageView

use gpui::{Context, Div, SharedString, div, prelude::*, px};

use crate::core::drawer::{DrawerContent, DrawerItem, DrawerSection};
use crate::core::records::Tone;
use crate::ui::Theme;
use crate::ui::components::surface::{SurfaceColors, button, status_tag, tag};

use super::PageView;

fn render_item(item: &DrawerItem, colors: &SurfaceColors, theme: &Theme) -> Div {
    let label = |text: &'static str| {
        div()
            .text_xs()
            .text_color(colors.text_secondary)
            .child(text)
    };

    match item {
        DrawerItem::Field { label: name, value } => div()
            .flex()
            .flex_col()
            .gap_1()
            .child(label(*name))
            .child(div().text_color(colors.text).child(value.clone())),
        DrawerItem::Tags { label: name, values } => div()
            .flex()
            .flex_col()
            .gap_1()
            .child(label(*name))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_1()
                    .children(values.iter().map(|value| tag(*value, Tone::Neutral, colors, theme))),
            ),
        DrawerItem::Entry {
            title,
            detail,
            amount,
        } => div()
            .flex()
            .flex_row()
            .justify_between()
            .items_center()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .font_weight(theme.font_weight_strong)
                            .text_color(colors.text)
                            .child(*title),
                    )
                    .child(label(*detail)),
            )
            .child(div().text_color(colors.primary).child(*amount)),
    }
}

impl PageView {
    fn render_section(
        &self,
        index: usize,
        section: &DrawerSection,
        colors: &SurfaceColors,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> Div {
        let open = self.drawer.is_section_open(index);
        let hover_bg = theme.menu_hover_bg;

        div()
            .w_full()
            .flex()
            .flex_col()
            .border_b_1()
            .border_color(colors.border)
            .child(
                div()
                    .id(SharedString::from(format!("drawer-section-{}", index)))
                    .px_4()
                    .py_3()
                    .flex()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .hover(|s| s.bg(hover_bg))
                    .font_weight(theme.font_weight_strong)
                    .text_color(colors.text)
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.drawer.toggle_section(index);
                        cx.notify();
                    }))
                    .child(div().text_xs().child(if open { "▾" } else { "▸" }))
                    .child(section.title),
            )
            .when(open, |el| {
                el.child(
                    div()
                        .px_4()
                        .pb_3()
                        .flex()
                        .flex_col()
                        .gap_3()
                        .children(
                            section
                                .items
                                .iter()
                                .map(|item| render_item(item, colors, theme)),
                        ),
                )
            })
    }

    pub(super) fn render_drawer(
        &self,
        content: DrawerContent,
        colors: &SurfaceColors,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> Div {
        let title_bar = div()
            .w_full()
            .h_12()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(colors.border)
            .child(
                div()
                    .text_size(theme.heading(5))
                    .font_weight(theme.font_weight_strong)
                    .text_color(colors.text)
                    .child(content.title.clone()),
            )
            .child(
                button("drawer-close", "✕", false, true, colors, theme).on_click(cx.listener(
                    |this, _event, _window, cx| {
                        this.drawer.close();
                        cx.notify();
                    },
                )),
            );

        let visual = content.visual.as_ref().map(|visual| {
            div()
                .w_full()
                .p_4()
                .flex()
                .flex_col()
                .gap_1()
                .bg(colors.sider)
                .border_b_1()
                .border_color(colors.border)
                .child(
                    div()
                        .text_size(theme.heading(4))
                        .font_weight(theme.font_weight_strong)
                        .text_color(colors.text)
                        .child(visual.heading.clone()),
                )
                .when_some(visual.subheading.clone(), |el, subheading| {
                    el.child(
                        div()
                            .text_color(colors.text_secondary)
                            .child(subheading),
                    )
                })
                .when_some(visual.status, |el, status| {
                    el.child(div().flex().child(status_tag(status, colors, theme)))
                })
        });

        let quick_actions: Vec<_> = content
            .quick_actions
            .iter()
            .enumerate()
            .map(|(index, &label)| {
                button(
                    SharedString::from(format!("quick-action-{}", index)),
                    label,
                    false,
                    true,
                    colors,
                    theme,
                )
                .on_click(cx.listener(move |this, _event, _window, _cx| {
                    this.quick_action(label);
                }))
            })
            .collect();

        let sections: Vec<_> = content
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| self.render_section(index, section, colors, theme, cx))
            .collect();

        div()
            .absolute()
            .top_0()
            .right_0()
            .h_full()
            .w(px(content.width as f32))
            .flex()
            .flex_col()
            .bg(colors.surface)
            .border_l_1()
            .border_color(colors.border)
            .text_size(theme.font_size)
            .when(!theme.flat_drawer, |el| el.shadow_sm())
            .child(title_bar)
            .children(visual)
            .when(!quick_actions.is_empty(), |el| {
                el.child(
                    div()
                        .px_4()
                        .py_3()
                        .flex()
                        .flex_row()
                        .flex_wrap()
                        .gap_2()
                        .border_b_1()
                        .border_color(colors.border)
                        .children(quick_actions),
                )
            })
            .child(
                div()
                    .id("drawer-sections")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(sections),
            )
    }
}
