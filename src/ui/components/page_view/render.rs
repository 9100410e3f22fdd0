//! Rendering implementation for PageView
//!
//! Contains the Render trait implementation, the filter bar and the action
//! panel. The table, board and drawer live in their own modules.

use gpui::{
    AnyElement, Context, Div, KeyDownEvent, SharedString, Window, deferred, div, prelude::*, px,
};

use crate::core::filters::DatePreset;
use crate::core::pages::PageBody;
use crate::core::toolbar::arrange_actions;
use crate::theme::StyleVariables;
use crate::ui::Theme;
use crate::ui::components::surface::{SurfaceColors, button};

use super::{OpenMenu, PageView};

const SEARCH_WIDTH: f32 = 240.;
const DROPDOWN_WIDTH: f32 = 180.;

/// One dropdown entry: label and what picking it does
type MenuEntry = (SharedString, Box<dyn Fn(&mut PageView)>);

fn entry(label: impl Into<SharedString>, pick: impl Fn(&mut PageView) + 'static) -> MenuEntry {
    (label.into(), Box::new(pick))
}

struct Dropdown {
    id: String,
    menu: OpenMenu,
    /// Current value, or the placeholder
    label: String,
    active: bool,
    entries: Vec<MenuEntry>,
}

impl PageView {
    fn render_search_box(
        &self,
        window: &Window,
        colors: &SurfaceColors,
        theme: &Theme,
    ) -> Div {
        let focused = self
            .focus_handle
            .as_ref()
            .is_some_and(|handle| handle.is_focused(window));
        let query = self.filters.search();

        let text = if query.is_empty() {
            div()
                .text_color(colors.text_secondary)
                .child(self.spec.filters.search_placeholder)
        } else {
            div().text_color(colors.text).child(query.to_string())
        };

        div()
            .w(px(SEARCH_WIDTH))
            .h_8()
            .px_3()
            .flex()
            .items_center()
            .gap_2()
            .rounded(theme.radius)
            .bg(colors.surface)
            .border_1()
            .border_color(if focused { colors.primary } else { colors.border })
            .text_size(theme.font_size)
            .child(div().text_color(colors.text_secondary).child("⌕"))
            .child(text)
            .when(focused, |el| {
                el.child(div().w(px(1.)).h_4().bg(colors.primary))
            })
    }

    /// Trigger plus, while open, a deferred list of entries under it
    fn render_dropdown(
        &self,
        dropdown: Dropdown,
        colors: &SurfaceColors,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> Div {
        let Dropdown {
            id,
            menu,
            label,
            active,
            entries,
        } = dropdown;
        let open = self.open_menu == Some(menu);
        let hover_bg = theme.menu_hover_bg;

        let trigger = div()
            .id(SharedString::from(format!("{}-trigger", id)))
            .h_8()
            .px_3()
            .flex()
            .items_center()
            .gap_2()
            .rounded(theme.radius)
            .cursor_pointer()
            .bg(colors.surface)
            .border_1()
            .border_color(if open { colors.primary } else { colors.border })
            .text_size(theme.font_size)
            .text_color(if active { colors.text } else { colors.text_secondary })
            .on_click(cx.listener(move |this, _event, _window, cx| {
                this.toggle_menu(menu);
                cx.notify();
            }))
            .child(label)
            .child(div().text_xs().child(if open { "▴" } else { "▾" }));

        let items: Vec<_> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (label, pick))| {
                div()
                    .id(SharedString::from(format!("{}-option-{}", id, index)))
                    .px_3()
                    .py_1()
                    .cursor_pointer()
                    .text_color(colors.text)
                    .hover(|s| s.bg(hover_bg))
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        pick(this);
                        cx.notify();
                    }))
                    .child(label)
            })
            .collect();

        div().relative().child(trigger).when(open, |el| {
            el.child(
                deferred(
                    div()
                        .absolute()
                        .top(px(36.))
                        .left_0()
                        .w(px(DROPDOWN_WIDTH))
                        .py_1()
                        .flex()
                        .flex_col()
                        .rounded(theme.radius)
                        .bg(colors.surface)
                        .border_1()
                        .border_color(colors.border)
                        .text_size(theme.font_size)
                        .when(!theme.flat_dropdown, |el| el.shadow_sm())
                        .children(items),
                )
                .with_priority(1),
            )
        })
    }

    pub(super) fn render_filter_bar(
        &self,
        window: &Window,
        colors: &SurfaceColors,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> Div {
        let config = self.spec.filters;
        let mut bar = div()
            .w_full()
            .flex()
            .flex_row()
            .flex_wrap()
            .items_center()
            .gap_2()
            .child(self.render_search_box(window, colors, theme));

        if config.date_column.is_some() && !config.date_presets.is_empty() {
            let current = self.filters.date_preset();
            let mut entries = vec![entry("Any Date", |view| view.choose_date_preset(None))];
            entries.extend(config.date_presets.iter().map(|&preset| {
                entry(preset.label(), move |view| {
                    view.choose_date_preset(Some(preset))
                })
            }));

            let dropdown = Dropdown {
                id: "date-preset".to_string(),
                menu: OpenMenu::DatePreset,
                label: current.map_or("Select Date", DatePreset::label).to_string(),
                active: current.is_some(),
                entries,
            };
            bar = bar.child(self.render_dropdown(dropdown, colors, theme, cx));
        }

        for (index, select) in config.selects.iter().enumerate() {
            let column = select.column;
            let current = self.filters.selection(column);
            let mut entries = vec![entry("All", move |view| view.choose_option(column, None))];
            entries.extend(select.options.iter().map(|&option| {
                entry(option, move |view| view.choose_option(column, Some(option)))
            }));

            let dropdown = Dropdown {
                id: format!("select-{}", column),
                menu: OpenMenu::Select(index),
                label: current.unwrap_or(select.placeholder).to_string(),
                active: current.is_some(),
                entries,
            };
            bar = bar.child(self.render_dropdown(dropdown, colors, theme, cx));
        }

        let has_changes = self.filters.has_changes();
        bar.child(
            button("reset-filters", "Reset Filters", false, has_changes, colors, theme).on_click(
                cx.listener(move |this, _event, _window, cx| {
                    if has_changes {
                        this.reset_filters();
                        cx.notify();
                    }
                }),
            ),
        )
    }

    pub(super) fn render_action_panel(
        &self,
        colors: &SurfaceColors,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> Div {
        let selected = self.selected_ids().len();

        let buttons = arrange_actions(self.spec.actions).into_iter().map(|action| {
            let enabled = action.enabled.allows(selected);
            let label = if action.icon_only {
                action.glyph.to_string()
            } else {
                format!("{} {}", action.glyph, action.label)
            };
            let key = action.key;

            button(
                SharedString::from(format!("action-{}", key)),
                label,
                action.primary,
                enabled,
                colors,
                theme,
            )
            .when(action.icon_only, |el| {
                el.tooltip(move |_window, cx| {
                    cx.new(|_cx| Tooltip(action.label.into())).into()
                })
            })
            .on_click(cx.listener(move |this, _event, _window, cx| {
                if this.run_action(key) {
                    cx.notify();
                }
            }))
        });

        div()
            .flex()
            .flex_row()
            .justify_end()
            .items_center()
            .gap_2()
            .children(buttons)
    }

    fn render_body(
        &self,
        colors: &SurfaceColors,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match self.spec.body {
            PageBody::Table { columns, .. } => self
                .render_table(columns, colors, theme, cx)
                .into_any_element(),
            PageBody::Board => self.render_board(colors, theme, cx).into_any_element(),
        }
    }
}

/// Plain text tooltip for icon-only buttons
struct Tooltip(SharedString);

impl Render for Tooltip {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = Theme::current(cx);
        div()
            .px_2()
            .py_1()
            .rounded(theme.radius)
            .bg(theme.bg_card)
            .border_1()
            .border_color(theme.border)
            .text_xs()
            .text_color(theme.text)
            .child(self.0.clone())
    }
}

impl Render for PageView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Grab focus so typing goes to the search box
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            if let Some(ref focus_handle) = self.focus_handle {
                focus_handle.focus(window);
            }
        }

        let theme = Theme::current(cx);
        let variables = cx.global::<StyleVariables>().clone();
        let colors = SurfaceColors::read(&variables, &theme);

        let mut container = div()
            .key_context("PageView")
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                let keystroke = &event.keystroke;
                if keystroke.modifiers.platform || keystroke.modifiers.control {
                    return;
                }
                if this.key_input(&keystroke.key, keystroke.key_char.as_deref()) {
                    cx.notify();
                }
            }))
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_row()
                    .items_start()
                    .justify_between()
                    .gap_4()
                    .child(self.render_filter_bar(window, &colors, &theme, cx))
                    .child(self.render_action_panel(&colors, &theme, cx)),
            )
            .child(self.render_body(&colors, &theme, cx));

        if let Some(ref focus_handle) = self.focus_handle {
            container = container.track_focus(focus_handle);
        }

        if let Some(content) = self.drawer_content() {
            container = container.child(self.render_drawer(content, &colors, &theme, cx));
        }

        container
    }
}
