//! Data table rendering for PageView

use gpui::{Context, Div, SharedString, div, prelude::*, px};

use crate::core::records::Column;
use crate::ui::Theme;
use crate::ui::components::surface::{SurfaceColors, status_tag};

use super::PageView;

const CHECK_WIDTH: f32 = 40.;

fn checkbox(checked: bool, colors: &SurfaceColors, theme: &Theme) -> Div {
    div()
        .size(px(16.))
        .flex()
        .items_center()
        .justify_center()
        .rounded(theme.radius)
        .border_1()
        .border_color(if checked { colors.primary } else { colors.border })
        .when(checked, |el| {
            el.bg(colors.primary)
                .text_color(gpui::white())
                .text_xs()
                .child("✓")
        })
}

impl PageView {
    pub(super) fn render_table(
        &self,
        columns: &'static [Column],
        colors: &SurfaceColors,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> Div {
        let rows = self.visible_records();
        let visible_ids: Vec<&'static str> = rows.iter().map(|r| r.id).collect();
        let all_selected = self.table.all_selected(&visible_ids);
        let sort = self.table.sort();
        let hover_bg = theme.menu_hover_bg;

        let header_cells = columns.iter().map(|column| {
            let column_id = column.id;
            let indicator = match sort {
                Some((sorted, direction)) if sorted == column_id => direction.glyph(),
                _ => "",
            };

            div()
                .id(SharedString::from(format!("column-{}", column_id)))
                .w(px(column.width as f32))
                .px_3()
                .flex()
                .items_center()
                .gap_1()
                .font_weight(theme.font_weight_strong)
                .when(column.sortable, |el| {
                    el.cursor_pointer()
                        .on_click(cx.listener(move |this, _event, _window, cx| {
                            this.table.toggle_sort(column_id);
                            cx.notify();
                        }))
                })
                .child(column.header)
                .child(div().text_xs().text_color(colors.primary).child(indicator))
        });
        let header_cells: Vec<_> = header_cells.collect();

        let select_all_ids = visible_ids.clone();
        let header = div()
            .w_full()
            .h_10()
            .flex()
            .flex_row()
            .items_center()
            .bg(colors.sider)
            .border_b_1()
            .border_color(colors.border)
            .text_color(colors.text)
            .child(
                div()
                    .id("select-all")
                    .w(px(CHECK_WIDTH))
                    .flex()
                    .justify_center()
                    .cursor_pointer()
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.table.toggle_all(&select_all_ids);
                        cx.notify();
                    }))
                    .child(checkbox(all_selected, colors, theme)),
            )
            .children(header_cells);

        let body_rows: Vec<_> = rows
            .iter()
            .map(|record| {
                let id = record.id;
                let selected = self.table.is_selected(id);

                let cells = columns.iter().map(|column| {
                    let value = record.get(column.id);
                    let cell = div().w(px(column.width as f32)).px_3().overflow_hidden();
                    if column.id == "status" {
                        cell.child(status_tag(value, colors, theme))
                    } else {
                        cell.child(value)
                    }
                });

                div()
                    .w_full()
                    .h_10()
                    .flex()
                    .flex_row()
                    .items_center()
                    .border_b_1()
                    .border_color(colors.border)
                    .when(selected, |el| el.bg(theme.menu_selected_bg))
                    .child(
                        div()
                            .id(SharedString::from(format!("row-check-{}", id)))
                            .w(px(CHECK_WIDTH))
                            .h_full()
                            .flex()
                            .items_center()
                            .justify_center()
                            .cursor_pointer()
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.table.toggle_row(id);
                                cx.notify();
                            }))
                            .child(checkbox(selected, colors, theme)),
                    )
                    .child(
                        div()
                            .id(SharedString::from(format!("row-{}", id)))
                            .flex_1()
                            .h_full()
                            .flex()
                            .flex_row()
                            .items_center()
                            .cursor_pointer()
                            .hover(|s| s.bg(hover_bg))
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.open_record(id);
                                cx.notify();
                            }))
                            .children(cells),
                    )
            })
            .collect();

        let empty = body_rows.is_empty();

        div()
            .w_full()
            .flex()
            .flex_col()
            .rounded(theme.radius_lg)
            .overflow_hidden()
            .bg(colors.surface)
            .border_1()
            .border_color(colors.border)
            .text_size(theme.font_size)
            .text_color(colors.text)
            .child(header)
            .children(body_rows)
            .when(empty, |el| {
                el.child(
                    div()
                        .w_full()
                        .py_8()
                        .flex()
                        .justify_center()
                        .text_color(colors.text_secondary)
                        .child("No matching records"),
                )
            })
            .child(
                div()
                    .px_3()
                    .py_2()
                    .text_xs()
                    .text_color(colors.text_secondary)
                    .child(format!(
                        "{} of {} shown, {} selected",
                        rows.len(),
                        self.total_records(),
                        self.table.selected_count()
                    )),
            )
    }
}
