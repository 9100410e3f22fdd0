//! Appointment board rendering for PageView
//!
//! One lane per staff member or service room; bookings sit in start order.
//! Lane headers use the sider color and each resource keeps its own dot.

use gpui::{Context, Div, SharedString, div, prelude::*, px};

use crate::core::board::{RESOURCES, appointment_count, lanes};
use crate::ui::Theme;
use crate::ui::components::surface::{SurfaceColors, dot, progress_tag};
use crate::ui::theme::parse_color;

use super::PageView;

const LANE_HEADER_WIDTH: f32 = 200.;
const CARD_WIDTH: f32 = 220.;

impl PageView {
    pub(super) fn render_board(
        &self,
        colors: &SurfaceColors,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> Div {
        let bookings = self.visible_bookings();
        let shown = bookings.len();
        let hover_border = colors.primary;

        let lane_rows: Vec<_> = lanes(RESOURCES, &bookings)
            .into_iter()
            .map(|lane| {
                let resource_color = parse_color(lane.resource.color);

                let header = div()
                    .w(px(LANE_HEADER_WIDTH))
                    .flex_none()
                    .p_3()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .bg(colors.sider)
                    .border_r_1()
                    .border_color(colors.border)
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(dot(resource_color))
                            .child(
                                div()
                                    .font_weight(theme.font_weight_strong)
                                    .text_color(colors.text)
                                    .child(format!(
                                        "{} ({})",
                                        lane.resource.name,
                                        lane.resource.kind.label()
                                    )),
                            ),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(colors.text_secondary)
                            .child(appointment_count(lane.bookings.len())),
                    );

                let cards: Vec<_> = lane
                    .bookings
                    .iter()
                    .map(|booking| {
                        let id = booking.id;
                        let selected = self.board.is_selected(id);

                        div()
                            .id(SharedString::from(format!("booking-{}", id)))
                            .w(px(CARD_WIDTH))
                            .flex_none()
                            .p_2()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .rounded(theme.radius)
                            .cursor_pointer()
                            .bg(colors.surface)
                            .border_1()
                            .border_l_4()
                            .border_color(if selected { colors.primary } else { resource_color })
                            .hover(|s| s.border_color(hover_border))
                            .when(!theme.flat_card, |el| el.shadow_sm())
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.open_booking(id);
                                cx.notify();
                            }))
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .justify_between()
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(colors.text_secondary)
                                            .child(booking.time_range()),
                                    )
                                    .child(
                                        div()
                                            .id(SharedString::from(format!("booking-pick-{}", id)))
                                            .px_1()
                                            .rounded(theme.radius)
                                            .text_xs()
                                            .cursor_pointer()
                                            .text_color(if selected {
                                                colors.primary
                                            } else {
                                                colors.text_secondary
                                            })
                                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                                // Picking a booking must not also open the drawer
                                                cx.stop_propagation();
                                                this.board.toggle(id);
                                                cx.notify();
                                            }))
                                            .child(if selected { "☑" } else { "☐" }),
                                    ),
                            )
                            .child(
                                div()
                                    .font_weight(theme.font_weight_strong)
                                    .text_color(colors.text)
                                    .child(booking.text),
                            )
                            .child(progress_tag(booking.progress, colors, theme))
                    })
                    .collect();

                let track = if cards.is_empty() {
                    div()
                        .flex_1()
                        .p_3()
                        .flex()
                        .items_center()
                        .text_color(colors.text_secondary)
                        .child("No appointments scheduled")
                } else {
                    div()
                        .flex_1()
                        .p_3()
                        .flex()
                        .flex_row()
                        .flex_wrap()
                        .gap_2()
                        .children(cards)
                };

                div()
                    .w_full()
                    .flex()
                    .flex_row()
                    .border_b_1()
                    .border_color(colors.border)
                    .child(header)
                    .child(track)
            })
            .collect();

        div()
            .w_full()
            .flex()
            .flex_col()
            .rounded(theme.radius_lg)
            .overflow_hidden()
            .bg(colors.background)
            .border_1()
            .border_color(colors.border)
            .text_size(theme.font_size)
            .children(lane_rows)
            .child(
                div()
                    .px_3()
                    .py_2()
                    .text_xs()
                    .text_color(colors.text_secondary)
                    .child(format!(
                        "{} of {} appointments shown, {} selected",
                        shown,
                        self.total_records(),
                        self.board.selected_count()
                    )),
            )
    }
}
