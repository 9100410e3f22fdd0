//! ModeToggle component - light/auto/dark segmented control

use gpui::{Div, FontWeight, SharedString, div, prelude::*};

use crate::theme::{EffectiveMode, Mode};
use crate::ui::Theme;
use crate::ui::appearance::select_mode;

/// Segments in display order
const OPTIONS: [(Mode, &str); 3] = [
    (Mode::Light, "☀ Light"),
    (Mode::Auto, "◐ Auto"),
    (Mode::Dark, "☾ Dark"),
];

/// Heading describing the current mode
pub fn mode_label(mode: Mode, effective: EffectiveMode) -> String {
    match mode {
        Mode::Light => "Light Mode".to_string(),
        Mode::Dark => "Dark Mode".to_string(),
        Mode::Auto => format!("Auto Mode ({})", effective.label()),
    }
}

/// Render the mode toggle
pub fn render_mode_toggle(mode: Mode, effective: EffectiveMode, theme: &Theme) -> Div {
    let hover_bg = theme.menu_hover_bg;

    let segments = OPTIONS.iter().map(|&(option, label)| {
        let selected = option == mode;
        div()
            .id(SharedString::from(format!("mode-{}", option.id())))
            .px_3()
            .py_1()
            .rounded(theme.radius)
            .text_sm()
            .cursor_pointer()
            .text_color(if selected { theme.text } else { theme.text_muted })
            .when(selected, |el| el.bg(theme.bg_card).border_1().border_color(theme.border))
            .when(!selected, |el| el.hover(|s| s.bg(hover_bg)))
            .on_click(move |_event, _window, cx| {
                if !selected {
                    select_mode(cx, option);
                }
            })
            .child(label)
    });

    div()
        .flex()
        .flex_col()
        .gap_3()
        .px_4()
        .py_3()
        .child(
            div()
                .text_color(theme.text)
                .font_weight(FontWeight::SEMIBOLD)
                .child(mode_label(mode, effective)),
        )
        .child(
            div()
                .flex()
                .flex_row()
                .gap_1()
                .p_1()
                .rounded(theme.radius)
                .bg(theme.bg)
                .border_1()
                .border_color(theme.border)
                .children(segments),
        )
}
