//! Header component - page title bar and user menu

use gpui::{Context, Div, SharedString, deferred, div, prelude::*, px};

use crate::core::Route;
use crate::ui::Theme;

use super::AppShell;

const USER_NAME: &str = "John Doe";
const MENU_WIDTH: f32 = 160.;

/// Entries in the user menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    Profile,
    Settings,
    Logout,
}

impl UserMenuItem {
    /// Display order; a divider sits before `Logout`
    pub const ALL: [UserMenuItem; 3] = [
        UserMenuItem::Profile,
        UserMenuItem::Settings,
        UserMenuItem::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserMenuItem::Profile => "Profile",
            UserMenuItem::Settings => "Settings",
            UserMenuItem::Logout => "Logout",
        }
    }

    /// Route the item leads to, if it navigates
    pub fn route(self) -> Option<Route> {
        match self {
            UserMenuItem::Settings => Some(Route::Settings),
            UserMenuItem::Profile | UserMenuItem::Logout => None,
        }
    }
}

/// Render the application header
pub struct Header;

impl Header {
    fn render_user_menu(theme: &Theme, cx: &mut Context<AppShell>) -> Div {
        let hover_bg = theme.menu_hover_bg;

        let items = UserMenuItem::ALL.into_iter().map(|item| {
            div()
                .when(item == UserMenuItem::Logout, |el| {
                    el.border_t_1().border_color(theme.border).mt_1().pt_1()
                })
                .child(
                    div()
                        .id(SharedString::from(format!("user-menu-{}", item.label())))
                        .px_3()
                        .py_1()
                        .cursor_pointer()
                        .text_color(theme.text)
                        .hover(|s| s.bg(hover_bg))
                        .on_click(cx.listener(move |this, _event, _window, cx| {
                            this.choose_user_menu_item(item, cx);
                        }))
                        .child(item.label()),
                )
        });
        let items: Vec<_> = items.collect();

        div()
            .absolute()
            .top(px(40.))
            .right_0()
            .w(px(MENU_WIDTH))
            .py_1()
            .flex()
            .flex_col()
            .rounded(theme.radius)
            .bg(theme.bg_card)
            .border_1()
            .border_color(theme.border)
            .text_size(theme.font_size)
            .when(!theme.flat_dropdown, |el| el.shadow_sm())
            .children(items)
    }

    /// Render the header with the given title and the user menu
    pub fn render(
        title: &str,
        user_menu_open: bool,
        theme: &Theme,
        cx: &mut Context<AppShell>,
    ) -> Div {
        let hover_bg = theme.menu_hover_bg;

        let trigger = div()
            .id("user-menu-trigger")
            .px_2()
            .py_1()
            .flex()
            .items_center()
            .gap_2()
            .rounded(theme.radius)
            .cursor_pointer()
            .hover(|s| s.bg(hover_bg))
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.toggle_user_menu(cx);
            }))
            .child(
                div()
                    .size(px(28.))
                    .rounded_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(theme.accent)
                    .text_color(gpui::white())
                    .text_sm()
                    .child(USER_NAME.chars().next().map(String::from).unwrap_or_default()),
            )
            .child(
                div()
                    .text_size(theme.font_size)
                    .text_color(theme.text)
                    .child(USER_NAME),
            )
            .child(div().text_xs().text_color(theme.text_muted).child("▾"));

        let menu = user_menu_open.then(|| deferred(Self::render_user_menu(theme, cx)).with_priority(1));

        div()
            .w_full()
            .h_16()
            .px_6()
            .flex()
            .items_center()
            .justify_between()
            .bg(theme.bg_header)
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .text_size(theme.heading(3))
                    .font_weight(theme.font_weight_strong)
                    .text_color(theme.text)
                    .child(title.to_string()),
            )
            .child(div().relative().child(trigger).children(menu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_menu_items() {
        let labels: Vec<_> = UserMenuItem::ALL.iter().map(|item| item.label()).collect();
        assert_eq!(labels, vec!["Profile", "Settings", "Logout"]);

        assert_eq!(UserMenuItem::Settings.route(), Some(Route::Settings));
        assert_eq!(UserMenuItem::Profile.route(), None);
        assert_eq!(UserMenuItem::Logout.route(), None);
    }
}
