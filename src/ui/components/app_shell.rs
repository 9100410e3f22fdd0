//! AppShell - root view with sider, header and the current page

use gpui::{
    AnyElement, App, Bounds, Context, Entity, Render, Subscription, Window, WindowBounds,
    WindowHandle, WindowOptions, div, prelude::*, px, size,
};

use crate::core::pages::page_spec;
use crate::core::{Route, title_for_path};
use crate::theme::{SharedScheme, StyleVariables};
use crate::ui::Theme;
use crate::ui::appearance::{
    GlobalScheme, ObserverChange, observer_change, record_appearance, theme_store, update_theme,
};

use super::dashboard::render_dashboard;
use super::header::{Header, UserMenuItem};
use super::page_view::PageView;
use super::settings_page::render_settings;
use super::sidebar::render_sidebar;
use super::surface::SurfaceColors;

/// The main window content
pub struct AppShell {
    route: Route,
    /// View for management routes; rebuilt on navigation
    page: Option<Entity<PageView>>,
    user_menu_open: bool,
    /// OS scheme source shared with the theme store
    scheme: SharedScheme,
    /// Window appearance observer, held only while the store follows the OS
    appearance_subscription: Option<Subscription>,
    _store_subscription: Subscription,
}

impl AppShell {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let store = theme_store(cx);
        // Re-render whenever the theme store changes
        let store_subscription = cx.observe(&store, |_this, _store, cx| cx.notify());
        let scheme = cx.global::<GlobalScheme>().0.clone();

        Self {
            route: Route::default(),
            page: None,
            user_menu_open: false,
            scheme,
            appearance_subscription: None,
            _store_subscription: store_subscription,
        }
    }

    /// Open the main window
    pub fn open(cx: &mut App) -> Result<WindowHandle<Self>, String> {
        let bounds = Bounds::centered(None, size(px(1200.), px(760.)), cx);

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                window_min_size: Some(size(px(900.), px(560.))),
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some("Salon Manager".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_window, cx| cx.new(AppShell::new),
        )
        .map_err(|e| format!("Failed to open main window: {}", e))
    }

    /// Switch to another page
    pub fn navigate(&mut self, route: Route, cx: &mut Context<Self>) {
        self.user_menu_open = false;
        if self.route == route {
            cx.notify();
            return;
        }

        log::debug!("Navigating to {}", route.path());
        self.route = route;
        self.page = page_spec(route).map(|spec| cx.new(|cx| PageView::new(spec, cx)));
        cx.notify();
    }

    pub fn toggle_user_menu(&mut self, cx: &mut Context<Self>) {
        self.user_menu_open = !self.user_menu_open;
        cx.notify();
    }

    pub fn choose_user_menu_item(&mut self, item: UserMenuItem, cx: &mut Context<Self>) {
        match item.route() {
            Some(route) => self.navigate(route, cx),
            None => {
                log::info!("User menu: {}", item.label());
                self.user_menu_open = false;
                cx.notify();
            }
        }
    }

    /// Attach the window appearance observer while the store follows the OS,
    /// drop it otherwise
    fn sync_appearance_subscription(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let attached = self.appearance_subscription.is_some();
        match observer_change(self.scheme.is_watching(), attached) {
            ObserverChange::Keep => {}
            ObserverChange::Detach => {
                self.appearance_subscription = None;
                log::debug!("Stopped observing window appearance");
            }
            ObserverChange::Attach => {
                log::debug!("Observing window appearance");
                self.appearance_subscription = Some(cx.observe_window_appearance(
                    window,
                    |this, window, cx| {
                        let scheme = record_appearance(&this.scheme, window.appearance());
                        update_theme(cx, |store| store.system_scheme_changed(scheme));
                    },
                ));
            }
        }
    }

    fn render_content(
        &mut self,
        theme: &Theme,
        variables: &StyleVariables,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        match self.route {
            Route::Settings => {
                let store = theme_store(cx);
                render_settings(store.read(cx), variables, theme).into_any_element()
            }
            Route::Dashboard => {
                let colors = SurfaceColors::read(variables, theme);
                render_dashboard(&colors, theme, cx).into_any_element()
            }
            _ => match self.page {
                Some(ref page) => page.clone().into_any_element(),
                None => div().into_any_element(),
            },
        }
    }
}

impl Render for AppShell {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_appearance_subscription(window, cx);

        let theme = Theme::current(cx);
        let variables = cx.global::<StyleVariables>().clone();
        let route = self.route;

        let content = self.render_content(&theme, &variables, cx);
        let sidebar = render_sidebar(route, &theme, cx);
        let header = Header::render(title_for_path(route.path()), self.user_menu_open, &theme, cx);

        div()
            .size_full()
            .flex()
            .flex_row()
            .bg(theme.bg)
            .text_color(theme.text)
            .font_family(theme.font_family.clone())
            .text_size(theme.font_size)
            .child(sidebar)
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(header)
                    .child(
                        div()
                            .id("page-content")
                            .flex_1()
                            .w_full()
                            .overflow_scroll()
                            .p_6()
                            .child(content),
                    ),
            )
    }
}
