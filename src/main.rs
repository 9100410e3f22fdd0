//! Salon Manager - GPUI Application
//!
//! Salon management front-end: a navigation shell over the management
//! screens, with a color-theme and light/dark/auto appearance system.

mod actions;
mod core;
mod logging;
mod theme;
mod ui;

#[cfg(test)]
mod test_fixtures;

use actions::{NextColorTheme, Quit, UseAutoMode, UseDarkMode, UseLightMode};
use gpui::{App, Application, KeyBinding, Menu, MenuItem};
use theme::{Mode, ThemeStore};
use ui::appearance::{select_color_theme, select_mode, theme_store};
use ui::components::AppShell;

/// Build the application menus with current theme state
fn build_menus(store: &ThemeStore) -> Vec<Menu> {
    let mode_item = |label: &str, mode: Mode| {
        // Use checkmark prefix for the active mode
        if store.mode() == mode {
            format!("✓ {}", label)
        } else {
            label.to_string()
        }
    };

    let next_theme = store.color_theme().next();

    vec![
        Menu {
            name: "Salon Manager".into(),
            items: vec![MenuItem::action("Quit", Quit)],
        },
        Menu {
            name: "Appearance".into(),
            items: vec![
                MenuItem::action(mode_item("Light Mode", Mode::Light), UseLightMode),
                MenuItem::action(mode_item("Dark Mode", Mode::Dark), UseDarkMode),
                MenuItem::action(mode_item("Auto Mode", Mode::Auto), UseAutoMode),
                MenuItem::separator(),
                MenuItem::action(
                    format!("Next Color Theme: {}", next_theme.display_name()),
                    NextColorTheme,
                ),
            ],
        },
    ]
}

fn main() {
    logging::init_logging();

    Application::new().run(|cx: &mut App| {
        // Theme store first so the first frame uses the restored selection
        let store = ui::appearance::init(cx);

        // Register action handlers
        cx.on_action(|_: &Quit, cx| cx.quit());
        cx.on_action(|_: &UseLightMode, cx| select_mode(cx, Mode::Light));
        cx.on_action(|_: &UseDarkMode, cx| select_mode(cx, Mode::Dark));
        cx.on_action(|_: &UseAutoMode, cx| select_mode(cx, Mode::Auto));
        cx.on_action(|_: &NextColorTheme, cx| {
            let next = theme_store(cx).read(cx).color_theme().next();
            select_color_theme(cx, next);
        });

        // Bind keyboard shortcuts
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-shift-l", UseLightMode, None),
            KeyBinding::new("cmd-shift-d", UseDarkMode, None),
            KeyBinding::new("cmd-shift-a", UseAutoMode, None),
            KeyBinding::new("cmd-shift-t", NextColorTheme, None),
        ]);

        // Rebuild menus on every theme change so checkmarks stay current
        let menus = build_menus(store.read(cx));
        cx.set_menus(menus);
        cx.observe(&store, |store, cx| {
            let menus = build_menus(store.read(cx));
            cx.set_menus(menus);
        })
        .detach();

        if let Err(e) = AppShell::open(cx) {
            log::error!("{}", e);
            cx.quit();
            return;
        }

        // Quit the app when the main window is closed
        cx.on_window_closed(|cx| {
            cx.quit();
        })
        .detach();

        cx.activate(true);
    });
}
