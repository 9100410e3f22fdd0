//! Shell components

mod app_shell;
mod dashboard;
mod header;
mod mode_toggle;
mod page_view;
mod settings_page;
mod sidebar;
mod surface;
mod theme_switcher;

pub use app_shell::AppShell;
