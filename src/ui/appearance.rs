//! Bridge between gpui and the theme engine
//!
//! Installs the theme store, the OS scheme source and the published style
//! variables as gpui globals, and maps window appearance onto the engine's
//! light/dark scheme.

use gpui::{App, Entity, Global, Hsla, WindowAppearance, prelude::*};

use crate::theme::{
    ColorTheme, EffectiveMode, JsonFileStorage, MemoryStorage, Mode, SettingsStorage,
    SharedScheme, StyleVariables, ThemeStore,
};
use crate::ui::theme::parse_color;

/// The app-wide theme store
pub struct GlobalThemeStore(pub Entity<ThemeStore>);

impl Global for GlobalThemeStore {}

/// The OS scheme source shared with the store
pub struct GlobalScheme(pub SharedScheme);

impl Global for GlobalScheme {}

impl Global for StyleVariables {}

impl StyleVariables {
    /// Read a published variable as a gpui color
    pub fn color(&self, name: &str) -> Option<Hsla> {
        self.get(name).map(|value| parse_color(&value))
    }
}

/// Map a window appearance onto a light/dark scheme
pub fn scheme_from_appearance(appearance: WindowAppearance) -> EffectiveMode {
    match appearance {
        WindowAppearance::Dark | WindowAppearance::VibrantDark => EffectiveMode::Dark,
        WindowAppearance::Light | WindowAppearance::VibrantLight => EffectiveMode::Light,
    }
}

/// Record a window appearance as the current OS scheme
pub fn record_appearance(scheme: &SharedScheme, appearance: WindowAppearance) -> EffectiveMode {
    let mode = scheme_from_appearance(appearance);
    scheme.set(mode);
    mode
}

/// What to do with the window appearance observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverChange {
    Attach,
    Detach,
    Keep,
}

/// Observer follow-up given whether the store watches the OS scheme and
/// whether an observer is currently attached
pub fn observer_change(watching: bool, attached: bool) -> ObserverChange {
    match (watching, attached) {
        (true, false) => ObserverChange::Attach,
        (false, true) => ObserverChange::Detach,
        _ => ObserverChange::Keep,
    }
}

/// Create the theme store and install the theme globals
///
/// Must run before any window opens so the first frame already uses the
/// restored selection.
pub fn init(cx: &mut App) -> Entity<ThemeStore> {
    let storage: Box<dyn SettingsStorage> = match JsonFileStorage::in_app_data_dir() {
        Ok(storage) => {
            log::info!("Theme settings: {}", storage.path().display());
            Box::new(storage)
        }
        Err(e) => {
            log::warn!("Theme choices will not be saved: {}", e);
            Box::new(MemoryStorage::new())
        }
    };

    let scheme = SharedScheme::new(Some(scheme_from_appearance(cx.window_appearance())));
    let variables = StyleVariables::new();

    let store_scheme = scheme.clone();
    let store_variables = variables.clone();
    let store = cx.new(|_cx| {
        ThemeStore::new(storage, Box::new(store_scheme), Box::new(store_variables))
    });

    cx.set_global(variables);
    cx.set_global(GlobalScheme(scheme));
    cx.set_global(GlobalThemeStore(store.clone()));
    store
}

/// Handle to the app-wide theme store
pub fn theme_store(cx: &App) -> Entity<ThemeStore> {
    cx.global::<GlobalThemeStore>().0.clone()
}

/// Mutate the theme store and notify its observers
pub fn update_theme(cx: &mut App, f: impl FnOnce(&mut ThemeStore)) {
    let store = theme_store(cx);
    store.update(cx, |store, cx| {
        f(store);
        cx.notify();
    });
}

/// Select a mode from the UI
///
/// Refreshes the recorded OS scheme first: the window-appearance observer is
/// only attached while following the OS, so the last observed value may be
/// stale when switching back to auto.
pub fn select_mode(cx: &mut App, mode: Mode) {
    let appearance = cx.window_appearance();
    record_appearance(&cx.global::<GlobalScheme>().0, appearance);
    update_theme(cx, |store| store.set_mode(mode));
}

/// Select a color theme from the UI
pub fn select_color_theme(cx: &mut App, theme: ColorTheme) {
    update_theme(cx, |store| store.set_color_theme(theme));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::Harness;
    use crate::theme::{StyleSink, THEME_PRIMARY, THEME_TEXT};
    use gpui::rgb;

    #[test]
    fn test_observer_change() {
        assert_eq!(observer_change(true, false), ObserverChange::Attach);
        assert_eq!(observer_change(true, true), ObserverChange::Keep);
        assert_eq!(observer_change(false, true), ObserverChange::Detach);
        assert_eq!(observer_change(false, false), ObserverChange::Keep);
    }

    #[test]
    fn test_observer_follows_mode_changes() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();
        let scheme = &harness.scheme;
        let mut attached = false;
        let mut sync = |attached: &mut bool| {
            match observer_change(scheme.is_watching(), *attached) {
                ObserverChange::Attach => *attached = true,
                ObserverChange::Detach => *attached = false,
                ObserverChange::Keep => {}
            }
        };

        // Default mode is auto, so the first render attaches
        sync(&mut attached);
        assert!(attached);

        store.set_mode(Mode::Light);
        sync(&mut attached);
        assert!(!attached);

        // Appearance changes seen while detached only update the recorded scheme
        let seen = record_appearance(scheme, WindowAppearance::VibrantDark);
        assert_eq!(seen, EffectiveMode::Dark);
        store.system_scheme_changed(seen);
        assert_eq!(store.effective_mode(), EffectiveMode::Light);

        // Returning to auto picks up the recorded scheme and reattaches
        store.set_mode(Mode::Auto);
        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
        sync(&mut attached);
        assert!(attached);
    }

    #[test]
    fn test_recorded_appearance_drives_auto() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();
        assert!(harness.scheme.is_watching());

        let seen = record_appearance(&harness.scheme, WindowAppearance::Dark);
        store.system_scheme_changed(seen);
        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
    }

    #[test]
    fn test_scheme_from_appearance() {
        assert_eq!(scheme_from_appearance(WindowAppearance::Dark), EffectiveMode::Dark);
        assert_eq!(
            scheme_from_appearance(WindowAppearance::VibrantDark),
            EffectiveMode::Dark
        );
        assert_eq!(scheme_from_appearance(WindowAppearance::Light), EffectiveMode::Light);
        assert_eq!(
            scheme_from_appearance(WindowAppearance::VibrantLight),
            EffectiveMode::Light
        );
    }

    #[test]
    fn test_variable_colors() {
        let mut variables = StyleVariables::new();
        assert_eq!(variables.color(THEME_PRIMARY), None);

        variables.set_property(THEME_PRIMARY, "#eb2f96");
        variables.set_property(THEME_TEXT, "#ffffff");

        assert_eq!(variables.color(THEME_PRIMARY), Some(Hsla::from(rgb(0xeb2f96))));
        assert_eq!(variables.color(THEME_TEXT), Some(Hsla::from(rgb(0xffffff))));
    }
}
