//! Theme state store
//!
//! Single owner of the theme selection. Every setter synchronously resolves
//! the effective mode, recomputes the palette and styling config, and
//! republishes the style variables before returning. None of the public
//! operations can fail from the caller's point of view: storage and platform
//! failures are logged and degrade to defaults.

use super::config::{StyleConfig, to_style_config};
use super::palette::{ColorTheme, EffectiveMode, Mode, PaletteRecord, ThemeSelection, resolve_palette};
use super::publisher::{StyleSink, publish};
use super::scheme::ColorSchemeSource;
use super::storage::{COLOR_THEME_KEY, MODE_KEY, SettingsStorage};

pub struct ThemeStore {
    selection: ThemeSelection,
    effective_mode: EffectiveMode,
    palette: PaletteRecord,
    style_config: StyleConfig,
    /// True while OS scheme changes are being followed
    watching_scheme: bool,
    storage: Box<dyn SettingsStorage>,
    scheme: Box<dyn ColorSchemeSource>,
    sink: Box<dyn StyleSink>,
}

impl ThemeStore {
    /// Create the store, restoring persisted choices and publishing the
    /// initial palette before returning
    pub fn new(
        storage: Box<dyn SettingsStorage>,
        scheme: Box<dyn ColorSchemeSource>,
        sink: Box<dyn StyleSink>,
    ) -> Self {
        let selection = restore_selection(storage.as_ref());
        let effective_mode = EffectiveMode::default();
        let palette = resolve_palette(selection.color_theme, effective_mode);
        let style_config = to_style_config(&palette, effective_mode);

        let mut store = Self {
            selection,
            effective_mode,
            palette,
            style_config,
            watching_scheme: false,
            storage,
            scheme,
            sink,
        };
        store.resolve_effective_mode();
        store.refresh();

        log::info!(
            "Theme store ready: {} / {} ({})",
            store.selection.color_theme,
            store.selection.mode,
            store.palette.name
        );
        store
    }

    pub fn selection(&self) -> ThemeSelection {
        self.selection
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.selection.color_theme
    }

    pub fn mode(&self) -> Mode {
        self.selection.mode
    }

    pub fn effective_mode(&self) -> EffectiveMode {
        self.effective_mode
    }

    pub fn palette(&self) -> &PaletteRecord {
        &self.palette
    }

    pub fn style_config(&self) -> &StyleConfig {
        &self.style_config
    }

    pub fn available_color_themes(&self) -> &'static [ColorTheme] {
        &ColorTheme::ALL
    }

    /// Whether OS scheme changes are currently followed
    pub fn is_watching_scheme(&self) -> bool {
        self.watching_scheme
    }

    /// Select a color theme
    ///
    /// Accepts a `ColorTheme` or an identifier string; unknown identifiers
    /// are ignored and the current selection is kept.
    pub fn set_color_theme<T: TryInto<ColorTheme>>(&mut self, theme: T) {
        let Ok(theme) = theme.try_into() else {
            log::warn!("Ignoring unknown color theme selection");
            return;
        };

        self.selection.color_theme = theme;
        self.persist(COLOR_THEME_KEY, theme.id());
        self.refresh();
    }

    /// Select light, dark or automatic mode
    ///
    /// Switching into `Auto` queries the OS preference immediately and starts
    /// following changes; switching away stops following them.
    pub fn set_mode<T: TryInto<Mode>>(&mut self, mode: T) {
        let Ok(mode) = mode.try_into() else {
            log::warn!("Ignoring unknown theme mode selection");
            return;
        };

        self.selection.mode = mode;
        self.persist(MODE_KEY, mode.id());
        self.resolve_effective_mode();
        self.refresh();
    }

    /// Deliver an OS color-scheme change
    ///
    /// Only has an effect while the selection is `Auto` and the scheme is
    /// being watched; the last delivered value wins.
    pub fn system_scheme_changed(&mut self, scheme: EffectiveMode) {
        if self.selection.mode != Mode::Auto || !self.watching_scheme {
            log::debug!("Ignoring OS color scheme change to {:?}", scheme);
            return;
        }

        log::debug!("OS color scheme changed to {:?}", scheme);
        self.effective_mode = scheme;
        self.refresh();
    }

    fn resolve_effective_mode(&mut self) {
        if let Some(mode) = self.selection.mode.explicit() {
            self.stop_watching();
            self.effective_mode = mode;
            return;
        }

        match self.scheme.query() {
            Some(scheme) => {
                if !self.watching_scheme {
                    self.watching_scheme = self.scheme.watch();
                }
                self.effective_mode = scheme;
            }
            None => {
                log::debug!("OS color scheme unavailable, using light mode");
                self.stop_watching();
                self.effective_mode = EffectiveMode::Light;
            }
        }
    }

    fn stop_watching(&mut self) {
        if self.watching_scheme {
            self.scheme.unwatch();
            self.watching_scheme = false;
        }
    }

    /// Recompute derived state and republish it
    fn refresh(&mut self) {
        self.palette = resolve_palette(self.selection.color_theme, self.effective_mode);
        self.style_config = to_style_config(&self.palette, self.effective_mode);
        publish(&self.palette, self.sink.as_mut());
        log::debug!("Applied theme palette: {}", self.palette.name);

        match self.style_config.to_json() {
            Ok(json) => log::debug!("Style config: {}", json),
            Err(e) => log::warn!("{}", e),
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.write(key, value) {
            log::warn!("Theme choice not persisted: {}", e);
        }
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        self.stop_watching();
    }
}

/// Start from defaults and overwrite each persisted value that is valid
fn restore_selection(storage: &dyn SettingsStorage) -> ThemeSelection {
    let mut selection = ThemeSelection::default();

    if let Some(value) = read_persisted(storage, COLOR_THEME_KEY) {
        match ColorTheme::try_from(value.as_str()) {
            Ok(theme) => selection.color_theme = theme,
            Err(e) => log::warn!("Ignoring persisted color theme: {}", e),
        }
    }

    if let Some(value) = read_persisted(storage, MODE_KEY) {
        match Mode::try_from(value.as_str()) {
            Ok(mode) => selection.mode = mode,
            Err(e) => log::warn!("Ignoring persisted theme mode: {}", e),
        }
    }

    log::debug!(
        "Restored theme selection: {} / {}",
        selection.color_theme,
        selection.mode
    );
    selection
}

fn read_persisted(storage: &dyn SettingsStorage, key: &str) -> Option<String> {
    match storage.read(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{FailingStorage, Harness};
    use crate::theme::publisher::{
        StyleVariables, THEME_BACKGROUND, THEME_BORDER, THEME_PRIMARY, THEME_SIDER,
    };
    use crate::theme::scheme::SharedScheme;
    use crate::theme::storage::{JsonFileStorage, MemoryStorage};
    use crate::theme::tables::{DARK_BASE, LIGHT_BASE};

    #[test]
    fn test_defaults_with_no_persisted_state() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let store = harness.store();

        assert_eq!(store.color_theme(), ColorTheme::Lavender);
        assert_eq!(store.mode(), Mode::Auto);
        assert_eq!(store.effective_mode(), EffectiveMode::Light);
        assert!(store.is_watching_scheme());
        assert_eq!(store.available_color_themes(), &ColorTheme::ALL);
    }

    #[test]
    fn test_explicit_modes_ignore_os_preference() {
        let harness = Harness::new(Some(EffectiveMode::Dark));
        let mut store = harness.store();

        store.set_mode(Mode::Light);
        assert_eq!(store.effective_mode(), EffectiveMode::Light);

        harness.scheme.set(EffectiveMode::Light);
        store.set_mode(Mode::Dark);
        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
    }

    #[test]
    fn test_auto_uses_current_os_preference() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();
        store.set_mode(Mode::Light);

        harness.scheme.set(EffectiveMode::Dark);
        store.set_mode(Mode::Auto);

        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
        assert!(harness.scheme.is_watching());
    }

    #[test]
    fn test_auto_without_os_preference_falls_back_to_light() {
        let variables = StyleVariables::new();
        let mut store = ThemeStore::new(
            Box::new(MemoryStorage::new()),
            Box::new(SharedScheme::unavailable()),
            Box::new(variables.clone()),
        );
        store.set_mode(Mode::Dark);
        store.set_mode(Mode::Auto);

        assert_eq!(store.effective_mode(), EffectiveMode::Light);
        assert!(!store.is_watching_scheme());
        assert_eq!(variables.get(THEME_BACKGROUND).unwrap(), LIGHT_BASE.background);
    }

    #[test]
    fn test_auto_tracks_os_changes() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();
        assert_eq!(harness.variables.get(THEME_BACKGROUND).unwrap(), LIGHT_BASE.background);

        harness.scheme.set(EffectiveMode::Dark);
        store.system_scheme_changed(EffectiveMode::Dark);

        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
        assert_eq!(store.mode(), Mode::Auto);
        assert_eq!(harness.variables.get(THEME_BACKGROUND).unwrap(), DARK_BASE.background);
    }

    #[test]
    fn test_leaving_auto_stops_tracking() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();

        store.set_mode(Mode::Light);
        assert!(!harness.scheme.is_watching());
        assert!(!store.is_watching_scheme());

        store.system_scheme_changed(EffectiveMode::Dark);
        assert_eq!(store.effective_mode(), EffectiveMode::Light);
        assert_eq!(harness.variables.get(THEME_BACKGROUND).unwrap(), LIGHT_BASE.background);

        // Returning to auto re-establishes tracking
        harness.scheme.set(EffectiveMode::Dark);
        store.set_mode("auto");
        assert!(harness.scheme.is_watching());
        store.system_scheme_changed(EffectiveMode::Light);
        assert_eq!(store.effective_mode(), EffectiveMode::Light);
    }

    #[test]
    fn test_color_theme_persists_across_reload() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        {
            let mut store = harness.store();
            store.set_color_theme(ColorTheme::Mint);
        }

        let reloaded = harness.store();
        assert_eq!(reloaded.selection().color_theme, ColorTheme::Mint);
        assert_eq!(reloaded.mode(), Mode::Auto);
    }

    #[test]
    fn test_partial_persistence_keeps_default_theme() {
        let mut harness = Harness::new(Some(EffectiveMode::Light));
        harness.storage.write(MODE_KEY, "dark").unwrap();

        let store = harness.store();
        assert_eq!(store.mode(), Mode::Dark);
        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
        assert_eq!(store.color_theme(), ColorTheme::Lavender);
        assert!(!harness.scheme.is_watching());
    }

    #[test]
    fn test_invalid_persisted_values_are_ignored_individually() {
        let mut harness = Harness::new(Some(EffectiveMode::Light));
        harness.storage.write(COLOR_THEME_KEY, "rose").unwrap();
        harness.storage.write(MODE_KEY, "sepia").unwrap();

        let store = harness.store();
        assert_eq!(store.color_theme(), ColorTheme::Rose);
        assert_eq!(store.mode(), Mode::Auto);
    }

    #[test]
    fn test_settings_file_with_unexpected_entries() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("theme_settings.json");
        std::fs::write(&path, r#"{"saloon-color-theme":"mint","saloon-theme-mode":3}"#).unwrap();

        let mut store = ThemeStore::new(
            Box::new(JsonFileStorage::new(&path)),
            Box::new(SharedScheme::new(Some(EffectiveMode::Light))),
            Box::new(StyleVariables::new()),
        );
        assert_eq!(store.color_theme(), ColorTheme::Mint);
        assert_eq!(store.mode(), Mode::Auto);

        // Changing the mode must not lose the restored theme
        store.set_mode(Mode::Dark);
        drop(store);

        let reloaded = ThemeStore::new(
            Box::new(JsonFileStorage::new(&path)),
            Box::new(SharedScheme::new(Some(EffectiveMode::Light))),
            Box::new(StyleVariables::new()),
        );
        assert_eq!(reloaded.color_theme(), ColorTheme::Mint);
        assert_eq!(reloaded.mode(), Mode::Dark);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();
        store.set_color_theme(ColorTheme::Peach);
        store.set_mode(Mode::Dark);

        store.set_color_theme("not-a-real-theme");
        store.set_mode("sometimes");

        assert_eq!(store.color_theme(), ColorTheme::Peach);
        assert_eq!(store.mode(), Mode::Dark);
        assert_eq!(
            harness.storage.read(COLOR_THEME_KEY).unwrap().as_deref(),
            Some("peach")
        );
    }

    #[test]
    fn test_string_identifiers_are_accepted() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();

        store.set_color_theme("sky");
        store.set_mode("dark");

        assert_eq!(store.color_theme(), ColorTheme::Sky);
        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
    }

    #[test]
    fn test_variables_update_synchronously() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();

        store.set_color_theme(ColorTheme::Rose);
        assert_eq!(harness.variables.get(THEME_PRIMARY).unwrap(), "#eb2f96");
        assert_eq!(harness.variables.get(THEME_BORDER).unwrap(), "#ffadd2");

        store.set_mode(Mode::Dark);
        assert_eq!(harness.variables.get(THEME_BORDER).unwrap(), "#5a3a4a");
        assert_eq!(store.style_config().token.color_border, "#5a3a4a");
    }

    #[test]
    fn test_storage_failures_are_not_fatal() {
        let variables = StyleVariables::new();
        let scheme = SharedScheme::new(Some(EffectiveMode::Dark));
        let mut store = ThemeStore::new(
            Box::new(FailingStorage),
            Box::new(scheme),
            Box::new(variables.clone()),
        );

        assert_eq!(store.selection(), ThemeSelection::default());
        assert_eq!(store.effective_mode(), EffectiveMode::Dark);

        store.set_color_theme(ColorTheme::Sky);
        assert_eq!(store.color_theme(), ColorTheme::Sky);
        assert_eq!(variables.get(THEME_PRIMARY).unwrap(), "#40a9ff");
    }

    #[test]
    fn test_dropping_store_unwatches() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let store = harness.store();
        assert!(harness.scheme.is_watching());

        drop(store);
        assert!(!harness.scheme.is_watching());
    }

    #[test]
    fn test_end_to_end_light_to_dark() {
        let harness = Harness::new(Some(EffectiveMode::Light));
        let mut store = harness.store();

        assert_eq!(store.effective_mode(), EffectiveMode::Light);
        assert_eq!(store.palette().primary_color, "#b37feb");
        assert_eq!(store.palette().background_color, LIGHT_BASE.background);

        store.set_mode(Mode::Dark);

        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
        assert_eq!(store.color_theme(), ColorTheme::Lavender);
        assert_eq!(store.palette().primary_color, "#b37feb");
        assert_eq!(store.palette().background_color, DARK_BASE.background);
        assert_eq!(store.palette().sider_color, "#2a1a3a");
        assert_eq!(store.palette().border_color, "#4a3a5a");
        assert_eq!(harness.variables.get(THEME_SIDER).unwrap(), "#2a1a3a");
    }
}
