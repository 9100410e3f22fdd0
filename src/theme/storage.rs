//! Key/value persistence for theme selections
//!
//! Persisted to ~/Library/Application Support/Salon Manager/theme_settings.json
//! as a JSON object. Each key is read on its own, so an unexpected entry
//! never hides the others.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key for the persisted color theme identifier
pub const COLOR_THEME_KEY: &str = "saloon-color-theme";
/// Key for the persisted mode identifier
pub const MODE_KEY: &str = "saloon-theme-mode";

/// Minimal key/value persistence primitive
pub trait SettingsStorage {
    /// Read a value; `Ok(None)` when the key was never written
    fn read(&self, key: &str) -> Result<Option<String>, String>;

    /// Write a value, replacing any previous one
    fn write(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// In-process storage, lost when the app exits
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file storage
///
/// The whole file is re-read on every access, so external edits and other
/// instances are picked up without caching.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    const SETTINGS_FILE: &'static str = "theme_settings.json";

    /// Storage backed by a specific file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage in the app data directory, creating the directory if needed
    pub fn in_app_data_dir() -> Result<Self, String> {
        let app_dir = get_app_data_dir()?;
        Ok(Self::new(app_dir.join(Self::SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the settings file; a missing file is an empty object
    fn load_all(&self) -> Result<Map<String, Value>, String> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read theme settings: {}", e))?;

        match serde_json::from_str(&contents) {
            Ok(Value::Object(values)) => Ok(values),
            Ok(_) => Err("Failed to parse theme settings: not a JSON object".to_string()),
            Err(e) => Err(format!("Failed to parse theme settings: {}", e)),
        }
    }
}

impl SettingsStorage for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        match self.load_all()?.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(format!("Theme setting {} is not a string: {}", key, other)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        // Unrelated entries are kept; only an unparseable file is replaced
        let mut values = self.load_all().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable theme settings: {}", e);
            Map::new()
        });
        values.insert(key.to_string(), Value::String(value.to_string()));

        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| format!("Failed to serialize theme settings: {}", e))?;

        fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write theme settings: {}", e))?;

        log::debug!("Saved {} to {:?}", key, self.path);
        Ok(())
    }
}

/// Get the app data directory (~/Library/Application Support/Salon Manager/)
fn get_app_data_dir() -> Result<PathBuf, String> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| "Could not determine data directory".to_string())?;

    let app_dir = data_dir.join("Salon Manager");

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)
            .map_err(|e| format!("Failed to create app data directory: {}", e))?;
    }

    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_read_write() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read(MODE_KEY).unwrap(), None);

        storage.write(MODE_KEY, "dark").unwrap();
        assert_eq!(storage.read(MODE_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_json_storage_missing_file_reads_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("settings.json"));

        assert_eq!(storage.read(COLOR_THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_json_storage_keeps_keys_independent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let mut storage = JsonFileStorage::new(&path);
        storage.write(COLOR_THEME_KEY, "mint").unwrap();
        storage.write(MODE_KEY, "dark").unwrap();
        storage.write(COLOR_THEME_KEY, "rose").unwrap();

        // A second handle sees what the first wrote
        let reopened = JsonFileStorage::new(&path);
        assert_eq!(reopened.read(COLOR_THEME_KEY).unwrap(), Some("rose".to_string()));
        assert_eq!(reopened.read(MODE_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_json_storage_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let mut storage = JsonFileStorage::new(&path);
        assert!(storage.read(MODE_KEY).is_err());

        // Writing recovers the file
        storage.write(MODE_KEY, "light").unwrap();
        assert_eq!(storage.read(MODE_KEY).unwrap(), Some("light".to_string()));
    }

    #[test]
    fn test_json_storage_reads_keys_from_mixed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"saloon-color-theme":"mint","extra":5,"saloon-theme-mode":false}"#,
        )
        .unwrap();

        let mut storage = JsonFileStorage::new(&path);
        assert_eq!(storage.read(COLOR_THEME_KEY).unwrap(), Some("mint".to_string()));
        assert!(storage.read(MODE_KEY).is_err());

        // Writing one key keeps the valid theme and the unrelated entry
        storage.write(MODE_KEY, "dark").unwrap();
        assert_eq!(storage.read(COLOR_THEME_KEY).unwrap(), Some("mint".to_string()));
        assert_eq!(storage.read(MODE_KEY).unwrap(), Some("dark".to_string()));

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["extra"], 5);
    }

    #[test]
    fn test_json_storage_rejects_non_object_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "[1, 2]").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(storage.read(MODE_KEY).unwrap_err().contains("not a JSON object"));
    }

    #[test]
    fn test_json_storage_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = JsonFileStorage::new(temp_dir.path().join("missing").join("settings.json"));

        let result = storage.write(MODE_KEY, "dark");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to write"));
    }
}
