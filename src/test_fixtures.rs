//! Test fixtures for theme store tests
//!
//! Storage and platform doubles plus a harness that builds stores over
//! shared collaborators, so a test can "reload" the app by building a second
//! store over the same storage and inspect what the first one published.

#![cfg(test)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::theme::{EffectiveMode, SettingsStorage, SharedScheme, StyleVariables, ThemeStore};

/// Storage that fails every read and write
pub struct FailingStorage;

impl SettingsStorage for FailingStorage {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        Err(format!("Storage unavailable while reading {}", key))
    }

    fn write(&mut self, key: &str, _value: &str) -> Result<(), String> {
        Err(format!("Storage unavailable while writing {}", key))
    }
}

/// In-memory storage whose clones share contents
#[derive(Clone, Default)]
pub struct SharedStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl SettingsStorage for SharedStorage {
    fn read(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared collaborators for building theme stores
pub struct Harness {
    pub storage: SharedStorage,
    pub scheme: SharedScheme,
    pub variables: StyleVariables,
}

impl Harness {
    /// Empty storage and an OS currently reporting `os_scheme`
    pub fn new(os_scheme: Option<EffectiveMode>) -> Self {
        Self {
            storage: SharedStorage::default(),
            scheme: SharedScheme::new(os_scheme),
            variables: StyleVariables::new(),
        }
    }

    /// Build a store over this harness, as the app does at startup
    pub fn store(&self) -> ThemeStore {
        ThemeStore::new(
            Box::new(self.storage.clone()),
            Box::new(self.scheme.clone()),
            Box::new(self.variables.clone()),
        )
    }
}
