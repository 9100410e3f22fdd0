//! OS color-scheme preference source

use std::cell::Cell;
use std::rc::Rc;

use super::palette::EffectiveMode;

/// Platform light/dark preference query and change subscription
pub trait ColorSchemeSource {
    /// Current OS preference, or `None` when the platform can't report one
    fn query(&self) -> Option<EffectiveMode>;

    /// Start delivering change notifications; false when unsupported
    fn watch(&mut self) -> bool;

    /// Stop delivering change notifications
    fn unwatch(&mut self);
}

#[derive(Debug)]
struct SchemeState {
    current: Cell<Option<EffectiveMode>>,
    watching: Cell<bool>,
    supports_events: bool,
}

/// Shared, single-threaded scheme source
///
/// The UI layer keeps one clone to feed observed window appearances in and to
/// learn whether it should keep its appearance subscription alive; the store
/// owns another clone.
#[derive(Debug, Clone)]
pub struct SharedScheme {
    state: Rc<SchemeState>,
}

impl SharedScheme {
    /// A source reporting `initial` and supporting change notifications
    pub fn new(initial: Option<EffectiveMode>) -> Self {
        Self {
            state: Rc::new(SchemeState {
                current: Cell::new(initial),
                watching: Cell::new(false),
                supports_events: true,
            }),
        }
    }

    /// A platform with no preference query and no change notifications
    pub fn unavailable() -> Self {
        Self {
            state: Rc::new(SchemeState {
                current: Cell::new(None),
                watching: Cell::new(false),
                supports_events: false,
            }),
        }
    }

    /// Record a newly observed OS preference
    pub fn set(&self, scheme: EffectiveMode) {
        self.state.current.set(Some(scheme));
    }

    /// Whether a change subscription is currently wanted
    pub fn is_watching(&self) -> bool {
        self.state.watching.get()
    }
}

impl ColorSchemeSource for SharedScheme {
    fn query(&self) -> Option<EffectiveMode> {
        self.state.current.get()
    }

    fn watch(&mut self) -> bool {
        if !self.state.supports_events {
            return false;
        }
        self.state.watching.set(true);
        true
    }

    fn unwatch(&mut self) {
        self.state.watching.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let scheme = SharedScheme::new(Some(EffectiveMode::Light));
        let mut handle = scheme.clone();

        scheme.set(EffectiveMode::Dark);
        assert_eq!(handle.query(), Some(EffectiveMode::Dark));

        assert!(handle.watch());
        assert!(scheme.is_watching());
        handle.unwatch();
        assert!(!scheme.is_watching());
    }

    #[test]
    fn test_unavailable_source_never_watches() {
        let mut scheme = SharedScheme::unavailable();
        assert_eq!(scheme.query(), None);
        assert!(!scheme.watch());
        assert!(!scheme.is_watching());
    }
}
