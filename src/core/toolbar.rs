//! Page action buttons and their ordering

/// When an action button is clickable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enablement {
    Always,
    /// At least one row or booking is selected
    AnySelected,
    /// Exactly one row is selected
    ExactlyOne,
}

impl Enablement {
    pub fn allows(self, selected: usize) -> bool {
        match self {
            Enablement::Always => true,
            Enablement::AnySelected => selected > 0,
            Enablement::ExactlyOne => selected == 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub primary: bool,
    /// Show only the glyph, with the label as a tooltip
    pub icon_only: bool,
    pub enabled: Enablement,
}

impl ActionSpec {
    pub const fn new(key: &'static str, label: &'static str, glyph: &'static str) -> Self {
        Self {
            key,
            label,
            glyph,
            primary: false,
            icon_only: false,
            enabled: Enablement::Always,
        }
    }

    pub const fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub const fn icon_only(mut self) -> Self {
        self.icon_only = true;
        self
    }

    pub const fn enabled(mut self, enabled: Enablement) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether this action creates a new record
    pub fn is_new(&self) -> bool {
        self.key.to_lowercase().contains("new")
    }

    fn is_archive(&self) -> bool {
        self.key.to_lowercase().contains("archive")
    }

    fn rank(&self) -> u8 {
        if self.is_archive() {
            0
        } else if self.is_new() {
            3
        } else if self.primary {
            2
        } else {
            1
        }
    }
}

/// Display order: archive first, new last, primary after default.
/// Ties keep their declared order.
pub fn arrange_actions(actions: &[ActionSpec]) -> Vec<ActionSpec> {
    let mut arranged = actions.to_vec();
    arranged.sort_by_key(ActionSpec::rank);
    arranged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(actions: &[ActionSpec]) -> Vec<&'static str> {
        actions.iter().map(|a| a.key).collect()
    }

    #[test]
    fn test_archive_first_new_last() {
        let actions = [
            ActionSpec::new("new", "New", "+").primary(),
            ActionSpec::new("archive", "Archive", "▣").icon_only(),
            ActionSpec::new("export", "Export", "⇩").icon_only(),
            ActionSpec::new("contact", "Contact Selected", "✉").primary(),
        ];
        assert_eq!(
            keys(&arrange_actions(&actions)),
            vec!["archive", "export", "contact", "new"]
        );
    }

    #[test]
    fn test_ties_keep_declared_order() {
        let actions = [
            ActionSpec::new("edit", "Edit Selected", "✎"),
            ActionSpec::new("pricing", "Update Pricing", "$"),
            ActionSpec::new("export", "Export", "⇩"),
        ];
        assert_eq!(
            keys(&arrange_actions(&actions)),
            vec!["edit", "pricing", "export"]
        );
    }

    #[test]
    fn test_enablement() {
        assert!(Enablement::Always.allows(0));
        assert!(!Enablement::AnySelected.allows(0));
        assert!(Enablement::AnySelected.allows(3));
        assert!(Enablement::ExactlyOne.allows(1));
        assert!(!Enablement::ExactlyOne.allows(2));
    }
}
