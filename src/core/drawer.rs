//! Side drawer model: what it shows and which sections are collapsed

use std::collections::BTreeSet;

/// What the drawer is open for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerSubject {
    /// A blank record being created
    New,
    /// A table row, by record id
    Record(&'static str),
    /// An appointment board booking, by booking id
    Booking(&'static str),
}

/// Open/closed drawer plus collapsed sections
///
/// Every section starts expanded whenever the drawer opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerState {
    subject: Option<DrawerSubject>,
    collapsed: BTreeSet<usize>,
}

impl DrawerState {
    pub fn subject(&self) -> Option<DrawerSubject> {
        self.subject
    }

    pub fn is_open(&self) -> bool {
        self.subject.is_some()
    }

    pub fn open(&mut self, subject: DrawerSubject) {
        self.subject = Some(subject);
        self.collapsed.clear();
    }

    pub fn close(&mut self) {
        self.subject = None;
        self.collapsed.clear();
    }

    pub fn toggle_section(&mut self, index: usize) {
        if !self.collapsed.remove(&index) {
            self.collapsed.insert(index);
        }
    }

    pub fn is_section_open(&self, index: usize) -> bool {
        !self.collapsed.contains(&index)
    }
}

/// Summary block at the top of the drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerVisual {
    pub heading: String,
    pub subheading: Option<String>,
    /// Status value shown as a tag
    pub status: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerItem {
    /// Label over a value
    Field { label: &'static str, value: String },
    /// Label over a row of tags
    Tags {
        label: &'static str,
        values: &'static [&'static str],
    },
    /// A past visit or payment line
    Entry {
        title: &'static str,
        detail: &'static str,
        amount: &'static str,
    },
}

impl DrawerItem {
    pub fn field(label: &'static str, value: impl Into<String>) -> Self {
        DrawerItem::Field {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerSection {
    pub title: &'static str,
    pub items: Vec<DrawerItem>,
}

/// Everything the drawer renders for one subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerContent {
    pub title: String,
    /// Width in pixels
    pub width: u32,
    pub visual: Option<DrawerVisual>,
    pub quick_actions: &'static [&'static str],
    pub sections: Vec<DrawerSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.is_open());

        drawer.open(DrawerSubject::Record("2"));
        assert!(drawer.is_open());
        assert_eq!(drawer.subject(), Some(DrawerSubject::Record("2")));

        drawer.close();
        assert_eq!(drawer, DrawerState::default());
    }

    #[test]
    fn test_sections_reopen_expanded() {
        let mut drawer = DrawerState::default();
        drawer.open(DrawerSubject::Booking("1"));
        assert!(drawer.is_section_open(0));

        drawer.toggle_section(1);
        assert!(!drawer.is_section_open(1));
        assert!(drawer.is_section_open(0));

        drawer.toggle_section(1);
        assert!(drawer.is_section_open(1));

        drawer.toggle_section(2);
        drawer.open(DrawerSubject::New);
        assert!(drawer.is_section_open(2));
    }
}
