//! Data table model: row selection and column sorting

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::records::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    selected: BTreeSet<&'static str>,
    sort: Option<(&'static str, SortDirection)>,
}

impl TableState {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_ids(&self) -> Vec<&'static str> {
        self.selected.iter().copied().collect()
    }

    pub fn toggle_row(&mut self, id: &'static str) {
        if !self.selected.remove(id) {
            self.selected.insert(id);
        }
    }

    /// Whether every listed row is selected (false for an empty list)
    pub fn all_selected(&self, ids: &[&'static str]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    /// Select every listed row, or deselect them if all already are
    pub fn toggle_all(&mut self, ids: &[&'static str]) {
        if self.all_selected(ids) {
            for id in ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(ids.iter().copied());
        }
    }

    pub fn sort(&self) -> Option<(&'static str, SortDirection)> {
        self.sort
    }

    /// Cycle a column through ascending, descending and unsorted
    pub fn toggle_sort(&mut self, column: &'static str) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Apply the current sort to already-filtered rows
    pub fn arrange(&self, mut rows: Vec<Record>) -> Vec<Record> {
        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare_values(a.get(column), b.get(column));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }
}

/// Money values compare numerically, everything else case-insensitively
fn compare_values(a: &str, b: &str) -> Ordering {
    match (parse_amount(a), parse_amount(b)) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn parse_amount(value: &str) -> Option<f64> {
    value.strip_prefix('$')?.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{CUSTOMERS, SERVICES};

    fn ids(rows: &[Record]) -> Vec<&'static str> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_row_selection() {
        let mut table = TableState::default();
        table.toggle_row("2");
        table.toggle_row("3");
        table.toggle_row("2");

        assert!(!table.is_selected("2"));
        assert!(table.is_selected("3"));
        assert_eq!(table.selected_ids(), vec!["3"]);
    }

    #[test]
    fn test_toggle_all() {
        let mut table = TableState::default();
        let visible = ["1", "2"];
        assert!(!table.all_selected(&[]));

        table.toggle_row("1");
        table.toggle_all(&visible);
        assert!(table.all_selected(&visible));
        assert_eq!(table.selected_count(), 2);

        table.toggle_all(&visible);
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_sort_cycle() {
        let mut table = TableState::default();
        table.toggle_sort("name");
        assert_eq!(table.sort(), Some(("name", SortDirection::Ascending)));
        table.toggle_sort("name");
        assert_eq!(table.sort(), Some(("name", SortDirection::Descending)));
        table.toggle_sort("name");
        assert_eq!(table.sort(), None);

        table.toggle_sort("name");
        table.toggle_sort("price");
        assert_eq!(table.sort(), Some(("price", SortDirection::Ascending)));
    }

    #[test]
    fn test_arrange_sorts_money_numerically() {
        let mut table = TableState::default();
        assert_eq!(ids(&table.arrange(SERVICES.to_vec())), vec!["1", "2", "3", "4"]);

        // "$120.00" sorts after "$65.00" despite the leading digit
        table.toggle_sort("price");
        assert_eq!(ids(&table.arrange(SERVICES.to_vec())), vec!["3", "4", "1", "2"]);

        table.toggle_sort("price");
        assert_eq!(ids(&table.arrange(SERVICES.to_vec())), vec!["2", "1", "4", "3"]);
    }

    #[test]
    fn test_arrange_sorts_text() {
        let mut table = TableState::default();
        table.toggle_sort("name");
        assert_eq!(ids(&table.arrange(CUSTOMERS.to_vec())), vec!["3", "2", "1"]);
    }
}
