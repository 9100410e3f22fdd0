//! Filter bar model: text search, date presets and select filters

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use super::records::{Record, parse_date};

/// Quick date ranges offered by the date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    ThisWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
}

impl DatePreset {
    pub fn label(self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::ThisWeek => "This Week",
            DatePreset::ThisMonth => "This Month",
            DatePreset::LastMonth => "Last Month",
            DatePreset::ThisYear => "This Year",
        }
    }

    /// Inclusive date range relative to `today`; weeks start on Sunday
    pub fn range(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            DatePreset::Today => Some((today, today)),
            DatePreset::ThisWeek => week_of(today),
            DatePreset::ThisMonth => month_of(today),
            DatePreset::LastMonth => {
                let (first, _) = month_of(today)?;
                month_of(first.pred_opt()?)
            }
            DatePreset::ThisYear => Some((
                NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
            )),
        }
    }
}

fn week_of(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = day - Duration::days(i64::from(day.weekday().num_days_from_sunday()));
    Some((start, start + Duration::days(6)))
}

fn month_of(day: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = day.with_day(1)?;
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    Some((first, next_month.pred_opt()?))
}

/// A dropdown filter over one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectFilter {
    pub column: &'static str,
    pub placeholder: &'static str,
    pub options: &'static [&'static str],
}

/// Which filters a page offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub search_placeholder: &'static str,
    /// Column the date presets apply to, if the page has a date filter
    pub date_column: Option<&'static str>,
    pub date_presets: &'static [DatePreset],
    pub selects: &'static [SelectFilter],
}

/// Something the filter bar can narrow down
pub trait Filterable {
    /// Value of a named column
    fn field(&self, column: &str) -> &str;

    /// Values the text search looks through
    fn search_values(&self) -> Vec<&str>;
}

impl Filterable for Record {
    fn field(&self, column: &str) -> &str {
        self.get(column)
    }

    fn search_values(&self) -> Vec<&str> {
        self.fields.iter().map(|(_, value)| *value).collect()
    }
}

/// Current filter values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    date_preset: Option<DatePreset>,
    selections: BTreeMap<&'static str, &'static str>,
}

impl FilterState {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn push_search(&mut self, text: &str) {
        self.search.extend(text.chars().filter(|c| !c.is_control()));
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
    }

    pub fn date_preset(&self) -> Option<DatePreset> {
        self.date_preset
    }

    pub fn set_date_preset(&mut self, preset: Option<DatePreset>) {
        self.date_preset = preset;
    }

    pub fn selection(&self, column: &str) -> Option<&'static str> {
        self.selections.get(column).copied()
    }

    /// Choose an option for a select filter; `None` clears it
    pub fn select(&mut self, column: &'static str, option: Option<&'static str>) {
        match option {
            Some(option) => {
                self.selections.insert(column, option);
            }
            None => {
                self.selections.remove(column);
            }
        }
    }

    /// Whether any filter narrows the results
    pub fn has_changes(&self) -> bool {
        !self.search.trim().is_empty() || self.date_preset.is_some() || !self.selections.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether an item passes every active filter
    pub fn matches(&self, item: &dyn Filterable, config: &FilterConfig, today: NaiveDate) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty()
            && !item
                .search_values()
                .iter()
                .any(|value| value.to_lowercase().contains(&query))
        {
            return false;
        }

        if let (Some(preset), Some(column)) = (self.date_preset, config.date_column) {
            let in_range = match (preset.range(today), parse_date(item.field(column))) {
                (Some((start, end)), Some(date)) => start <= date && date <= end,
                _ => false,
            };
            if !in_range {
                return false;
            }
        }

        self.selections
            .iter()
            .all(|(column, option)| item.field(column).eq_ignore_ascii_case(option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{CUSTOMERS, EMPLOYEES, INVOICES};

    const CONFIG: FilterConfig = FilterConfig {
        search_placeholder: "Search...",
        date_column: Some("date"),
        date_presets: &[DatePreset::Today, DatePreset::ThisWeek, DatePreset::ThisMonth],
        selects: &[SelectFilter {
            column: "status",
            placeholder: "Select Status",
            options: &["Paid", "Pending", "Overdue"],
        }],
    };

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_preset_ranges() {
        // 2024-01-15 is a Monday
        let today = day(2024, 1, 15);
        assert_eq!(DatePreset::Today.range(today), Some((today, today)));
        assert_eq!(
            DatePreset::ThisWeek.range(today),
            Some((day(2024, 1, 14), day(2024, 1, 20)))
        );
        assert_eq!(
            DatePreset::ThisWeek.range(day(2024, 1, 13)),
            Some((day(2024, 1, 7), day(2024, 1, 13)))
        );
        assert_eq!(
            DatePreset::LastMonth.range(today),
            Some((day(2023, 12, 1), day(2023, 12, 31)))
        );
        assert_eq!(
            DatePreset::ThisMonth.range(day(2024, 2, 10)),
            Some((day(2024, 2, 1), day(2024, 2, 29)))
        );
        assert_eq!(
            DatePreset::ThisYear.range(today),
            Some((day(2024, 1, 1), day(2024, 12, 31)))
        );
    }

    #[test]
    fn test_search_is_case_insensitive_over_every_field() {
        let mut filters = FilterState::default();
        filters.push_search("MIKE");
        let today = day(2024, 1, 15);

        let hits: Vec<_> = INVOICES
            .iter()
            .filter(|r| filters.matches(*r, &CONFIG, today))
            .map(|r| r.id)
            .collect();
        assert_eq!(hits, vec!["2"]);

        filters.pop_search();
        filters.pop_search();
        filters.pop_search();
        filters.pop_search();
        assert_eq!(filters.search(), "");
        assert!(!filters.has_changes());
    }

    #[test]
    fn test_select_and_date_filters_combine() {
        let today = day(2024, 1, 15);
        let mut filters = FilterState::default();

        filters.set_date_preset(Some(DatePreset::ThisWeek));
        let this_week = INVOICES
            .iter()
            .filter(|r| filters.matches(*r, &CONFIG, today))
            .count();
        assert_eq!(this_week, 2);

        filters.select("status", Some("pending"));
        let pending: Vec<_> = INVOICES
            .iter()
            .filter(|r| filters.matches(*r, &CONFIG, today))
            .map(|r| r.id)
            .collect();
        assert_eq!(pending, vec!["2"]);

        filters.select("status", None);
        assert_eq!(filters.selection("status"), None);
        assert!(filters.has_changes());
    }

    #[test]
    fn test_select_matches_whole_value() {
        let config = FilterConfig {
            date_column: None,
            ..CONFIG
        };
        let mut filters = FilterState::default();
        filters.select("position", Some("Stylist"));

        let today = day(2024, 1, 15);
        assert!(!EMPLOYEES.iter().any(|r| filters.matches(r, &config, today)));

        // No date column means the preset cannot exclude anything
        filters.select("position", Some("Barber"));
        filters.set_date_preset(Some(DatePreset::Today));
        assert_eq!(
            EMPLOYEES
                .iter()
                .filter(|r| filters.matches(*r, &config, today))
                .count(),
            1
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut filters = FilterState::default();
        filters.push_search("sarah\n");
        assert_eq!(filters.search(), "sarah");
        filters.set_date_preset(Some(DatePreset::Today));
        filters.select("status", Some("Active"));
        assert!(filters.has_changes());

        filters.reset();
        assert_eq!(filters, FilterState::default());
        assert!(CUSTOMERS.iter().all(|r| filters.matches(r, &CONFIG, day(2024, 1, 15))));
    }
}
