//! PageView component - a management page
//!
//! One view serves every management route:
//! - Filter bar (search, date preset, select filters)
//! - Action buttons enabled by the current selection
//! - A data table or the appointment board
//! - A side drawer with details for the clicked row or booking

mod board;
mod drawer;
mod render;
mod table;

use chrono::{Local, NaiveDate};
use gpui::{Context, FocusHandle, Subscription};

use crate::core::board::{BOOKINGS, BoardState, Booking};
use crate::core::drawer::{DrawerContent, DrawerState, DrawerSubject};
use crate::core::filters::{DatePreset, FilterState};
use crate::core::pages::{PageBody, PageSpec};
use crate::core::records::{Record, sample_today};
use crate::core::table::TableState;
use crate::ui::appearance::theme_store;

/// Which dropdown is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpenMenu {
    DatePreset,
    /// Select filter, by index into the page's selects
    Select(usize),
}

/// A management page view
pub struct PageView {
    pub(crate) spec: PageSpec,
    /// Reference day for date presets
    pub(crate) today: NaiveDate,
    pub(crate) filters: FilterState,
    pub(crate) table: TableState,
    pub(crate) board: BoardState,
    pub(crate) drawer: DrawerState,
    pub(crate) open_menu: Option<OpenMenu>,
    /// Receives typing for the search box (None in tests)
    pub(crate) focus_handle: Option<FocusHandle>,
    pub(crate) needs_initial_focus: bool,
    _store_subscription: Option<Subscription>,
}

impl PageView {
    pub fn new(spec: PageSpec, cx: &mut Context<Self>) -> Self {
        let store = theme_store(cx);
        let store_subscription = cx.observe(&store, |_this, _store, cx| cx.notify());

        Self {
            focus_handle: Some(cx.focus_handle()),
            needs_initial_focus: true,
            _store_subscription: Some(store_subscription),
            ..Self::with_spec(spec)
        }
    }

    /// Create a PageView for testing (without GPUI context)
    #[cfg(test)]
    pub fn new_for_test(spec: PageSpec) -> Self {
        Self::with_spec(spec)
    }

    fn with_spec(spec: PageSpec) -> Self {
        Self {
            spec,
            today: sample_today().unwrap_or_else(|| Local::now().date_naive()),
            filters: FilterState::default(),
            table: TableState::default(),
            board: BoardState::default(),
            drawer: DrawerState::default(),
            open_menu: None,
            focus_handle: None,
            needs_initial_focus: false,
            _store_subscription: None,
        }
    }

    /// Table rows passing the filters, in the current sort order
    pub(crate) fn visible_records(&self) -> Vec<Record> {
        match self.spec.body {
            PageBody::Table { records, .. } => {
                let rows = records
                    .iter()
                    .filter(|record| self.filters.matches(*record, &self.spec.filters, self.today))
                    .copied()
                    .collect();
                self.table.arrange(rows)
            }
            PageBody::Board => Vec::new(),
        }
    }

    pub(crate) fn total_records(&self) -> usize {
        match self.spec.body {
            PageBody::Table { records, .. } => records.len(),
            PageBody::Board => BOOKINGS.len(),
        }
    }

    /// Bookings passing the filters
    pub(crate) fn visible_bookings(&self) -> Vec<Booking> {
        match self.spec.body {
            PageBody::Board => BOOKINGS
                .iter()
                .filter(|booking| self.filters.matches(*booking, &self.spec.filters, self.today))
                .copied()
                .collect(),
            PageBody::Table { .. } => Vec::new(),
        }
    }

    /// Ids picked in the table or on the board
    pub(crate) fn selected_ids(&self) -> Vec<&'static str> {
        match self.spec.body {
            PageBody::Table { .. } => self.table.selected_ids(),
            PageBody::Board => self.board.selected_ids(),
        }
    }

    pub(crate) fn drawer_content(&self) -> Option<DrawerContent> {
        self.drawer
            .subject()
            .and_then(|subject| self.spec.drawer_content(subject))
    }

    pub(crate) fn toggle_menu(&mut self, menu: OpenMenu) {
        self.open_menu = if self.open_menu == Some(menu) {
            None
        } else {
            Some(menu)
        };
    }

    pub(crate) fn choose_date_preset(&mut self, preset: Option<DatePreset>) {
        self.filters.set_date_preset(preset);
        self.open_menu = None;
    }

    pub(crate) fn choose_option(&mut self, column: &'static str, option: Option<&'static str>) {
        self.filters.select(column, option);
        self.open_menu = None;
    }

    pub(crate) fn reset_filters(&mut self) {
        self.filters.reset();
        self.open_menu = None;
    }

    /// Run a toolbar action; false when it is unknown or not enabled
    pub(crate) fn run_action(&mut self, key: &str) -> bool {
        let Some(action) = self.spec.actions.iter().find(|a| a.key == key) else {
            log::warn!("Unknown action {}", key);
            return false;
        };

        let selected = self.selected_ids();
        if !action.enabled.allows(selected.len()) {
            log::debug!("{} needs a different selection ({} picked)", action.label, selected.len());
            return false;
        }

        if action.is_new() {
            self.drawer.open(DrawerSubject::New);
        } else {
            log::info!("{}: {} on {:?}", self.spec.route.title(), action.label, selected);
        }
        true
    }

    /// Show a table row in the drawer
    pub(crate) fn open_record(&mut self, id: &'static str) {
        self.open_menu = None;
        self.drawer.open(DrawerSubject::Record(id));
    }

    /// Show a booking in the drawer
    pub(crate) fn open_booking(&mut self, id: &'static str) {
        self.open_menu = None;
        self.drawer.open(DrawerSubject::Booking(id));
    }

    pub(crate) fn quick_action(&self, label: &str) {
        if let Some(subject) = self.drawer.subject() {
            log::info!("{}: {} for {:?}", self.spec.route.title(), label, subject);
        }
    }

    /// Apply a key press; returns whether anything changed
    pub(crate) fn key_input(&mut self, key: &str, key_char: Option<&str>) -> bool {
        if key == "escape" {
            if self.open_menu.take().is_some() {
                return true;
            }
            if self.drawer.is_open() {
                self.drawer.close();
                return true;
            }
            return false;
        }

        if key == "backspace" {
            let before = self.filters.search().len();
            self.filters.pop_search();
            return self.filters.search().len() != before;
        }

        match key_char {
            Some(text) => {
                let before = self.filters.search().len();
                self.filters.push_search(text);
                self.filters.search().len() != before
            }
            None => false,
        }
    }
}
