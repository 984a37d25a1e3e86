//! DatePicker widget for choosing a single date.
//!
//! The DatePicker wraps a [`CalendarGrid`] with navigation, a minimum
//! selectable date and two-way binding of the chosen date.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use taskdeck::widget::{BindableControl, DatePicker};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
//! let mut due = DatePicker::new()
//!     .with_today(today)
//!     .with_min_date(today)
//!     .with_label("Data prevista");
//!
//! due.value_changed().connect(|date| println!("due on {date}"));
//!
//! due.toggle();
//! assert!(!due.select_date(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()));
//! assert!(due.select_date(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()));
//! assert_eq!(due.display_value(), "20/06/2025");
//! ```

use chrono::{Datelike, Local, NaiveDate};
use taskdeck_core::Signal;
use taskdeck_core::logging::targets;

use super::calendar::{self, CalendarGrid, WEEKDAY_LABELS};
use crate::widget::{BindableControl, ControlBase, Key, KeyPressEvent};

/// Placeholder shown while no date is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Selecione a data";

/// Display format for the selected date (dd/mm/yyyy).
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// One cell of the displayed month, with its derived flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// The day belongs to the displayed month rather than the padding.
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// The day is earlier than the minimum date and cannot be picked.
    pub is_disabled: bool,
}

/// A calendar popup bound to a date value.
///
/// # Signals
///
/// - `value_changed(NaiveDate)`: Emitted when the user picks a different date
/// - `touched()`: Emitted when the calendar opens, and on the first pick
/// - `open_changed(bool)`: Emitted when the calendar opens or closes
/// - `page_changed((i32, u32))`: Emitted when the displayed month changes
pub struct DatePicker {
    control: ControlBase<NaiveDate>,
    is_open: bool,
    selected_date: Option<NaiveDate>,
    current_year: i32,
    current_month: u32,
    grid: Option<CalendarGrid>,
    min_date: Option<NaiveDate>,
    today: NaiveDate,
    placeholder: String,
    label: Option<String>,
    required: bool,

    /// Signal emitted when the calendar opens or closes.
    pub open_changed: Signal<bool>,
    /// Signal emitted when the displayed (year, month) changes.
    pub page_changed: Signal<(i32, u32)>,
}

impl DatePicker {
    /// Create a closed date picker showing the current month.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            control: ControlBase::new(),
            is_open: false,
            selected_date: None,
            current_year: today.year(),
            current_month: today.month(),
            grid: CalendarGrid::containing(today),
            min_date: None,
            today,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            label: None,
            required: false,
            open_changed: Signal::new(),
            page_changed: Signal::new(),
        }
    }

    /// Override "today" using builder pattern.
    ///
    /// Also re-anchors the displayed month when no date is selected.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        if self.selected_date.is_none() {
            self.show_month(today.year(), today.month());
        }
        self
    }

    /// Set the minimum selectable date using builder pattern.
    pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    /// Set the placeholder text using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the field label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the field as required using builder pattern.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    // =========================================================================
    // Date Constraints
    // =========================================================================

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn set_min_date(&mut self, min_date: Option<NaiveDate>) {
        self.min_date = min_date;
    }

    /// Whether `date` is earlier than the minimum date.
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        self.min_date.is_some_and(|min| date < min)
    }

    pub fn is_selected_date(&self, date: NaiveDate) -> bool {
        self.selected_date == Some(date)
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        self.today == date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // =========================================================================
    // Open / Close
    // =========================================================================

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Open or close the calendar.
    ///
    /// Does nothing when disabled. Opening counts as a user interaction and
    /// regenerates the grid.
    pub fn toggle(&mut self) {
        if self.control.is_disabled() {
            return;
        }
        self.is_open = !self.is_open;
        if self.is_open {
            self.control.mark_touched();
            self.regenerate();
        }
        self.open_changed.emit(self.is_open);
    }

    /// Close the calendar if it is open.
    pub fn close(&mut self) {
        if self.is_open {
            self.is_open = false;
            self.open_changed.emit(false);
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// The displayed (year, month), month being 1 to 12.
    pub fn displayed_year_month(&self) -> (i32, u32) {
        (self.current_year, self.current_month)
    }

    /// Show the previous month, rolling January back to December.
    pub fn previous_month(&mut self) {
        let (year, month) = calendar::preceding_month(self.current_year, self.current_month);
        self.show_month(year, month);
    }

    /// Show the next month, rolling December over to January.
    pub fn next_month(&mut self) {
        let (year, month) = calendar::following_month(self.current_year, self.current_month);
        self.show_month(year, month);
    }

    /// Show the month containing today.
    pub fn show_today(&mut self) {
        self.show_month(self.today.year(), self.today.month());
    }

    fn show_month(&mut self, year: i32, month: u32) {
        let Some(grid) = CalendarGrid::new(year, month) else {
            tracing::trace!(target: targets::WIDGET, year, month, "month outside calendar range");
            return;
        };
        self.current_year = year;
        self.current_month = month;
        self.grid = Some(grid);
        self.page_changed.emit((year, month));
    }

    fn regenerate(&mut self) {
        self.grid = CalendarGrid::new(self.current_year, self.current_month);
    }

    pub fn grid(&self) -> Option<&CalendarGrid> {
        self.grid.as_ref()
    }

    /// The 42 displayed days with their flags.
    pub fn calendar_days(&self) -> Vec<CalendarDay> {
        let Some(grid) = &self.grid else {
            return Vec::new();
        };
        grid.days()
            .iter()
            .map(|&date| CalendarDay {
                date,
                is_current_month: grid.is_in_month(date),
                is_today: self.is_today(date),
                is_selected: self.is_selected_date(date),
                is_disabled: self.is_date_disabled(date),
            })
            .collect()
    }

    /// The pt-BR name of the displayed month.
    pub fn month_name(&self) -> &'static str {
        calendar::month_name(self.current_month)
    }

    /// Column headers, Sunday first.
    pub fn weekday_labels(&self) -> &'static [&'static str; 7] {
        &WEEKDAY_LABELS
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Pick `date` as if the user clicked its cell.
    ///
    /// Returns `false` and changes nothing when the picker is disabled or
    /// `date` is earlier than the minimum date.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if self.control.is_disabled() {
            tracing::trace!(target: targets::WIDGET, %date, "date picker disabled, ignoring select");
            return false;
        }
        if self.is_date_disabled(date) {
            tracing::trace!(target: targets::WIDGET, %date, "date before minimum, ignoring select");
            return false;
        }

        self.control.mark_touched_once();
        let changed = self.selected_date != Some(date);
        self.selected_date = Some(date);
        self.close();

        if changed {
            tracing::debug!(target: targets::WIDGET, %date, "date picker value changed");
            self.control.value_changed.emit(date);
        }
        true
    }

    /// The selected date as dd/mm/yyyy, or an empty string.
    pub fn display_value(&self) -> String {
        self.selected_date
            .map(|date| date.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_touched(&self) -> bool {
        self.control.is_touched()
    }

    /// Handle a key press while the picker has focus.
    ///
    /// Escape closes, Enter and Space toggle, PageUp and PageDown change the
    /// displayed month. Returns whether the key was consumed.
    pub fn handle_key(&mut self, event: &KeyPressEvent) -> bool {
        if self.control.is_disabled() {
            return false;
        }
        match event.key {
            Key::Escape if self.is_open => {
                self.close();
                true
            }
            Key::Enter | Key::Space => {
                self.toggle();
                true
            }
            Key::PageUp if self.is_open => {
                self.previous_month();
                true
            }
            Key::PageDown if self.is_open => {
                self.next_month();
                true
            }
            _ => false,
        }
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl BindableControl for DatePicker {
    type Value = NaiveDate;

    fn write_value(&mut self, value: Option<NaiveDate>) {
        self.selected_date = value;
        if let Some(date) = value {
            self.show_month(date.year(), date.month());
        }
    }

    fn value(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    fn value_changed(&self) -> &Signal<NaiveDate> {
        &self.control.value_changed
    }

    fn touched(&self) -> &Signal<()> {
        &self.control.touched
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.control.set_disabled(disabled);
        if disabled {
            self.close();
        }
    }

    fn is_disabled(&self) -> bool {
        self.control.is_disabled()
    }
}

static_assertions::assert_impl_all!(DatePicker: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker() -> DatePicker {
        DatePicker::new().with_today(date(2025, 6, 10))
    }

    fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        signal.connect(move |v: &T| log_clone.lock().push(v.clone()));
        log
    }

    #[test]
    fn test_initial_state() {
        let dp = picker();
        assert_eq!(dp.displayed_year_month(), (2025, 6));
        assert_eq!(dp.calendar_days().len(), 42);
        assert_eq!(dp.month_name(), "Junho");
        assert_eq!(dp.weekday_labels()[0], "Dom");
        assert_eq!(dp.display_value(), "");
        assert_eq!(dp.placeholder(), DEFAULT_PLACEHOLDER);
        assert!(!dp.is_open());
    }

    #[test]
    fn test_min_date_rejects_earlier_dates() {
        let mut dp = picker().with_min_date(date(2025, 6, 10));
        let changes = record(dp.value_changed());

        assert!(!dp.select_date(date(2025, 6, 5)));
        assert_eq!(dp.selected_date(), None);
        assert!(changes.lock().is_empty());

        // The minimum itself is selectable.
        assert!(dp.select_date(date(2025, 6, 10)));
        assert_eq!(*changes.lock(), vec![date(2025, 6, 10)]);
    }

    #[test]
    fn test_select_closes_and_emits_once() {
        let mut dp = picker();
        let changes = record(dp.value_changed());
        let touched = record(dp.touched());

        dp.toggle();
        assert!(dp.is_open());
        assert!(dp.select_date(date(2025, 6, 20)));
        assert!(!dp.is_open());
        assert_eq!(dp.display_value(), "20/06/2025");

        // Same date again: accepted but silent.
        assert!(dp.select_date(date(2025, 6, 20)));
        assert_eq!(changes.lock().len(), 1);
        assert_eq!(touched.lock().len(), 1);
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let mut dp = picker();
        let pages = record(&dp.page_changed);

        for _ in 0..6 {
            dp.next_month();
        }
        assert_eq!(dp.displayed_year_month(), (2025, 12));
        dp.next_month();
        assert_eq!(dp.displayed_year_month(), (2026, 1));
        assert_eq!(dp.grid().map(|g| g.month()), Some(1));

        dp.previous_month();
        assert_eq!(dp.displayed_year_month(), (2025, 12));
        assert_eq!(dp.month_name(), "Dezembro");

        assert_eq!(pages.lock().len(), 8);
    }

    #[test]
    fn test_navigation_does_not_emit_value() {
        let mut dp = picker();
        dp.write_value(Some(date(2025, 6, 15)));
        let changes = record(dp.value_changed());

        dp.previous_month();
        dp.next_month();
        dp.next_month();
        assert!(changes.lock().is_empty());
        assert_eq!(dp.selected_date(), Some(date(2025, 6, 15)));
    }

    #[test]
    fn test_write_value_reanchors_without_emitting() {
        let mut dp = picker();
        let changes = record(dp.value_changed());

        dp.write_value(Some(date(2024, 2, 29)));
        assert_eq!(dp.displayed_year_month(), (2024, 2));
        assert!(dp.calendar_days().iter().any(|d| d.is_selected && d.date == date(2024, 2, 29)));

        dp.write_value(None);
        assert_eq!(dp.selected_date(), None);
        // Clearing keeps the displayed month.
        assert_eq!(dp.displayed_year_month(), (2024, 2));
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_calendar_day_flags() {
        let dp = picker().with_min_date(date(2025, 6, 3));
        let days = dp.calendar_days();

        let today: Vec<_> = days.iter().filter(|d| d.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2025, 6, 10));

        let disabled = days.iter().filter(|d| d.is_disabled).count();
        // 2025-06-01 is a Sunday, so only June 1 and 2 precede the minimum.
        assert_eq!(disabled, 2);

        let padding = days.iter().filter(|d| !d.is_current_month).count();
        assert_eq!(padding, 42 - 30);
    }

    #[test]
    fn test_disabled_ignores_interaction() {
        let mut dp = picker();
        let touched = record(dp.touched());
        dp.set_disabled(true);

        dp.toggle();
        assert!(!dp.is_open());
        assert!(!dp.select_date(date(2025, 6, 12)));
        assert!(!dp.handle_key(&KeyPressEvent::pressed(Key::Enter)));
        assert!(touched.lock().is_empty());
    }

    #[test]
    fn test_key_handling() {
        let mut dp = picker();

        // Month keys only act while open.
        assert!(!dp.handle_key(&KeyPressEvent::pressed(Key::PageDown)));
        assert!(dp.handle_key(&KeyPressEvent::pressed(Key::Enter)));
        assert!(dp.is_open());

        assert!(dp.handle_key(&KeyPressEvent::pressed(Key::PageDown)));
        assert_eq!(dp.displayed_year_month(), (2025, 7));
        assert!(dp.handle_key(&KeyPressEvent::pressed(Key::PageUp)));
        assert!(dp.handle_key(&KeyPressEvent::pressed(Key::PageUp)));
        assert_eq!(dp.displayed_year_month(), (2025, 5));

        assert!(dp.handle_key(&KeyPressEvent::pressed(Key::Escape)));
        assert!(!dp.is_open());

        dp.show_today();
        assert_eq!(dp.displayed_year_month(), (2025, 6));
    }
}
