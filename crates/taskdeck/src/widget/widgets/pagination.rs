//! Pagination widget for paged result lists.
//!
//! The Pagination widget derives its page window from the total record
//! count, the page size and the offset of the first displayed record, and
//! reports page-change requests to the host. It embeds a [`Dropdown`] for
//! picking the page size.
//!
//! # Example
//!
//! ```
//! use taskdeck::widget::Pagination;
//!
//! let mut pager = Pagination::new().with_total_records(95).with_rows(10);
//!
//! pager.page_changed.connect(|event| {
//!     println!("load page {} ({} rows from {})", event.page, event.rows, event.first);
//! });
//!
//! pager.go_to_page(4);
//! assert_eq!(pager.current_page(), 4);
//! assert_eq!(pager.page_links(), vec![2, 3, 4, 5, 6]);
//! assert_eq!(pager.current_page_report(), "Mostrando 41 a 50 de 95 registros");
//! ```

use taskdeck_core::Signal;
use taskdeck_core::logging::targets;

use super::dropdown::{Dropdown, DropdownOption};
use crate::widget::BindableControl;

/// Page size used when none is given.
pub const DEFAULT_ROWS: usize = 10;

/// Page sizes offered in the rows dropdown by default.
pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Width of the page-link window by default.
pub const DEFAULT_MAX_PAGE_LINKS: usize = 5;

/// Report template by default. `{first}`, `{last}` and `{totalRecords}` are
/// substituted.
pub const DEFAULT_REPORT_TEMPLATE: &str = "Mostrando {first} a {last} de {totalRecords} registros";

/// A page-change request emitted by [`Pagination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangeEvent {
    /// Offset of the first record of the requested page.
    pub first: usize,
    /// Page size.
    pub rows: usize,
    /// Requested page, zero-based.
    pub page: usize,
    /// Total number of pages at the time of the request.
    pub page_count: usize,
}

/// Page navigation over `total_records` records shown `rows` at a time.
///
/// Every derived value is recomputed from `(total_records, rows, first)` on
/// access.
///
/// # Signals
///
/// - `page_changed(PageChangeEvent)`: Emitted for every navigation request
pub struct Pagination {
    total_records: usize,
    rows: usize,
    first: usize,
    max_page_links: usize,
    report_template: String,
    rows_dropdown: Dropdown<usize>,

    /// Signal emitted when the user requests another page or page size.
    pub page_changed: Signal<PageChangeEvent>,
}

impl Pagination {
    /// Create a pagination widget with no records and the default page size.
    pub fn new() -> Self {
        let mut rows_dropdown = Dropdown::new(rows_options(&DEFAULT_ROWS_PER_PAGE_OPTIONS));
        rows_dropdown.write_value(Some(DEFAULT_ROWS));

        Self {
            total_records: 0,
            rows: DEFAULT_ROWS,
            first: 0,
            max_page_links: DEFAULT_MAX_PAGE_LINKS,
            report_template: DEFAULT_REPORT_TEMPLATE.to_string(),
            rows_dropdown,
            page_changed: Signal::new(),
        }
    }

    /// Set the total record count using builder pattern.
    pub fn with_total_records(mut self, total_records: usize) -> Self {
        self.set_total_records(total_records);
        self
    }

    /// Set the page size using builder pattern.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.set_rows(rows);
        self
    }

    /// Set the offset of the first displayed record using builder pattern.
    pub fn with_first(mut self, first: usize) -> Self {
        self.set_first(first);
        self
    }

    /// Set the page sizes offered in the rows dropdown using builder pattern.
    pub fn with_rows_per_page_options(mut self, options: &[usize]) -> Self {
        self.rows_dropdown.set_options(rows_options(options));
        self
    }

    /// Set the width of the page-link window using builder pattern.
    pub fn with_max_page_links(mut self, max_page_links: usize) -> Self {
        self.max_page_links = max_page_links;
        self
    }

    /// Set the current-page report template using builder pattern.
    pub fn with_report_template(mut self, template: impl Into<String>) -> Self {
        self.report_template = template.into();
        self
    }

    // =========================================================================
    // Host Inputs
    // =========================================================================

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn set_total_records(&mut self, total_records: usize) {
        self.total_records = total_records;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Set the page size from the host side. Zero is ignored.
    pub fn set_rows(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        self.rows = rows;
        self.rows_dropdown.write_value(Some(rows));
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn set_first(&mut self, first: usize) {
        self.first = first;
    }

    pub fn max_page_links(&self) -> usize {
        self.max_page_links
    }

    /// The page-size dropdown.
    pub fn rows_dropdown(&self) -> &Dropdown<usize> {
        &self.rows_dropdown
    }

    /// The page sizes offered in the rows dropdown.
    pub fn rows_per_page_options(&self) -> Vec<usize> {
        self.rows_dropdown.options().iter().map(|o| o.value).collect()
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    pub fn current_page(&self) -> usize {
        self.first / self.rows
    }

    pub fn total_pages(&self) -> usize {
        self.total_records.div_ceil(self.rows)
    }

    /// One-based index of the first displayed record, or 0 with no records.
    pub fn first_record_displayed(&self) -> usize {
        if self.total_records == 0 {
            0
        } else {
            self.first + 1
        }
    }

    pub fn last_record_displayed(&self) -> usize {
        (self.first + self.rows).min(self.total_records)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page() == 0
    }

    /// True on the last page, and also when there are no pages at all.
    pub fn is_last_page(&self) -> bool {
        let total_pages = self.total_pages();
        total_pages == 0 || self.current_page() >= total_pages - 1
    }

    /// Zero-based page indices to show as links, centered on the current page.
    pub fn page_links(&self) -> Vec<usize> {
        let total_pages = self.total_pages();
        if total_pages == 0 || self.max_page_links == 0 {
            return Vec::new();
        }
        let start = self.current_page().saturating_sub(self.max_page_links / 2);
        let end = (total_pages - 1).min(start + self.max_page_links - 1);
        (start..=end).collect()
    }

    /// The report line with `{first}`, `{last}` and `{totalRecords}` filled in.
    pub fn current_page_report(&self) -> String {
        self.report_template
            .replace("{first}", &self.first_record_displayed().to_string())
            .replace("{last}", &self.last_record_displayed().to_string())
            .replace("{totalRecords}", &self.total_records.to_string())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn go_first(&mut self) {
        if !self.is_first_page() {
            self.change_page(0);
        }
    }

    pub fn go_previous(&mut self) {
        if !self.is_first_page() {
            self.change_page(self.current_page() - 1);
        }
    }

    pub fn go_next(&mut self) {
        if !self.is_last_page() {
            self.change_page(self.current_page() + 1);
        }
    }

    pub fn go_last(&mut self) {
        if !self.is_last_page() {
            self.change_page(self.total_pages() - 1);
        }
    }

    /// Jump to `page`. Ignored when out of range or already current.
    pub fn go_to_page(&mut self, page: usize) {
        if page < self.total_pages() && page != self.current_page() {
            self.change_page(page);
        } else {
            tracing::trace!(target: targets::WIDGET, page, "page request ignored");
        }
    }

    /// Replace the page size and go back to the first page.
    ///
    /// Zero is ignored. The reset happens even when already on page 0.
    pub fn change_rows_per_page(&mut self, rows: usize) {
        if rows == 0 {
            tracing::trace!(target: targets::WIDGET, "zero page size ignored");
            return;
        }
        self.rows = rows;
        self.rows_dropdown.write_value(Some(rows));
        self.change_page(0);
    }

    /// Pick the page size at `index` in the rows dropdown.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn select_rows_option(&mut self, index: usize) -> bool {
        if !self.rows_dropdown.select_option(index) {
            return false;
        }
        if let Some(rows) = self.rows_dropdown.value()
            && rows != self.rows
        {
            self.change_rows_per_page(rows);
        }
        true
    }

    fn change_page(&mut self, page: usize) {
        self.first = page * self.rows;
        let event = PageChangeEvent {
            first: self.first,
            rows: self.rows,
            page,
            page_count: self.total_pages(),
        };
        tracing::debug!(target: targets::WIDGET, ?event, "page change requested");
        self.page_changed.emit(event);
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

fn rows_options(sizes: &[usize]) -> Vec<DropdownOption<usize>> {
    sizes
        .iter()
        .map(|&size| DropdownOption::new(size.to_string(), size))
        .collect()
}

static_assertions::assert_impl_all!(Pagination: Send, Sync);
