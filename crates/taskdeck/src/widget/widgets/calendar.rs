//! Month grid generation for the date picker.
//!
//! A [`CalendarGrid`] is a pure value: six full weeks (42 days) starting at the
//! Sunday on or before the 1st of the month. Every month renders with the same
//! number of cells, including those that need a sixth row.

use chrono::{Datelike, Days, NaiveDate};

/// Number of cells in a month grid (6 rows of 7 days).
pub const GRID_CELLS: usize = 42;

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Month names in display order (pt-BR).
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Column headers, Sunday first (pt-BR).
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// The 42 consecutive days displayed for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
    days: Vec<NaiveDate>,
}

impl CalendarGrid {
    /// Build the grid for `month` (1 to 12) of `year`.
    ///
    /// Returns `None` for an invalid month or a year outside chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = following_month(year, month);
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;

        // Sunday = 0, so the shift is exactly the weekday index of the 1st.
        let shift = u64::from(first_day.weekday().num_days_from_sunday());
        let start = first_day.checked_sub_days(Days::new(shift))?;

        let days = (0..GRID_CELLS as u64)
            .map(|offset| start.checked_add_days(Days::new(offset)))
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            year,
            month,
            first_day,
            last_day,
            days,
        })
    }

    /// Build the grid for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The displayed month, 1 to 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day_of_month(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day_of_month(&self) -> NaiveDate {
        self.last_day
    }

    /// All 42 days, in display order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// The grid split into its six weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    /// Whether `date` belongs to the displayed month rather than a padding day.
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }

    /// The pt-BR name of the displayed month.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// The pt-BR name of `month` (1 to 12); empty for anything else.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// `(year, month)` of the month before, rolling January back to December.
pub fn preceding_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// `(year, month)` of the month after, rolling December over to January.
pub fn following_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 { (year + 1, 1) } else { (year, month + 1) }
}
