//! Calendar grid builder.
//!
//! A displayed month is always laid out as 6 rows of 7 columns (Sunday
//! first). Cells before day 1 are filled from the tail of the previous
//! month, cells after the last day from the head of the next month. Only
//! cells of the displayed month carry events.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::events::{CalendarEvent, EventIndex};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLUMNS: usize = 7;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLUMNS;

/// A cell shows at most this many events; the rest collapse into `+N`.
pub const MAX_VISIBLE_EVENTS: usize = 2;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// The month a grid is built for, anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthAnchor {
    first: NaiveDate,
}

impl MonthAnchor {
    /// Anchor for `year` and a zero-based `month0`.
    ///
    /// `month0` may lie outside `0..12`; it is normalized into the year the
    /// way month arithmetic rolls over (`-1` is December of the previous
    /// year, `12` is January of the next). Returns `None` only when the
    /// resulting year is outside the representable date range.
    pub fn new(year: i32, month0: i32) -> Option<Self> {
        Self::from_month_index(i64::from(year) * 12 + i64::from(month0))
    }

    fn from_month_index(index: i64) -> Option<Self> {
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Months since January of year 0.
    fn month_index(&self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(self.month0())
    }

    /// Anchor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Zero-based month index.
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// One-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0() as usize]
    }

    /// Day of week of the 1st, 0 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    pub fn days_in_prev_month(&self) -> u32 {
        if self.month() == 1 {
            days_in_month(self.year() - 1, 12)
        } else {
            days_in_month(self.year(), self.month() - 1)
        }
    }

    /// Date of `day` within this month, if it exists.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// Shift by a signed number of months. `None` when the target month is
    /// outside the representable date range.
    pub fn offset(self, months: i32) -> Option<Self> {
        Self::from_month_index(self.month_index() + i64::from(months))
    }

    pub fn next(self) -> Option<Self> {
        self.offset(1)
    }

    pub fn prev(self) -> Option<Self> {
        self.offset(-1)
    }
}

impl fmt::Display for MonthAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year())
    }
}

/// One grid position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Day-of-month printed in the cell.
    pub day: u32,
    /// False for filler cells borrowed from adjacent months.
    pub in_displayed_month: bool,
    pub date: NaiveDate,
    /// Always empty for filler cells.
    pub events: Vec<CalendarEvent>,
}

impl CalendarCell {
    /// Events shown directly in the cell.
    pub fn visible_events(&self) -> &[CalendarEvent] {
        &self.events[..self.events.len().min(MAX_VISIBLE_EVENTS)]
    }

    /// Count behind the `+N` marker.
    pub fn hidden_event_count(&self) -> usize {
        self.events.len().saturating_sub(MAX_VISIBLE_EVENTS)
    }
}

/// A fully laid out month. Rebuilt from scratch on every navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarGrid {
    anchor: MonthAnchor,
    cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// Lay out the month of `anchor`, annotating its days from `events`.
    ///
    /// Returns `None` when part of the 42-day window falls outside the
    /// representable date range (the first and last supported months).
    pub fn build(anchor: MonthAnchor, events: &EventIndex) -> Option<Self> {
        let leading = anchor.first_weekday();
        let days = anchor.days_in_month();
        let prev_days = anchor.days_in_prev_month();
        let trailing = GRID_CELLS as u32 - leading - days;

        let start = anchor
            .first_day()
            .checked_sub_days(Days::new(u64::from(leading)))?;
        let mut dates = start.iter_days();

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for day in (prev_days - leading + 1)..=prev_days {
            cells.push(CalendarCell {
                day,
                in_displayed_month: false,
                date: dates.next()?,
                events: Vec::new(),
            });
        }
        for day in 1..=days {
            let date = dates.next()?;
            cells.push(CalendarCell {
                day,
                in_displayed_month: true,
                date,
                events: events.events_on(date).to_vec(),
            });
        }
        for day in 1..=trailing {
            cells.push(CalendarCell {
                day,
                in_displayed_month: false,
                date: dates.next()?,
                events: Vec::new(),
            });
        }

        tracing::trace!(month = %anchor, leading, days, trailing, "built calendar grid");
        Some(Self { anchor, cells })
    }

    pub fn anchor(&self) -> MonthAnchor {
        self.anchor
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Cells as six week rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn leading_count(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| !cell.in_displayed_month)
            .count()
    }

    pub fn current_month_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.in_displayed_month)
            .count()
    }

    pub fn trailing_count(&self) -> usize {
        self.cells
            .iter()
            .rev()
            .take_while(|cell| !cell.in_displayed_month)
            .count()
    }

    /// Whether `cell` is the real current date. Filler cells never are.
    pub fn is_today(&self, cell: &CalendarCell, today: NaiveDate) -> bool {
        cell.in_displayed_month
            && cell.day == today.day()
            && self.anchor.month() == today.month()
            && self.anchor.year() == today.year()
    }

    /// Index of the cell highlighted as today, if it is on this grid.
    pub fn today_index(&self, today: NaiveDate) -> Option<usize> {
        self.cells.iter().position(|cell| self.is_today(cell, today))
    }
}

/// Month navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Navigable calendar state: the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    anchor: MonthAnchor,
}

impl CalendarView {
    /// View opened on the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            anchor: MonthAnchor::containing(today),
        }
    }

    pub fn at(anchor: MonthAnchor) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> MonthAnchor {
        self.anchor
    }

    /// Step one month. At either end of the date range the view stays put.
    pub fn navigate(&mut self, direction: NavDirection) -> MonthAnchor {
        let target = match direction {
            NavDirection::Prev => self.anchor.prev(),
            NavDirection::Next => self.anchor.next(),
        };
        if let Some(anchor) = target {
            self.anchor = anchor;
        }
        self.anchor
    }

    pub fn go_to_today(&mut self, today: NaiveDate) -> MonthAnchor {
        self.anchor = MonthAnchor::containing(today);
        self.anchor
    }

    pub fn grid(&self, events: &EventIndex) -> Option<CalendarGrid> {
        CalendarGrid::build(self.anchor, events)
    }
}
