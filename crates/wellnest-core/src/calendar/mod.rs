//! Month grid construction and the date-keyed event index that annotates it.

pub mod events;
pub mod grid;

pub use events::{CalendarEvent, EventIndex, EventKind};
pub use grid::{
    days_in_month, CalendarCell, CalendarGrid, CalendarView, MonthAnchor, NavDirection,
    GRID_CELLS, GRID_COLUMNS, GRID_ROWS, MAX_VISIBLE_EVENTS, MONTH_NAMES, WEEKDAY_LABELS,
};
