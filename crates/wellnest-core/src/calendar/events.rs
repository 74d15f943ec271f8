//! Calendar events keyed by full date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::grid::MonthAnchor;
use crate::journal::JournalEntry;
use crate::mood::MoodLog;
use crate::task::Task;

/// What produced a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Task,
    Mood,
    Journal,
}

impl EventKind {
    /// Single-letter marker drawn inside a grid cell.
    pub fn indicator(&self) -> char {
        match self {
            EventKind::Task => 'T',
            EventKind::Mood => 'M',
            EventKind::Journal => 'J',
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            EventKind::Task => "Task",
            EventKind::Mood => "Mood Log",
            EventKind::Journal => "Journal Entry",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Task => "task",
            EventKind::Mood => "mood",
            EventKind::Journal => "journal",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub kind: EventKind,
    pub title: String,
}

impl CalendarEvent {
    pub fn new(kind: EventKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }
}

/// Events grouped by the date they fall on, in insertion order per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventIndex {
    by_date: BTreeMap<NaiveDate, Vec<CalendarEvent>>,
}

impl EventIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a day-of-month table onto the month of `anchor`.
    ///
    /// Days that do not exist in that month (e.g. 30 in February) are
    /// dropped.
    pub fn from_day_table<'a, I>(anchor: MonthAnchor, table: I) -> Self
    where
        I: IntoIterator<Item = (u32, &'a [CalendarEvent])>,
    {
        let mut index = Self::new();
        for (day, events) in table {
            match anchor.date_of(day) {
                Some(date) => {
                    for event in events {
                        index.insert(date, event.clone());
                    }
                }
                None => {
                    tracing::debug!(day, month = %anchor, "dropping events for day outside month");
                }
            }
        }
        index
    }

    /// Derive events from dated records: tasks with a due date, journal
    /// entries and mood logs.
    pub fn from_records(tasks: &[Task], entries: &[JournalEntry], moods: &[MoodLog]) -> Self {
        let mut index = Self::new();
        for task in tasks {
            if let Some(due) = task.due_date {
                index.insert(due, CalendarEvent::new(EventKind::Task, task.title.clone()));
            }
        }
        for mood in moods {
            index.insert(
                mood.logged_on,
                CalendarEvent::new(EventKind::Mood, mood.emotion.name()),
            );
        }
        for entry in entries {
            index.insert(
                entry.date,
                CalendarEvent::new(EventKind::Journal, entry.title.clone()),
            );
        }
        index
    }

    pub fn insert(&mut self, date: NaiveDate, event: CalendarEvent) {
        self.by_date.entry(date).or_default().push(event);
    }

    /// Append every event of `other` after the existing ones for each date.
    pub fn merge(&mut self, other: EventIndex) {
        for (date, events) in other.by_date {
            self.by_date.entry(date).or_default().extend(events);
        }
    }

    pub fn events_on(&self, date: NaiveDate) -> &[CalendarEvent] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dates with at least one event, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    /// Total number of events.
    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
