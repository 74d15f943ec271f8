//! # Wellnest Core Library
//!
//! This library provides the logic behind the Wellnest wellness dashboard:
//! tasks, mood tracking, journaling and the month calendar. It follows a
//! CLI-first approach: every operation is reachable from the standalone
//! `wellnest-cli` binary, and any UI is a thin layer over the same crate.
//!
//! ## Architecture
//!
//! - **Calendar**: 6x7 month grid builder, navigation, and a date-keyed
//!   event index
//! - **Tasks**: task model, priority grouping and filtering
//! - **Journal**: entries plus an asynchronous, cancellable summary service
//! - **Mood**: emotion vocabulary, weekly strip and streaks
//! - **Storage**: the injectable [`WellnessStore`] trait, an in-memory
//!   implementation with JSON snapshots, and TOML configuration
//!
//! ## Key Components
//!
//! - [`CalendarGrid`]: Month grid for a [`MonthAnchor`]
//! - [`group_by_priority`]: Priority buckets in display order
//! - [`MemoryStore`]: In-memory state
//! - [`SummaryService`]: Background journal summaries
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod dashboard;
pub mod error;
pub mod journal;
pub mod mood;
pub mod sample;
pub mod storage;
pub mod task;

pub use calendar::{
    CalendarCell, CalendarEvent, CalendarGrid, CalendarView, EventIndex, EventKind, MonthAnchor,
    NavDirection,
};
pub use dashboard::DashboardStats;
pub use error::{ConfigError, CoreError, SummaryError, ValidationError};
pub use journal::{JournalEntry, Sentiment, Summarizer, Summary, SummaryJob, SummaryService};
pub use mood::{Emotion, MoodEntry, MoodLog};
pub use storage::{Config, MemoryStore, Snapshot, WellnessStore};
pub use task::{group_by_priority, NewTask, Priority, PriorityGroups, Task, TaskFilter, TaskId};
