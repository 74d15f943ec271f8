pub mod config;
pub mod memory;
pub mod snapshot;

pub use config::{Config, PreferencesConfig, ProfileConfig, SummaryConfig, Theme};
pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use std::path::PathBuf;

use crate::calendar::EventIndex;
use crate::error::ConfigError;
use crate::journal::{EntryId, JournalEntry, Summary};
use crate::mood::MoodLog;
use crate::task::{NewTask, Task, TaskId};

/// Application state behind every screen.
///
/// All operations are synchronous and infallible; lookups by unknown id are
/// no-ops reported through the returned `bool`.
pub trait WellnessStore {
    /// Tasks in insertion order.
    fn tasks(&self) -> &[Task];

    fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks().iter().find(|task| task.id == id)
    }

    /// Append a new, incomplete task and return its fresh id.
    fn create_task(&mut self, new: NewTask) -> TaskId;

    /// Flip completion of `id`. Returns false if no such task exists.
    fn toggle_task(&mut self, id: TaskId) -> bool;

    /// Remove `id`. Returns false if no such task exists.
    fn delete_task(&mut self, id: TaskId) -> bool;

    /// Journal entries in insertion order.
    fn journal_entries(&self) -> &[JournalEntry];

    fn journal_entry(&self, id: EntryId) -> Option<&JournalEntry> {
        self.journal_entries().iter().find(|entry| entry.id == id)
    }

    fn add_journal_entry(&mut self, entry: JournalEntry) -> EntryId;

    /// Attach a summary to entry `id`. Returns false if no such entry exists.
    fn apply_summary(&mut self, id: EntryId, summary: Summary) -> bool;

    fn mood_logs(&self) -> &[MoodLog];

    fn log_mood(&mut self, log: MoodLog);

    /// Standalone calendar events not derived from other records.
    fn calendar_events(&self) -> &EventIndex;

    /// Everything the calendar shows: standalone events followed by events
    /// derived from tasks, mood logs and journal entries.
    fn event_index(&self) -> EventIndex {
        let mut index = self.calendar_events().clone();
        index.merge(EventIndex::from_records(
            self.tasks(),
            self.journal_entries(),
            self.mood_logs(),
        ));
        index
    }
}

/// Returns `~/.config/wellnest[-dev]/` based on WELLNEST_ENV.
///
/// Set WELLNEST_ENV=dev to use development data directory. WELLNEST_DATA_DIR
/// replaces the directory entirely.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("WELLNEST_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("WELLNEST_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("wellnest-dev")
            } else {
                base_dir.join("wellnest")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
