//! In-memory store.

use chrono::{NaiveDate, Utc};

use super::snapshot::Snapshot;
use super::WellnessStore;
use crate::calendar::EventIndex;
use crate::journal::{EntryId, JournalEntry, Summary};
use crate::mood::MoodLog;
use crate::sample;
use crate::task::{IdGenerator, NewTask, Task, TaskId};

/// Store holding everything in plain vectors.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
    journal: Vec<JournalEntry>,
    moods: Vec<MoodLog>,
    events: EventIndex,
    task_ids: IdGenerator,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the sample data, calendar events placed on the
    /// month of `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        Self::from_snapshot(Snapshot {
            tasks: sample::tasks(),
            journal: sample::journal_entries(),
            moods: sample::mood_logs(today),
            events: sample::calendar_events(today),
            ..Snapshot::default()
        })
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut task_ids = IdGenerator::new();
        for task in &snapshot.tasks {
            task_ids.observe(task.id);
        }
        Self {
            tasks: snapshot.tasks,
            journal: snapshot.journal,
            moods: snapshot.moods,
            events: snapshot.events,
            task_ids,
        }
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            journal: self.journal.clone(),
            moods: self.moods.clone(),
            events: self.events.clone(),
            ..Snapshot::default()
        }
    }

    /// Create a task with an id derived from `now_ms`.
    pub fn create_task_at(&mut self, new: NewTask, now_ms: u64) -> TaskId {
        let id = self.task_ids.next(now_ms);
        tracing::debug!(id, title = %new.title, "task created");
        self.tasks.push(Task::from_new(id, new));
        id
    }

    pub fn events_mut(&mut self) -> &mut EventIndex {
        &mut self.events
    }
}

impl WellnessStore for MemoryStore {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn create_task(&mut self, new: NewTask) -> TaskId {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.create_task_at(new, now_ms)
    }

    fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                tracing::debug!(id, completed = task.completed, "task toggled");
                true
            }
            None => {
                tracing::debug!(id, "toggle ignored, no such task");
                false
            }
        }
    }

    fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        tracing::debug!(id, removed, "task delete");
        removed
    }

    fn journal_entries(&self) -> &[JournalEntry] {
        &self.journal
    }

    /// Entries keep a caller-chosen id unless it is 0 or already taken, in
    /// which case the next free id is assigned.
    fn add_journal_entry(&mut self, mut entry: JournalEntry) -> EntryId {
        let taken = entry.id == 0 || self.journal.iter().any(|e| e.id == entry.id);
        if taken {
            entry.id = self.journal.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        }
        let id = entry.id;
        tracing::debug!(id, title = %entry.title, "journal entry added");
        self.journal.push(entry);
        id
    }

    fn apply_summary(&mut self, id: EntryId, summary: Summary) -> bool {
        match self.journal.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.apply_summary(summary);
                true
            }
            None => false,
        }
    }

    fn mood_logs(&self) -> &[MoodLog] {
        &self.moods
    }

    fn log_mood(&mut self, log: MoodLog) {
        tracing::debug!(emotion = log.emotion.name(), intensity = log.intensity, "mood logged");
        self.moods.push(log);
    }

    fn calendar_events(&self) -> &EventIndex {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarEvent, EventKind};
    use crate::journal::Sentiment;
    use crate::mood::Emotion;
    use crate::task::Priority;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn create_appends_incomplete_task() {
        let mut store = MemoryStore::new();
        let id = store.create_task_at(NewTask::new("X").priority(Priority::High), 42);
        assert_eq!(id, 42);
        let task = store.task(id).unwrap();
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn ids_never_collide_within_one_millisecond() {
        let mut store = MemoryStore::new();
        let a = store.create_task_at(NewTask::new("a"), 1_000);
        let b = store.create_task_at(NewTask::new("b"), 1_000);
        assert_ne!(a, b);
    }

    #[test]
    fn seeded_ids_are_not_reissued() {
        let mut store = MemoryStore::seeded(ymd(2024, 1, 10));
        let max_seeded = store.tasks().iter().map(|t| t.id).max().unwrap();
        let id = store.create_task_at(NewTask::new("new"), 0);
        assert!(id > max_seeded);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = MemoryStore::seeded(ymd(2024, 1, 10));
        let before = store.tasks().to_vec();
        assert!(!store.toggle_task(999_999));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn toggle_flips_twice() {
        let mut store = MemoryStore::new();
        let id = store.create_task(NewTask::new("flip"));
        assert!(store.toggle_task(id));
        assert!(store.task(id).unwrap().completed);
        assert!(store.toggle_task(id));
        assert!(!store.task(id).unwrap().completed);
    }

    #[test]
    fn create_then_delete_restores_list() {
        let mut store = MemoryStore::seeded(ymd(2024, 1, 10));
        let before = store.tasks().to_vec();
        let id = store.create_task(NewTask::new("X"));
        assert_eq!(store.tasks().len(), before.len() + 1);
        assert!(store.delete_task(id));
        assert_eq!(store.tasks(), before.as_slice());
        assert!(!store.delete_task(id));
    }

    #[test]
    fn journal_ids_are_unique() {
        let mut store = MemoryStore::new();
        let day = ymd(2024, 8, 28);
        assert_eq!(store.add_journal_entry(JournalEntry::new(0, "a", "x", day)), 1);
        assert_eq!(store.add_journal_entry(JournalEntry::new(7, "b", "y", day)), 7);
        assert_eq!(store.add_journal_entry(JournalEntry::new(7, "c", "z", day)), 8);
    }

    #[test]
    fn apply_summary_to_entry() {
        let mut store = MemoryStore::new();
        let id = store.add_journal_entry(JournalEntry::new(0, "a", "x", ymd(2024, 8, 28)));
        let summary = Summary {
            points: vec!["x".to_string()],
            sentiment: Sentiment::from_score(0.5),
        };
        assert!(store.apply_summary(id, summary.clone()));
        assert!(store.journal_entry(id).unwrap().is_summarized());
        assert!(!store.apply_summary(id + 1, summary));
    }

    #[test]
    fn event_index_merges_standalone_and_derived() {
        let day = ymd(2024, 3, 5);
        let mut store = MemoryStore::new();
        store
            .events_mut()
            .insert(day, CalendarEvent::new(EventKind::Task, "Standup"));
        store.create_task(NewTask::new("Dentist").due(day, None));
        store.log_mood(MoodLog::new(Emotion::Calm, 2, "", day).unwrap());
        store.add_journal_entry(JournalEntry::new(0, "Notes", "text", day));

        let index = store.event_index();
        let kinds: Vec<EventKind> = index.events_on(day).iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Task, EventKind::Task, EventKind::Mood, EventKind::Journal]
        );
    }
}
