//! Dashboard overview figures.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::mood::mood_streak;
use crate::storage::WellnessStore;
use crate::task::{group_by_priority, Task};

/// Excerpt length for the recent journal entry list.
const EXCERPT_CHARS: usize = 40;
const RECENT_ENTRIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub greeting: String,
    pub tasks_completed: usize,
    pub tasks_pending: usize,
    pub mood_streak_days: u32,
    /// Entries dated within the seven days ending today.
    pub journal_entries_this_week: usize,
    /// Due today or undated, high priority first.
    pub todays_tasks: Vec<Task>,
    /// Newest first.
    pub recent_entries: Vec<String>,
}

impl DashboardStats {
    pub fn compute(
        store: &dyn WellnessStore,
        today: NaiveDate,
        hour: u32,
        display_name: &str,
    ) -> Self {
        let tasks = store.tasks();
        let tasks_completed = tasks.iter().filter(|t| t.completed).count();

        let week_ago = today.checked_sub_days(Days::new(6)).unwrap_or(today);
        let journal_entries_this_week = store
            .journal_entries()
            .iter()
            .filter(|e| e.date >= week_ago && e.date <= today)
            .count();

        let due_today: Vec<Task> = tasks
            .iter()
            .filter(|t| t.is_due_on_or_undated(today))
            .cloned()
            .collect();
        let todays_tasks = group_by_priority(&due_today)
            .ordered()
            .into_iter()
            .cloned()
            .collect();

        let mut entries: Vec<_> = store.journal_entries().iter().collect();
        entries.sort_by_key(|e| std::cmp::Reverse(e.date));
        let recent_entries = entries
            .into_iter()
            .take(RECENT_ENTRIES)
            .map(|e| e.excerpt(EXCERPT_CHARS))
            .collect();

        Self {
            greeting: greeting(hour, display_name),
            tasks_completed,
            tasks_pending: tasks.len() - tasks_completed,
            mood_streak_days: mood_streak(store.mood_logs(), today),
            journal_entries_this_week,
            todays_tasks,
            recent_entries,
        }
    }
}

/// Time-of-day greeting addressing the first name, if any.
pub fn greeting(hour: u32, display_name: &str) -> String {
    let salutation = match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    };
    match display_name.split_whitespace().next() {
        Some(first) => format!("{salutation}, {first}!"),
        None => format!("{salutation}!"),
    }
}
