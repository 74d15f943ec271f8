//! Seed data for a fresh store.

use chrono::{NaiveDate, NaiveTime};

use crate::calendar::{CalendarEvent, EventIndex, EventKind, MonthAnchor};
use crate::journal::{JournalEntry, Sentiment};
use crate::mood::{week_start, Emotion, MoodLog, DEFAULT_INTENSITY};
use crate::task::{Priority, Task};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Finish project presentation".to_string(),
            description: "Complete slides for quarterly review".to_string(),
            due_date: date(2024, 1, 15),
            due_time: time(15, 0),
            priority: Priority::High,
            category: "Work".to_string(),
            completed: false,
        },
        Task {
            id: 2,
            title: "Review quarterly reports".to_string(),
            description: "Analyze Q4 performance metrics".to_string(),
            due_date: date(2024, 1, 16),
            due_time: time(10, 0),
            priority: Priority::Medium,
            category: "Work".to_string(),
            completed: false,
        },
        Task {
            id: 3,
            title: "Weekly grocery shopping".to_string(),
            description: "Buy ingredients for meal prep".to_string(),
            due_date: date(2024, 1, 14),
            due_time: time(18, 0),
            priority: Priority::Low,
            category: "Personal".to_string(),
            completed: true,
        },
    ]
}

pub fn journal_entries() -> Vec<JournalEntry> {
    let mut reflection = JournalEntry::new(
        1,
        "Evening Reflection",
        "Today was challenging but rewarding. I managed to complete the presentation despite \
         feeling overwhelmed. The team meeting went well and I received positive feedback...",
        date(2024, 8, 28).unwrap_or_default(),
    );
    reflection.ai_summary = Some(vec![
        "Faced work stress but overcame challenges".to_string(),
        "Found solace in evening walk".to_string(),
        "Overall positive outlook despite difficulties".to_string(),
    ]);
    reflection.sentiment = Some(Sentiment::from_score(0.7));

    let mut morning = JournalEntry::new(
        2,
        "Morning Thoughts",
        "Woke up feeling refreshed today. The meditation session really helped clear my mind. \
         Looking forward to the day ahead and excited about the new project...",
        date(2024, 8, 27).unwrap_or_default(),
    );
    morning.ai_summary = Some(vec![
        "Started day with positive mindset".to_string(),
        "Meditation practice showing benefits".to_string(),
        "Enthusiasm for upcoming projects".to_string(),
    ]);
    morning.sentiment = Some(Sentiment::from_score(0.8));

    vec![reflection, morning]
}

/// Monday to Saturday of the current week, skipping days after `today`.
pub fn mood_logs(today: NaiveDate) -> Vec<MoodLog> {
    let week = [
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Sad,
        Emotion::Happy,
        Emotion::Tired,
        Emotion::Happy,
    ];
    week_start(today)
        .iter_days()
        .zip(week)
        .take_while(|(day, _)| *day <= today)
        .filter_map(|(day, emotion)| MoodLog::new(emotion, DEFAULT_INTENSITY, "", day).ok())
        .collect()
}

/// Day-of-month event table placed on the month of `today`.
pub fn calendar_events(today: NaiveDate) -> EventIndex {
    const DAYS: [(u32, &[(EventKind, &str)]); 9] = [
        (1, &[(EventKind::Task, "Team Meeting"), (EventKind::Mood, "Happy")]),
        (5, &[(EventKind::Journal, "Evening Reflection")]),
        (8, &[(EventKind::Task, "Project Deadline")]),
        (12, &[(EventKind::Mood, "Anxious")]),
        (15, &[(EventKind::Task, "Review Reports"), (EventKind::Mood, "Content")]),
        (19, &[(EventKind::Journal, "Weekly Review")]),
        (22, &[(EventKind::Task, "Presentation")]),
        (26, &[(EventKind::Task, "Planning Session")]),
        (29, &[(EventKind::Journal, "Monthly Goals")]),
    ];
    let table: Vec<(u32, Vec<CalendarEvent>)> = DAYS
        .iter()
        .map(|(day, events)| {
            let events = events
                .iter()
                .map(|(kind, title)| CalendarEvent::new(*kind, *title))
                .collect();
            (*day, events)
        })
        .collect();
    EventIndex::from_day_table(
        MonthAnchor::containing(today),
        table.iter().map(|(day, events)| (*day, events.as_slice())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_logs_stop_at_today() {
        // Wednesday
        let today = NaiveDate::from_ymd_opt(2024, 8, 28).unwrap();
        let logs = mood_logs(today);
        assert_eq!(logs.len(), 3);
        assert_eq!(logs.last().unwrap().logged_on, today);

        // Sunday: full Monday..Saturday
        let sunday = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(mood_logs(sunday).len(), 6);
    }

    #[test]
    fn calendar_table_drops_missing_days() {
        let feb = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
        // 29 does not exist in February 2023
        assert_eq!(calendar_events(feb).len(), 10);
        let jan = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(calendar_events(jan).len(), 11);
    }
}
