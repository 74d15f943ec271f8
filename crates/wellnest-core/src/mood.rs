//! Mood tracking: emotion vocabulary, logs, the weekly strip and streaks.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;
pub const DEFAULT_INTENSITY: u8 = 3;

/// Marker shown for a day without any mood log.
pub const UNKNOWN_MOOD: &str = "?";

const WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Neutral,
    Happy,
    Excited,
    Angry,
    Sad,
    Tired,
    Anxious,
    Calm,
    Frustrated,
}

impl Emotion {
    /// Every emotion on the wheel, center first.
    pub const ALL: [Emotion; 9] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Excited,
        Emotion::Angry,
        Emotion::Sad,
        Emotion::Tired,
        Emotion::Anxious,
        Emotion::Calm,
        Emotion::Frustrated,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Neutral => "😐",
            Emotion::Happy => "😊",
            Emotion::Excited => "😄",
            Emotion::Angry => "😤",
            Emotion::Sad => "😢",
            Emotion::Tired => "😴",
            Emotion::Anxious => "😰",
            Emotion::Calm => "😌",
            Emotion::Frustrated => "😠",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Neutral => "Neutral",
            Emotion::Happy => "Happy",
            Emotion::Excited => "Excited",
            Emotion::Angry => "Angry",
            Emotion::Sad => "Sad",
            Emotion::Tired => "Tired",
            Emotion::Anxious => "Anxious",
            Emotion::Calm => "Calm",
            Emotion::Frustrated => "Frustrated",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.name())
    }
}

impl FromStr for Emotion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(needle) || e.emoji() == needle)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "emotion".to_string(),
                message: format!("unknown emotion '{needle}'"),
            })
    }
}

/// One logged mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLog {
    pub emotion: Emotion,
    pub intensity: u8,
    #[serde(default)]
    pub notes: String,
    pub logged_on: NaiveDate,
}

impl MoodLog {
    /// Build a log, rejecting intensities outside 1..=5.
    pub fn new(
        emotion: Emotion,
        intensity: u8,
        notes: impl Into<String>,
        logged_on: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
            return Err(ValidationError::OutOfRange {
                field: "intensity".to_string(),
                min: i64::from(MIN_INTENSITY),
                max: i64::from(MAX_INTENSITY),
                value: i64::from(intensity),
            });
        }
        Ok(Self {
            emotion,
            intensity,
            notes: notes.into(),
            logged_on,
        })
    }
}

/// One day of the weekly strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub day: String,
    pub mood: String,
}

impl MoodEntry {
    pub fn new(day: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            mood: mood.into(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.mood == UNKNOWN_MOOD
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Monday-to-Sunday strip for the week containing `date`. Each day shows the
/// last mood logged that day, or `?`.
pub fn weekly_moods(logs: &[MoodLog], date: NaiveDate) -> Vec<MoodEntry> {
    let monday = week_start(date);
    monday
        .iter_days()
        .zip(WEEK_LABELS)
        .map(|(day, label)| {
            let mood = logs
                .iter()
                .rev()
                .find(|log| log.logged_on == day)
                .map_or(UNKNOWN_MOOD, |log| log.emotion.emoji());
            MoodEntry::new(label, mood)
        })
        .collect()
}

/// Consecutive days with at least one log, counted back from `today`.
///
/// A streak still counts when today has no log yet but yesterday does.
pub fn mood_streak(logs: &[MoodLog], today: NaiveDate) -> u32 {
    let logged = |date: NaiveDate| logs.iter().any(|log| log.logged_on == date);

    let mut cursor = if logged(today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if logged(yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    loop {
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) if logged(prev) => cursor = prev,
            _ => break,
        }
    }
    streak
}
