//! Journal entries and their summary annotations.

pub mod summary;

pub use summary::{LexiconSummarizer, Summarizer, Summary, SummaryJob, SummaryService};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Journal entry identifier.
pub type EntryId = u64;

/// Sentiment annotation attached to an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Polarity in `[-1.0, 1.0]`.
    pub score: f32,
    pub emoji: String,
    pub label: String,
}

impl Sentiment {
    /// Map a polarity score onto its label and emoji.
    pub fn from_score(score: f32) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(-1.0, 1.0) };
        let (emoji, label) = if score >= 0.75 {
            ("😄", "Very Positive")
        } else if score >= 0.25 {
            ("😊", "Positive")
        } else if score > -0.25 {
            ("😐", "Neutral")
        } else if score > -0.75 {
            ("😔", "Negative")
        } else {
            ("😢", "Very Negative")
        };
        Self {
            score,
            emoji: emoji.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub ai_summary: Option<Vec<String>>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

impl JournalEntry {
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        content: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            date,
            ai_summary: None,
            sentiment: None,
        }
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    /// Leading `max_chars` characters, cut on a word boundary and suffixed
    /// with `...` when shortened.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let content = self.content.trim();
        if content.chars().count() <= max_chars {
            return content.to_string();
        }
        let cut: String = content.chars().take(max_chars).collect();
        let cut = match cut.rfind(char::is_whitespace) {
            Some(pos) if pos > 0 => &cut[..pos],
            _ => cut.as_str(),
        };
        format!("{}...", cut.trim_end_matches([',', '.', ';', ':']))
    }

    pub fn is_summarized(&self) -> bool {
        self.ai_summary.is_some()
    }

    /// Attach a finished summary, replacing any previous one.
    pub fn apply_summary(&mut self, summary: Summary) {
        self.ai_summary = Some(summary.points);
        self.sentiment = Some(summary.sentiment);
    }
}

/// Number of non-empty whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_ignores_extra_spaces() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one  two\nthree "), 3);
    }

    #[test]
    fn sentiment_bands() {
        assert_eq!(Sentiment::from_score(0.8).label, "Very Positive");
        assert_eq!(Sentiment::from_score(0.7).label, "Positive");
        assert_eq!(Sentiment::from_score(0.7).emoji, "😊");
        assert_eq!(Sentiment::from_score(0.0).label, "Neutral");
        assert_eq!(Sentiment::from_score(-0.5).label, "Negative");
        assert_eq!(Sentiment::from_score(-3.0).score, -1.0);
        assert_eq!(Sentiment::from_score(f32::NAN).label, "Neutral");
    }

    #[test]
    fn excerpt_cuts_on_word_boundary() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 28).unwrap();
        let entry = JournalEntry::new(1, "t", "Today was challenging but rewarding.", date);
        assert_eq!(entry.excerpt(32), "Today was challenging but...");
        assert_eq!(entry.excerpt(100), "Today was challenging but rewarding.");
    }
}
