//! Asynchronous journal summarization.
//!
//! A [`SummaryService`] runs a [`Summarizer`] on a tokio task and hands back
//! a [`SummaryJob`]. The job can be cancelled, and dropping the job (or the
//! future of [`SummaryService::summarize`]) cancels it as well. It fails with
//! [`SummaryError::Timeout`] when the summarizer does not finish within the
//! configured limit, and backend errors are passed through unchanged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use super::{EntryId, JournalEntry, Sentiment};
use crate::error::SummaryError;
use crate::storage::config::SummaryConfig;

/// Output of a summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub points: Vec<String>,
    pub sentiment: Sentiment,
}

/// A summarization backend.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Backend identifier used in logs and errors.
    fn name(&self) -> &str;

    async fn summarize(&self, entry: &JournalEntry) -> Result<Summary, SummaryError>;
}

const POSITIVE_WORDS: &[&str] = &[
    "accomplished",
    "calm",
    "clear",
    "enjoyed",
    "excited",
    "glad",
    "good",
    "grateful",
    "great",
    "happy",
    "helped",
    "love",
    "positive",
    "proud",
    "refreshed",
    "relaxed",
    "rewarding",
    "solace",
    "success",
    "thankful",
    "well",
    "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry",
    "anxious",
    "bad",
    "challenging",
    "difficult",
    "exhausted",
    "frustrated",
    "lonely",
    "overwhelmed",
    "sad",
    "stress",
    "stressed",
    "tired",
    "upset",
    "worried",
    "worse",
];

/// Offline summarizer: leading sentences as points, word-list polarity as
/// sentiment.
#[derive(Debug, Clone)]
pub struct LexiconSummarizer {
    max_points: usize,
}

impl LexiconSummarizer {
    pub fn new(max_points: usize) -> Self {
        Self {
            max_points: max_points.max(1),
        }
    }

    /// Polarity in `[-1, 1]`: `(positive - negative) / (positive + negative)`.
    pub fn score(text: &str) -> f32 {
        let (mut positive, mut negative) = (0u32, 0u32);
        for word in text.split(|c: char| !c.is_alphanumeric()) {
            let word = word.to_ascii_lowercase();
            if POSITIVE_WORDS.contains(&word.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                negative += 1;
            }
        }
        let total = positive + negative;
        if total == 0 {
            0.0
        } else {
            (positive as f32 - negative as f32) / total as f32
        }
    }

    fn points(&self, text: &str) -> Vec<String> {
        text.split_terminator(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .take(self.max_points)
            .map(str::to_string)
            .collect()
    }
}

impl Default for LexiconSummarizer {
    fn default() -> Self {
        Self::new(SummaryConfig::default().max_points)
    }
}

#[async_trait]
impl Summarizer for LexiconSummarizer {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn summarize(&self, entry: &JournalEntry) -> Result<Summary, SummaryError> {
        if entry.content.trim().is_empty() {
            return Err(SummaryError::EmptyEntry(entry.id));
        }
        Ok(Summary {
            points: self.points(&entry.content),
            sentiment: Sentiment::from_score(Self::score(&entry.content)),
        })
    }
}

/// Launches summary jobs against one backend.
#[derive(Clone)]
pub struct SummaryService {
    summarizer: Arc<dyn Summarizer>,
    timeout: Duration,
}

impl SummaryService {
    pub fn new(summarizer: Arc<dyn Summarizer>, timeout: Duration) -> Self {
        Self {
            summarizer,
            timeout,
        }
    }

    /// Service backed by the lexicon summarizer, tuned from config.
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(
            Arc::new(LexiconSummarizer::new(config.max_points)),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start summarizing `entry` in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, entry: JournalEntry) -> SummaryJob {
        let token = CancellationToken::new();
        let child = token.child_token();
        let summarizer = Arc::clone(&self.summarizer);
        let timeout = self.timeout;
        let entry_id = entry.id;

        tracing::info!(entry_id, backend = summarizer.name(), "summary job started");
        let handle = tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = child.cancelled() => Err(SummaryError::Cancelled),
                outcome = tokio::time::timeout(timeout, summarizer.summarize(&entry)) => {
                    match outcome {
                        Ok(result) => result,
                        Err(_) => Err(SummaryError::Timeout {
                            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                        }),
                    }
                }
            };
            match &result {
                Ok(summary) => {
                    tracing::info!(entry_id, points = summary.points.len(), "summary job finished")
                }
                Err(err) => tracing::warn!(entry_id, error = %err, "summary job failed"),
            }
            result
        });

        SummaryJob {
            entry_id,
            token: token.clone(),
            handle,
            _cancel_on_drop: token.drop_guard(),
        }
    }

    /// Spawn and wait in one step.
    pub async fn summarize(&self, entry: JournalEntry) -> Result<Summary, SummaryError> {
        self.spawn(entry).wait().await
    }
}

/// Handle to a running summary request. Dropping it cancels the request.
pub struct SummaryJob {
    entry_id: EntryId,
    token: CancellationToken,
    handle: JoinHandle<Result<Summary, SummaryError>>,
    _cancel_on_drop: DropGuard,
}

impl SummaryJob {
    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }

    /// Busy flag: true until the worker has produced its result.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Request cancellation. A job that already finished keeps its result.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub async fn wait(self) -> Result<Summary, SummaryError> {
        self.handle.await?
    }
}
