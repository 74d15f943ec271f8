//! Journal commands.

use chrono::NaiveDate;
use clap::Subcommand;
use std::time::Duration;
use wellnest_core::journal::word_count;
use wellnest_core::{Config, JournalEntry, SummaryService, WellnessStore};

use super::{Context, StoreHandle};

#[derive(Subcommand)]
pub enum JournalAction {
    /// List entries
    List,
    /// Show one entry
    Get {
        /// Entry ID
        id: u64,
    },
    /// Write a new entry
    Add {
        /// Entry title
        title: String,
        /// Entry text
        content: String,
        /// Entry date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Count words of a draft
    Words {
        /// Draft text
        text: String,
    },
    /// Generate bullet points and sentiment for an entry
    Summarize {
        /// Entry ID
        id: u64,
        /// Override the configured timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

pub fn run(ctx: &Context, action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        JournalAction::List => {
            let handle = StoreHandle::open(ctx)?;
            println!("{}", serde_json::to_string_pretty(handle.store.journal_entries())?);
        }
        JournalAction::Get { id } => {
            let handle = StoreHandle::open(ctx)?;
            match handle.store.journal_entry(id) {
                Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
                None => println!("Entry not found: {id}"),
            }
        }
        JournalAction::Add {
            title,
            content,
            date,
        } => {
            let mut handle = StoreHandle::open(ctx)?;
            let entry = JournalEntry::new(0, title, content, date.unwrap_or(ctx.today));
            let words = entry.word_count();
            let id = handle.store.add_journal_entry(entry);
            handle.save()?;
            println!("Entry saved: {id} ({words} words)");
        }
        JournalAction::Words { text } => {
            println!("{}", word_count(&text));
        }
        JournalAction::Summarize { id, timeout } => {
            let mut handle = StoreHandle::open(ctx)?;
            let entry = handle
                .store
                .journal_entry(id)
                .cloned()
                .ok_or(format!("Entry not found: {id}"))?;

            let config = Config::load_or_default();
            let mut service = SummaryService::from_config(&config.summary);
            if let Some(secs) = timeout {
                service = service.with_timeout(Duration::from_secs(secs));
            }

            let runtime = tokio::runtime::Runtime::new()?;
            let summary = runtime.block_on(service.summarize(entry))?;

            handle.store.apply_summary(id, summary.clone());
            handle.save()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
