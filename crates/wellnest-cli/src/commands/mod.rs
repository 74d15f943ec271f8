pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod journal;
pub mod mood;
pub mod task;

use chrono::NaiveDate;
use std::path::PathBuf;
use wellnest_core::{MemoryStore, Snapshot};

/// Per-invocation values shared by all commands.
pub struct Context {
    pub today: NaiveDate,
    pub hour: u32,
}

/// Store restored from the state snapshot, plus where to write it back.
pub struct StoreHandle {
    pub store: MemoryStore,
    path: PathBuf,
}

impl StoreHandle {
    pub fn open(ctx: &Context) -> Result<Self, Box<dyn std::error::Error>> {
        let path = Snapshot::path()?;
        let store = MemoryStore::open_at(&path, ctx.today)?;
        tracing::debug!(path = %path.display(), today = %ctx.today, "store opened");
        Ok(Self { store, path })
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.store.save_at(&self.path)?;
        Ok(())
    }
}
