//! JSON snapshot of a [`MemoryStore`], so state survives between CLI runs.
//!
//! Stored at `~/.config/wellnest/state.json`. Writes go through a temporary
//! file and a rename.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use super::memory::MemoryStore;
use crate::calendar::EventIndex;
use crate::error::{CoreError, Result};
use crate::journal::JournalEntry;
use crate::mood::MoodLog;
use crate::task::Task;

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
    #[serde(default)]
    pub moods: Vec<MoodLog>,
    #[serde(default)]
    pub events: EventIndex,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            tasks: Vec::new(),
            journal: Vec::new(),
            moods: Vec::new(),
            events: EventIndex::new(),
        }
    }
}

impl Snapshot {
    /// Default snapshot location.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("state.json"))
    }

    /// Read the snapshot at `path`; `None` if there is none yet.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(CoreError::Custom(format!(
                "snapshot {} has version {}, newest supported is {SNAPSHOT_VERSION}",
                path.display(),
                snapshot.version
            )));
        }
        Ok(Some(snapshot))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, path)?;
        tracing::debug!(path = %path.display(), tasks = self.tasks.len(), "snapshot saved");
        Ok(())
    }
}

impl MemoryStore {
    /// Restore from the snapshot at `path`, or start from the sample data
    /// when no snapshot exists.
    pub fn open_at(path: &Path, today: NaiveDate) -> Result<Self> {
        match Snapshot::load_from(path)? {
            Some(snapshot) => Ok(Self::from_snapshot(snapshot)),
            None => {
                tracing::info!(path = %path.display(), "no snapshot found, seeding sample data");
                Ok(Self::seeded(today))
            }
        }
    }

    pub fn save_at(&self, path: &Path) -> Result<()> {
        self.to_snapshot().save_to(path)
    }
}
