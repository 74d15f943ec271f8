//! Task types for the planner.
//!
//! Tasks live entirely in the store; ids are time-derived and unique within
//! a store. Creation accepts the form input as-is, validation is an opt-in
//! step performed by callers.

pub mod grouping;

pub use grouping::{group_by_priority, PriorityGroups};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Task identifier.
pub type TaskId = u64;

/// Category assigned to new tasks when none is chosen.
pub const DEFAULT_CATEGORY: &str = "Work";

/// Categories offered by the creation form.
pub const CATEGORIES: [&str; 4] = ["Work", "Personal", "Health", "Education"];

/// Task priority.
///
/// Ordering follows display order: `High < Medium < Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Order in which priority sections are rendered.
    pub const DISPLAY_ORDER: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Section heading, e.g. "High Priority".
    pub fn heading(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(ValidationError::InvalidValue {
                field: "priority".to_string(),
                message: format!("expected high, medium or low, got '{other}'"),
            }),
        }
    }
}

/// A planner task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub priority: Priority,
    pub category: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Materialize a form submission under `id`. New tasks start incomplete.
    pub fn from_new(id: TaskId, new: NewTask) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            due_date: new.due_date,
            due_time: new.due_time,
            priority: new.priority,
            category: new.category,
            completed: false,
        }
    }

    /// Due on `date`, or carries no due date at all.
    pub fn is_due_on_or_undated(&self, date: NaiveDate) -> bool {
        self.due_date.map_or(true, |due| due == date)
    }
}

/// Task creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for NewTask {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: None,
            due_time: None,
            priority: Priority::default(),
            category: default_category(),
        }
    }
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn due(mut self, date: NaiveDate, time: Option<NaiveTime>) -> Self {
        self.due_date = Some(date);
        self.due_time = time;
        self
    }

    /// Reject forms without a title.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "title".to_string(),
            });
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "category".to_string(),
            });
        }
        Ok(())
    }
}

/// Optional narrowing applied to a task list. Empty filter matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(ref category) = self.category {
            if !task.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        true
    }

    /// Matching tasks in their original order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}

/// Issues monotonically increasing, time-derived task ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: TaskId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a clock reading of `now_ms` milliseconds. Never repeats
    /// and never goes backwards, even if the clock does.
    pub fn next(&mut self, now_ms: u64) -> TaskId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Account for an id issued elsewhere (e.g. loaded from a snapshot).
    pub fn observe(&mut self, id: TaskId) {
        self.last = self.last.max(id);
    }
}
