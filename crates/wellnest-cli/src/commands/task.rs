//! Task management commands for CLI.

use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use std::fmt::Write as _;
use wellnest_core::task::{CATEGORIES, DEFAULT_CATEGORY};
use wellnest_core::{
    group_by_priority, NewTask, Priority, PriorityGroups, TaskFilter, WellnessStore,
};

use super::{Context, StoreHandle};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Due time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        /// Priority: high, medium or low
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Category (Work, Personal, Health, Education, ...)
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
    },
    /// List tasks
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Filter by priority
        #[arg(long)]
        priority: Option<Priority>,
        /// Filter by completion status
        #[arg(long)]
        completed: Option<bool>,
        /// Group by priority (high, medium, low)
        #[arg(long)]
        grouped: bool,
        /// Print grouped sections as text instead of JSON
        #[arg(long, requires = "grouped")]
        text: bool,
    },
    /// Suggested categories
    Categories,
    /// Get task details
    Get {
        /// Task ID
        id: u64,
    },
    /// Flip a task between done and not done
    Toggle {
        /// Task ID
        id: u64,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
}

fn render_groups(groups: &PriorityGroups<'_>) -> String {
    let mut out = String::new();
    for (priority, tasks) in groups.iter() {
        let _ = writeln!(out, "{}", priority.heading());
        for task in tasks {
            let mark = if task.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "  [{mark}] {}  {} ({})", task.id, task.title, task.category);
        }
    }
    out
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

pub fn run(ctx: &Context, action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut handle = StoreHandle::open(ctx)?;

    match action {
        TaskAction::Create {
            title,
            description,
            due,
            time,
            priority,
            category,
        } => {
            let new = NewTask {
                title,
                description,
                due_date: due,
                due_time: time,
                priority,
                category,
            };
            new.validate()?;
            let id = handle.store.create_task(new);
            handle.save()?;
            println!("Task created: {id}");
            if let Some(task) = handle.store.task(id) {
                println!("{}", serde_json::to_string_pretty(task)?);
            }
        }
        TaskAction::List {
            category,
            priority,
            completed,
            grouped,
            text,
        } => {
            let filter = TaskFilter {
                category,
                priority,
                completed,
            };
            let filtered: Vec<_> = filter
                .apply(handle.store.tasks())
                .into_iter()
                .cloned()
                .collect();
            if grouped {
                let groups = group_by_priority(&filtered);
                if text {
                    print!("{}", render_groups(&groups));
                } else {
                    println!("{}", serde_json::to_string_pretty(&groups)?);
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            }
        }
        TaskAction::Categories => {
            for category in CATEGORIES {
                println!("{category}");
            }
        }
        TaskAction::Get { id } => match handle.store.task(id) {
            Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Toggle { id } => {
            if handle.store.toggle_task(id) {
                handle.save()?;
                let done = handle.store.task(id).map_or(false, |t| t.completed);
                println!("Task {id} marked {}", if done { "done" } else { "not done" });
            } else {
                println!("Task not found: {id}");
            }
        }
        TaskAction::Delete { id } => {
            if handle.store.delete_task(id) {
                handle.save()?;
                println!("Task deleted: {id}");
            } else {
                println!("Task not found: {id}");
            }
        }
    }
    Ok(())
}
