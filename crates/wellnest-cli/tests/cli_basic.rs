//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own data directory.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const TODAY: &str = "2024-01-10";

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_wellnest-cli"))
        .env("WELLNEST_DATA_DIR", dir)
        .env_remove("WELLNEST_LOG")
        .args(["--today", TODAY])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("stdout is not JSON")
}

#[test]
fn test_task_list_starts_from_sample_data() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["task", "list"]);
    assert_eq!(code, 0, "Task list failed");

    let tasks = json(&stdout);
    let titles: Vec<_> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        titles,
        [
            "Finish project presentation",
            "Review quarterly reports",
            "Weekly grocery shopping"
        ]
    );
}

#[test]
fn test_task_create_persists() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &[
            "task", "create", "Book dentist", "--priority", "high", "--category", "Health",
            "--due", "2024-01-12", "--time", "09:30",
        ],
    );
    assert_eq!(code, 0, "Task create failed");
    assert!(stdout.starts_with("Task created:"));

    let (code, stdout, _) = run_cli(dir.path(), &["task", "list", "--category", "Health"]);
    assert_eq!(code, 0);
    let tasks = json(&stdout);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Book dentist");
    assert_eq!(tasks[0]["priority"], "high");
    assert_eq!(tasks[0]["completed"], false);
}

#[test]
fn test_task_create_rejects_blank_title() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["task", "create", "   "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_task_toggle_and_delete() {
    let dir = TempDir::new().unwrap();

    let (code, stdout, _) = run_cli(dir.path(), &["task", "toggle", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Task 1 marked done"));

    let (_, stdout, _) = run_cli(dir.path(), &["task", "list", "--completed", "true"]);
    assert_eq!(json(&stdout).as_array().unwrap().len(), 2);

    let (code, stdout, _) = run_cli(dir.path(), &["task", "delete", "2"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Task deleted: 2"));

    let (_, stdout, _) = run_cli(dir.path(), &["task", "delete", "2"]);
    assert!(stdout.contains("Task not found: 2"));
}

#[test]
fn test_task_list_grouped() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["task", "list", "--grouped"]);
    assert_eq!(code, 0);
    let groups = json(&stdout);
    assert_eq!(groups["high"][0]["id"], 1);
    assert_eq!(groups["medium"][0]["id"], 2);
    assert_eq!(groups["low"][0]["id"], 3);
}

#[test]
fn test_task_list_grouped_text_headings() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["task", "list", "--grouped", "--text"]);
    assert_eq!(code, 0);
    let high = stdout.find("High Priority").unwrap();
    let medium = stdout.find("Medium Priority").unwrap();
    let low = stdout.find("Low Priority").unwrap();
    assert!(high < medium && medium < low);
    assert!(stdout.contains("[x] 3  Weekly grocery shopping (Personal)"));

    let (code, _, _) = run_cli(dir.path(), &["task", "list", "--text"]);
    assert_ne!(code, 0, "--text requires --grouped");
}

#[test]
fn test_task_categories() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["task", "categories"]);
    assert_eq!(code, 0);
    let categories: Vec<_> = stdout.lines().collect();
    assert_eq!(categories, ["Work", "Personal", "Health", "Education"]);
}

#[test]
fn test_calendar_show_text() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["calendar", "show"]);
    assert_eq!(code, 0, "Calendar show failed");
    assert!(stdout.contains("January 2024"));
    assert!(stdout.contains("Sun"));
    assert!(stdout.contains("*10"));
}

#[test]
fn test_calendar_show_json_offset() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["calendar", "show", "--year", "2024", "--month", "1", "--offset", "-1", "--json"],
    );
    assert_eq!(code, 0);
    let grid = json(&stdout);
    assert_eq!(grid["anchor"]["first"], "2023-12-01");
    assert_eq!(grid["cells"].as_array().unwrap().len(), 42);
}

#[test]
fn test_calendar_rejects_bad_month() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["calendar", "show", "--month", "13"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("month must be between 1 and 12"));
}

#[test]
fn test_calendar_rejects_offset_past_date_range() {
    let dir = TempDir::new().unwrap();
    for offset in ["2147483647", "-2147483648", "10000000"] {
        let (code, stdout, stderr) = run_cli(dir.path(), &["calendar", "show", "--offset", offset]);
        assert_eq!(code, 1, "offset {offset} should fail");
        assert!(stdout.is_empty());
        assert!(stderr.contains("year out of range"));
    }
}

#[test]
fn test_mood_log_and_streak() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["mood", "log", "calm", "--intensity", "4"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("(4/5)"));

    let (code, stdout, _) = run_cli(dir.path(), &["mood", "week"]);
    assert_eq!(code, 0);
    let week = json(&stdout);
    let week = week.as_array().unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week[0]["day"], "Mon");

    let (code, stdout, _) = run_cli(dir.path(), &["mood", "streak"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().parse::<u32>().unwrap() >= 1);
}

#[test]
fn test_mood_log_rejects_intensity() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["mood", "log", "happy", "--intensity", "9"]);
    assert_eq!(code, 1);
}

#[test]
fn test_journal_add_and_summarize() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["journal", "add", "Lunch", "Enjoyed a calm walk. Felt grateful."],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("(6 words)"));
    let id = stdout
        .trim()
        .trim_start_matches("Entry saved: ")
        .split(' ')
        .next()
        .unwrap()
        .to_string();

    let (code, stdout, _) = run_cli(dir.path(), &["journal", "summarize", &id]);
    assert_eq!(code, 0, "Summarize failed");
    let summary = json(&stdout);
    assert_eq!(summary["points"][0], "Enjoyed a calm walk");
    assert_eq!(summary["sentiment"]["label"], "Very Positive");

    let (_, stdout, _) = run_cli(dir.path(), &["journal", "get", &id]);
    assert_eq!(json(&stdout)["ai_summary"][1], "Felt grateful");
}

#[test]
fn test_dashboard() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["dashboard"]);
    assert_eq!(code, 0, "Dashboard failed");
    let stats = json(&stdout);
    assert_eq!(stats["tasks_completed"], 1);
    assert_eq!(stats["tasks_pending"], 2);
    assert!(stats["greeting"].as_str().unwrap().starts_with("Good "));
}

#[test]
fn test_config_set_get() {
    let dir = TempDir::new().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "profile.display_name", "Sam"]);
    assert_eq!(code, 0, "Config set failed");

    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "profile.display_name"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Sam");

    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "profile.shoe_size"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("profile.shoe_size"));
}

#[test]
fn test_config_reset() {
    let dir = TempDir::new().unwrap();
    run_cli(dir.path(), &["config", "set", "summary.max_points", "5"]);
    let (code, _, _) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "summary.max_points"]);
    assert_eq!(stdout.trim(), "3");
}
