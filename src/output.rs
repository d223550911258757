//! Shared output formatting for taskflow CLI commands.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::query::{self, TaskCounts};
use crate::task::Task;

pub const SCHEMA_VERSION: &str = "taskflow.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    details: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            details: Vec::new(),
        }
    }

    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    pub fn push_detail(&mut self, value: impl Into<String>) {
        self.details.push(value.into());
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        println!("{}", format_human(human));
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    let hint = error_hint(err);
    if json {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            message: &'a str,
            code: i32,
            kind: &'static str,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody<'a>,
            #[serde(skip_serializing_if = "Option::is_none")]
            hint: Option<&'static str>,
        }

        let message = err.to_string();
        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                message: &message,
                code: err.exit_code(),
                kind: error_kind(err),
            },
            hint,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = Vec::new();
    lines.push(output.header.clone());

    if !output.summary.is_empty() {
        lines.push(String::new());
        for (key, value) in &output.summary {
            if value.is_empty() {
                lines.push(format!("- {key}"));
            } else {
                lines.push(format!("- {key}: {value}"));
            }
        }
    }

    if !output.details.is_empty() {
        lines.push(String::new());
        for item in &output.details {
            lines.push(item.clone());
        }
    }

    lines.join("\n")
}

/// One listing line for a task: checkbox, title, badges, due-date label.
pub fn format_task_line(task: &Task, today: NaiveDate) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{} {}  ({}, {})",
        checkbox, task.title, task.priority, task.category
    );
    if let Some(due) = task.due_date {
        line.push_str(&format!("  due {}", query::date_label(due, today)));
    }
    line
}

/// Multi-line detail block for `taskflow show`.
pub fn format_task_details(task: &Task, today: NaiveDate) -> HumanOutput {
    let mut human = HumanOutput::new(task.title.clone());
    human.push_summary("id", task.id.clone());
    human.push_summary(
        "status",
        if task.completed { "completed" } else { "pending" },
    );
    human.push_summary("priority", task.priority.to_string());
    human.push_summary("category", task.category.to_string());
    if let Some(due) = task.due_date {
        human.push_summary("due", query::date_label(due, today));
    }
    human.push_summary("created", task.created_at.to_rfc3339());
    human.push_summary("updated", task.updated_at.to_rfc3339());
    if !task.description.is_empty() {
        human.push_detail(task.description.clone());
    }
    human
}

/// Summary block for `taskflow stats`.
pub fn format_counts(counts: &TaskCounts) -> HumanOutput {
    let mut human = HumanOutput::new("Task stats");
    human.push_summary("total", counts.total.to_string());
    human.push_summary("completed", counts.completed.to_string());
    human.push_summary("pending", counts.pending.to_string());
    human.push_summary("overdue", counts.overdue.to_string());
    human
}

pub fn infer_command_name_from_args() -> String {
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        if arg.starts_with('-') {
            // Skip the value of flags that take one.
            if arg.as_str() == "--data" {
                args.next();
            }
            continue;
        }
        return arg;
    }

    "taskflow".to_string()
}

fn error_kind(err: &crate::error::Error) -> &'static str {
    match err.exit_code() {
        2 => "user_error",
        _ => "operation_failed",
    }
}

fn error_hint(err: &crate::error::Error) -> Option<&'static str> {
    use crate::error::Error;

    match err {
        Error::Validation(_) => Some("provide a non-empty title"),
        Error::NotFound(_) => Some("taskflow list --json shows task ids"),
        Error::Persistence(_) => Some("nothing was changed; retry the command"),
        Error::InvalidConfig(_) => Some("fix config.toml then retry"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Category, Priority, TaskDraft};
    use chrono::Utc;

    fn sample_task() -> Task {
        Task::from_draft(
            TaskDraft {
                title: "Write report".to_string(),
                priority: Priority::High,
                category: Category::Work,
                due_date: NaiveDate::from_ymd_opt(2025, 6, 9),
                ..TaskDraft::default()
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn task_line_shows_checkbox_badges_and_due_label() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let task = sample_task();

        let line = format_task_line(&task, today);
        assert!(line.starts_with("[ ] Write report"));
        assert!(line.contains("(high, work)"));
        assert!(line.contains("due Overdue (Jun 9)"));

        let done = task.toggled(Utc::now());
        assert!(format_task_line(&done, today).starts_with("[x]"));
    }

    #[test]
    fn human_output_renders_summary_and_details() {
        let mut human = HumanOutput::new("Created task");
        human.push_summary("id", "abc");
        human.push_summary("priority", "high");
        human.push_detail("some description");

        let text = format_human(&human);
        assert!(text.starts_with("Created task"));
        assert!(text.contains("- id: abc"));
        assert!(text.contains("some description"));
    }

    #[test]
    fn error_hints_cover_user_errors() {
        use crate::error::Error;
        assert!(error_hint(&Error::Validation("t".into())).is_some());
        assert!(error_hint(&Error::NotFound("x".into())).is_some());
        assert!(error_hint(&Error::Io(std::io::Error::other("boom"))).is_none());
    }
}
