//! taskflow add command implementation.

use std::path::PathBuf;

use crate::cli::{open_store, parse_due};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::query;
use crate::task::{Category, Priority, TaskDraft};

pub struct AddOptions {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due: Option<String>,
    pub data: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let (config, mut store) = open_store(opts.data.as_deref())?;

    let priority: Priority = match &opts.priority {
        Some(raw) => raw.parse()?,
        None => config.default_priority()?,
    };
    let category: Category = match &opts.category {
        Some(raw) => raw.parse()?,
        None => config.default_category()?,
    };
    let due_date = parse_due(opts.due.as_deref())?;

    let task = store.create(TaskDraft {
        title: opts.title,
        description: opts.description.unwrap_or_default(),
        priority,
        category,
        due_date,
    })?;

    let mut human = HumanOutput::new(format!("Created task: {}", task.title));
    human.push_summary("id", task.id.clone());
    human.push_summary("priority", task.priority.to_string());
    human.push_summary("category", task.category.to_string());
    if let Some(due) = task.due_date {
        human.push_summary("due", query::date_label(due, query::local_today()));
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "add",
        &task,
        Some(&human),
    )
}
