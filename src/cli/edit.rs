//! taskflow edit command implementation.

use std::path::PathBuf;

use crate::cli::{open_store, parse_due};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Category, Priority, TaskPatch};

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due: Option<String>,
    pub no_due: bool,
    pub data: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: EditOptions) -> Result<()> {
    let due_date = if opts.no_due {
        Some(None)
    } else {
        parse_due(opts.due.as_deref())?.map(Some)
    };

    let patch = TaskPatch {
        title: opts.title,
        description: opts.description,
        priority: opts
            .priority
            .as_deref()
            .map(|raw| raw.parse::<Priority>())
            .transpose()?,
        category: opts
            .category
            .as_deref()
            .map(|raw| raw.parse::<Category>())
            .transpose()?,
        due_date,
        completed: None,
    };

    if patch.is_empty() {
        return Err(Error::InvalidArgument(
            "nothing to edit: pass at least one field".to_string(),
        ));
    }

    let (_config, mut store) = open_store(opts.data.as_deref())?;
    let task = store.update(&opts.id, &patch)?;

    let mut human = HumanOutput::new(format!("Updated task: {}", task.title));
    human.push_summary("id", task.id.clone());
    human.push_summary("priority", task.priority.to_string());
    human.push_summary("category", task.category.to_string());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "edit",
        &task,
        Some(&human),
    )
}
