//! taskflow done command implementation.

use std::path::PathBuf;

use crate::cli::open_store;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct DoneOptions {
    pub id: String,
    pub data: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: DoneOptions) -> Result<()> {
    let (_config, mut store) = open_store(opts.data.as_deref())?;
    let task = store.toggle_complete(&opts.id)?;

    let header = if task.completed {
        format!("Completed task: {}", task.title)
    } else {
        format!("Reopened task: {}", task.title)
    };
    let mut human = HumanOutput::new(header);
    human.push_summary("id", task.id.clone());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "done",
        &task,
        Some(&human),
    )
}
