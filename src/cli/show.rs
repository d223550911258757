//! taskflow show command implementation.

use std::path::PathBuf;

use crate::cli::open_backend;
use crate::error::Result;
use crate::output::{emit_success, format_task_details, OutputOptions};
use crate::persist::Backend;
use crate::query;

pub struct ShowOptions {
    pub id: String,
    pub data: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: ShowOptions) -> Result<()> {
    let (_config, backend) = open_backend(opts.data.as_deref())?;
    let task = backend.get_by_id(&opts.id)?;

    let human = format_task_details(&task, query::local_today());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "show",
        &task,
        Some(&human),
    )
}
