//! taskflow list command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::open_backend;
use crate::error::Result;
use crate::output::{emit_success, format_task_line, HumanOutput, OutputOptions};
use crate::persist::{Backend, FilterSpec};
use crate::query::{self, StatusFilter};
use crate::task::Task;

pub struct ListOptions {
    pub filter: Option<String>,
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub data: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ListData {
    total: usize,
    filter: StatusFilter,
    tasks: Vec<Task>,
}

pub fn run(opts: ListOptions) -> Result<()> {
    let (config, backend) = open_backend(opts.data.as_deref())?;

    let filter: StatusFilter = match &opts.filter {
        Some(raw) => raw.parse()?,
        None => config.default_filter()?,
    };

    let page = backend.list(&FilterSpec {
        filter,
        search: opts.search.clone().unwrap_or_default(),
        limit: Some(opts.limit.unwrap_or(config.list.limit)),
        offset: opts.offset.unwrap_or(0),
    })?;

    let today = query::local_today();
    let mut human = HumanOutput::new(match &opts.search {
        Some(search) => format!("Tasks ({filter}, search '{search}'): {}", page.total),
        None => format!("Tasks ({filter}): {}", page.total),
    });
    if page.tasks.is_empty() {
        human.push_detail("No matching tasks.");
    }
    for task in &page.tasks {
        human.push_detail(format_task_line(task, today));
    }

    let data = ListData {
        total: page.total,
        filter,
        tasks: page.tasks,
    };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "list",
        &data,
        Some(&human),
    )
}
