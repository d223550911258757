//! taskflow stats command implementation.

use std::path::PathBuf;

use crate::cli::open_store;
use crate::error::Result;
use crate::output::{emit_success, format_counts, OutputOptions};
use crate::query;

pub struct StatsOptions {
    pub data: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: StatsOptions) -> Result<()> {
    let (_config, store) = open_store(opts.data.as_deref())?;

    // Counts always derive from the unfiltered store.
    let counts = query::counts(store.tasks(), query::local_today());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "stats",
        &counts,
        Some(&format_counts(&counts)),
    )
}
