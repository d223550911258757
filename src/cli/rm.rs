//! taskflow rm command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{open_backend, open_store};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::persist::Backend;

pub struct RmOptions {
    pub ids: Vec<String>,
    pub data: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct RmData {
    deleted: usize,
}

pub fn run(opts: RmOptions) -> Result<()> {
    // A single id goes through the store so an unknown id is an error;
    // bulk removal uses the backend's delete_many, which skips unknowns.
    let deleted = if let [id] = opts.ids.as_slice() {
        let (_config, mut store) = open_store(opts.data.as_deref())?;
        store.delete(id)?;
        1
    } else {
        let (_config, backend) = open_backend(opts.data.as_deref())?;
        backend.delete_many(&opts.ids)?
    };

    let mut human = HumanOutput::new(format!(
        "Deleted {} task{}",
        deleted,
        if deleted == 1 { "" } else { "s" }
    ));
    if deleted < opts.ids.len() {
        human.push_detail(format!(
            "{} id(s) were not found and were skipped",
            opts.ids.len() - deleted
        ));
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "rm",
        &RmData { deleted },
        Some(&human),
    )
}
