//! Command-line interface for taskflow
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::persist::JsonFileBackend;
use crate::storage;
use crate::store::TaskStore;

mod add;
mod done;
mod edit;
mod list;
mod rm;
mod show;
mod stats;

/// taskflow - personal task manager
///
/// Create, organize, and track tasks with priorities, categories, and due
/// dates. Tasks live in a local JSON file; everything works offline.
#[derive(Parser, Debug)]
#[command(name = "taskflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task data file (defaults to the platform data dir)
    #[arg(long, global = true, env = "TASKFLOW_DATA")]
    pub data: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Task description
        #[arg(short, long)]
        description: Option<String>,

        /// Priority: low, medium, high
        #[arg(short, long)]
        priority: Option<String>,

        /// Category: general, work, personal, health, learning
        #[arg(short, long)]
        category: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },

    /// List tasks
    List {
        /// Status filter: all, pending, completed, overdue
        #[arg(short, long)]
        filter: Option<String>,

        /// Search title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum tasks to show
        #[arg(long)]
        limit: Option<usize>,

        /// Number of tasks to skip
        #[arg(long)]
        offset: Option<usize>,
    },

    /// Show one task in detail
    Show {
        /// Task id
        id: String,
    },

    /// Edit a task
    Edit {
        /// Task id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New priority: low, medium, high
        #[arg(short, long)]
        priority: Option<String>,

        /// New category: general, work, personal, health, learning
        #[arg(short, long)]
        category: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "no_due")]
        due: Option<String>,

        /// Clear the due date
        #[arg(long)]
        no_due: bool,
    },

    /// Toggle a task between pending and completed
    Done {
        /// Task id
        id: String,
    },

    /// Remove tasks
    Rm {
        /// Task ids to remove
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show aggregate task counts
    Stats,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add {
                title,
                description,
                priority,
                category,
                due,
            } => add::run(add::AddOptions {
                title,
                description,
                priority,
                category,
                due,
                data: self.data,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List {
                filter,
                search,
                limit,
                offset,
            } => list::run(list::ListOptions {
                filter,
                search,
                limit,
                offset,
                data: self.data,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Show { id } => show::run(show::ShowOptions {
                id,
                data: self.data,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Edit {
                id,
                title,
                description,
                priority,
                category,
                due,
                no_due,
            } => edit::run(edit::EditOptions {
                id,
                title,
                description,
                priority,
                category,
                due,
                no_due,
                data: self.data,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Done { id } => done::run(done::DoneOptions {
                id,
                data: self.data,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { ids } => rm::run(rm::RmOptions {
                ids,
                data: self.data,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Stats => stats::run(stats::StatsOptions {
                data: self.data,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// Load config and resolve the backend for a command invocation.
pub(crate) fn open_backend(data: Option<&Path>) -> Result<(Config, JsonFileBackend)> {
    let config_path = storage::default_config_file()?;
    let config = Config::load_or_default(&config_path);
    let data_file = storage::resolve_data_file(data, &config)?;
    Ok((config, JsonFileBackend::new(data_file)))
}

/// Open the task store for mutating commands.
pub(crate) fn open_store(data: Option<&Path>) -> Result<(Config, TaskStore)> {
    let (config, backend) = open_backend(data)?;
    let store = TaskStore::open(Box::new(backend))?;
    Ok((config, store))
}

/// Parse an optional YYYY-MM-DD argument.
pub(crate) fn parse_due(due: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    due.map(|raw| {
        chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            crate::error::Error::InvalidArgument(format!(
                "invalid due date '{}': expected YYYY-MM-DD",
                raw
            ))
        })
    })
    .transpose()
}
