//! taskflow - Personal Task Manager Library
//!
//! This library provides the core functionality for the taskflow CLI tool:
//! a to-do list with priorities, categories, and due dates, backed by a
//! local JSON data file.
//!
//! # Core Concepts
//!
//! - **Task Store**: the owned, authoritative in-memory task list
//! - **Mutators**: create, update, toggle-complete, and delete, each
//!   persisting a new snapshot (with rollback if persistence fails)
//! - **Query Engine**: pure filter/search/order derivation plus counts and
//!   due-date labels
//! - **Persistence Backend**: a swappable CRUD contract; the local variant
//!   is a single atomically-written JSON file
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `config.toml`
//! - `error`: error types and result aliases
//! - `task`: the task model and its input types
//! - `store`: task store and mutators
//! - `query`: view derivation, counts, and date labels
//! - `persist`: persistence backend trait and the JSON-file backend
//! - `storage`: data/config path resolution and atomic file IO
//! - `output`: shared human/JSON output formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod persist;
pub mod query;
pub mod storage;
pub mod store;
pub mod task;

pub use error::{Error, Result};
