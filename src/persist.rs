//! Persistence collaborator for taskflow.
//!
//! [`Backend`] is the seam between the core and whatever stores the tasks.
//! Two contracts live on it:
//! - `load`/`save`: the whole-list contract the [`TaskStore`](crate::store)
//!   uses after each mutation.
//! - `list`/`get_by_id`/`create`/`update`/`delete`/`delete_many`: the CRUD
//!   contract a remote task service exposes, which the local JSON-file
//!   variant also satisfies so either backend swaps in transparently.
//!
//! [`JsonFileBackend`] is the local variant: one JSON array in a file,
//! written atomically. A file that fails to parse is treated as an empty
//! store (logged, never fatal).

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::query::{self, StatusFilter};
use crate::storage;
use crate::task::{Task, TaskDraft, TaskPatch};

/// Recognized listing options for [`Backend::list`].
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Page size; `None` means unpaged.
    pub limit: Option<usize>,
    /// Number of matches to skip.
    pub offset: usize,
    /// Case-insensitive substring search on title/description.
    pub search: String,
    /// Status filter applied before the search.
    pub filter: StatusFilter,
}

/// One page of listed tasks. `total` counts matches before paging.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub tasks: Vec<Task>,
    pub total: usize,
}

/// Persistence contract for the task collection.
pub trait Backend {
    /// Restore the full task list; empty when nothing was saved.
    fn load(&self) -> Result<Vec<Task>>;

    /// Persist the full task list.
    fn save(&self, tasks: &[Task]) -> Result<()>;

    /// Filtered, searched, view-ordered page of tasks.
    fn list(&self, spec: &FilterSpec) -> Result<ListPage>;

    /// Fetch a single task. Fails with [`Error::NotFound`] if absent.
    fn get_by_id(&self, id: &str) -> Result<Task>;

    /// Create a task from writable fields; id and timestamps are assigned
    /// by the backend.
    fn create(&self, draft: TaskDraft) -> Result<Task>;

    /// Merge writable fields onto an existing task.
    fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task>;

    /// Remove a task. Returns whether it existed.
    fn delete(&self, id: &str) -> Result<bool>;

    /// Remove several tasks; unknown ids are skipped. Returns the count
    /// actually removed.
    fn delete_many(&self, ids: &[String]) -> Result<usize>;
}

/// Local persistence: a single JSON file holding the task array.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        match storage::read_json::<Vec<Task>>(&self.path) {
            Ok(tasks) => Ok(tasks),
            // Corrupted data file: recover as an empty store rather than
            // wedging every command.
            Err(Error::Json(err)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "task data file is corrupt, starting from an empty store"
                );
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        storage::write_json(&self.path, &tasks)
            .map_err(|err| Error::Persistence(err.to_string()))
    }

    fn list(&self, spec: &FilterSpec) -> Result<ListPage> {
        let tasks = self.load()?;
        let matched = query::view(&tasks, spec.filter, &spec.search, query::local_today());
        let total = matched.len();

        let page: Vec<Task> = matched
            .into_iter()
            .skip(spec.offset)
            .take(spec.limit.unwrap_or(usize::MAX))
            .collect();

        Ok(ListPage { tasks: page, total })
    }

    fn get_by_id(&self, id: &str) -> Result<Task> {
        let tasks = self.load()?;
        tasks
            .into_iter()
            .find(|task| task.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn create(&self, draft: TaskDraft) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = Task::from_draft(draft, Utc::now())?;
        tasks.insert(0, task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        let mut tasks = self.load()?;
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let updated = tasks[index].apply_patch(patch, Utc::now())?;
        tasks[index] = updated.clone();
        self.save(&tasks)?;
        Ok(updated)
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.save(&tasks)?;
        Ok(true)
    }

    fn delete_many(&self, ids: &[String]) -> Result<usize> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|task| !ids.contains(&task.id));
        let removed = before - tasks.len();
        if removed > 0 {
            self.save(&tasks)?;
        }
        Ok(removed)
    }
}
