//! Task store: the owned, authoritative in-memory task list.
//!
//! `TaskStore` is the only component that mutates the collection. Every
//! mutator builds the next snapshot first, persists it, and only then
//! commits it in memory; if persisting fails the previous snapshot stays in
//! place and the caller gets [`Error::Persistence`]. A failed validation or
//! an unknown id never touches the list at all.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::persist::Backend;
use crate::task::{Task, TaskDraft, TaskPatch};

pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Box<dyn Backend>,
}

impl TaskStore {
    /// Open a store over the given backend, restoring any saved tasks.
    pub fn open(backend: Box<dyn Backend>) -> Result<Self> {
        let tasks = backend.load()?;
        tracing::debug!(count = tasks.len(), "loaded task store");
        Ok(Self { tasks, backend })
    }

    /// The current task list, newest-first insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Create a task from a draft and persist the new list.
    pub fn create(&mut self, draft: TaskDraft) -> Result<Task> {
        let task = Task::from_draft(draft, Utc::now())?;

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(task.clone());
        next.extend(self.tasks.iter().cloned());

        self.commit(next)?;
        Ok(task)
    }

    /// Merge a patch onto an existing task and persist the new list.
    pub fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<Task> {
        let index = self.index_of(id)?;
        let updated = self.tasks[index].apply_patch(patch, Utc::now())?;

        let mut next = self.tasks.clone();
        next[index] = updated.clone();

        self.commit(next)?;
        Ok(updated)
    }

    /// Flip a task's completed flag and persist the new list.
    pub fn toggle_complete(&mut self, id: &str) -> Result<Task> {
        let index = self.index_of(id)?;
        let toggled = self.tasks[index].toggled(Utc::now());

        let mut next = self.tasks.clone();
        next[index] = toggled.clone();

        self.commit(next)?;
        Ok(toggled)
    }

    /// Remove a task and persist the new list.
    pub fn delete(&mut self, id: &str) -> Result<Task> {
        let index = self.index_of(id)?;

        let mut next = self.tasks.clone();
        let removed = next.remove(index);

        self.commit(next)?;
        Ok(removed)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Persist a snapshot and commit it in memory. On failure the previous
    /// snapshot remains current (optimistic mutation with rollback).
    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        self.backend.save(&next)?;
        self.tasks = next;
        Ok(())
    }
}
