//! Task model for taskflow.
//!
//! A [`Task`] is the sole entity: a to-do item with priority, category, and
//! optional due-date metadata. [`TaskDraft`] and [`TaskPatch`] are the only
//! ways to feed writable fields into the store, which keeps server-managed
//! fields (`id`, `created_at`) out of reach of callers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Priority of a task. Ordering is by urgency: `High` sorts first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used by the view ordering (high beats low).
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(Error::InvalidArgument(format!(
                "invalid priority '{}': must be low, medium, or high",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Work,
    Personal,
    Health,
    Learning,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Health => "health",
            Category::Learning => "learning",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "health" => Ok(Category::Health),
            "learning" => Ok(Category::Learning),
            _ => Err(Error::InvalidArgument(format!(
                "invalid category '{}': must be general, work, personal, health, or learning",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do item.
///
/// Field names serialize in camelCase (`dueDate`, `createdAt`, `updatedAt`)
/// so the data file matches the shape the remote CRUD contract uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a task. Everything except the title is defaulted.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    pub due_date: Option<NaiveDate>,
}

/// Writable-field patch for updating a task.
///
/// `due_date` is doubly optional: `None` leaves the date alone,
/// `Some(None)` clears it, `Some(Some(date))` sets it.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub due_date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
    }
}

impl Task {
    /// Build a new task from a draft, assigning id and timestamps.
    ///
    /// Fails with [`Error::Validation`] when the trimmed title is empty.
    pub fn from_draft(draft: TaskDraft, now: DateTime<Utc>) -> Result<Self> {
        let title = validate_title(&draft.title)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title,
            description: draft.description,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Return a copy with the patch merged and `updated_at` refreshed.
    pub fn apply_patch(&self, patch: &TaskPatch, now: DateTime<Utc>) -> Result<Self> {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title = validate_title(title)?;
        }
        if let Some(description) = &patch.description {
            next.description = description.clone();
        }
        if let Some(priority) = patch.priority {
            next.priority = priority;
        }
        if let Some(category) = patch.category {
            next.category = category;
        }
        if let Some(due_date) = patch.due_date {
            next.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            next.completed = completed;
        }
        next.updated_at = now;
        Ok(next)
    }

    /// Return a copy with `completed` flipped and `updated_at` refreshed.
    pub fn toggled(&self, now: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.completed = !next.completed;
        next.updated_at = now;
        next
    }
}

/// Trim and validate a task title.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("task title cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}
