//! Task model definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task status as presented in the UI
///
/// Serialized as the exact variant name, matching the backend enum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    InProgress,
    Complete,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// A task record as stored by the backend
///
/// `id` and `partition` are assigned exactly once at creation and never
/// reassigned. The wire representation uses the backend's `_id` and
/// `_partition` field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[serde(rename = "_partition")]
    pub partition: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub status: TaskStatus,
}

/// Partial input for creating a task
///
/// Any omitted field falls back to its default: `status` becomes `Open`,
/// `name` is left unset.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub name: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the task name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Partial patch applied to an existing task
///
/// `None` fields are omitted from the serialized patch and left untouched by
/// the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the task name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}
