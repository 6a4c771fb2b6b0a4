//! Local task cache
//!
//! Holds the client's copy of the task collection so dependent views update
//! without a full re-fetch. Every read-modify-write runs under the write lock,
//! so concurrent add completions cannot lose entries. The backend remains the
//! system of record; this cache is never authoritative.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::model::Task;

/// Controls which mutation paths write back into the local cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Only successful adds merge into the cache
    #[default]
    AddOnly,
    /// Updates replace the cached record and deletes evict it
    WriteThrough,
}

/// Shared, clonable handle to the locally cached task collection
#[derive(Debug, Clone, Default)]
pub struct TaskCache {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the cached collection
    pub async fn insert(&self, task: Task) {
        let mut tasks = self.tasks.write().await;
        debug!(id = %task.id, "merging task into local cache");
        tasks.push(task);
    }

    /// Replace the cached record with the same id, if present
    pub async fn replace(&self, task: &Task) -> bool {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task.clone();
                true
            }
            None => false,
        }
    }

    /// Remove the cached record with the given id
    pub async fn remove(&self, id: Uuid) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let index = tasks.iter().position(|t| t.id == id)?;
        Some(tasks.remove(index))
    }

    /// Snapshot of the cached collection
    pub async fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Number of cached tasks
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    /// Whether the cache holds no tasks
    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}
