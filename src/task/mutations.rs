//! Task mutation facade
//!
//! One asynchronous operation per backend mutation. Each call is a single
//! stateless request/response round trip; there are no retries and no
//! ordering guarantee between operations in flight at the same time.

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::Error;
use crate::graphql::documents::{
    AddTaskData, AddTaskVariables, DeleteTaskData, GetTaskData, TaskIdVariables, UpdateTaskData,
    UpdateTaskVariables, ADD_TASK, DELETE_TASK, GET_TASK, UPDATE_TASK,
};
use crate::graphql::GraphqlClient;
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::project::Project;
use crate::Result;

use super::cache::{CachePolicy, TaskCache};
use super::model::{Task, TaskDraft, TaskUpdate};

/// Facade over the add/update/delete task mutations for one project
pub struct TaskMutations {
    client: GraphqlClient,
    project: Project,
    cache: TaskCache,
    ids: Arc<dyn IdGenerator>,
    policy: CachePolicy,
}

impl TaskMutations {
    /// Create a facade scoped to the given project
    pub fn new(client: GraphqlClient, project: Project) -> Self {
        Self {
            client,
            project,
            cache: TaskCache::new(),
            ids: Arc::new(UuidIdGenerator),
            policy: CachePolicy::default(),
        }
    }

    /// Inject the id generator
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Share an existing cache instance
    pub fn with_cache(mut self, cache: TaskCache) -> Self {
        self.cache = cache;
        self
    }

    /// Set the cache write-back policy
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The locally cached task collection
    pub fn cache(&self) -> &TaskCache {
        &self.cache
    }

    /// The project this facade is scoped to
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Create a task from a partial draft
    ///
    /// Mints the id client-side, stamps the project's partition, and defaults
    /// `status` to `Open`. On success the backend-echoed record is merged into
    /// the local cache and returned.
    pub async fn add_task(&self, draft: TaskDraft) -> Result<Task> {
        let record = Task {
            id: self.ids.generate(),
            partition: self.project.partition.clone(),
            name: draft.name,
            status: draft.status.unwrap_or_default(),
        };
        debug!(id = %record.id, partition = %record.partition, "adding task");

        let data: AddTaskData = self
            .client
            .execute(ADD_TASK, &AddTaskVariables { task: record })
            .await?;
        let added = data
            .added_task
            .ok_or_else(|| Error::Backend("addedTask missing from response".to_string()))?;

        self.cache.insert(added.clone()).await;
        Ok(added)
    }

    /// Apply a partial patch to an existing task
    pub async fn update_task(&self, task: &Task, updates: TaskUpdate) -> Result<Task> {
        if task.id.is_nil() {
            return Err(Error::MissingTaskId);
        }
        debug!(id = %task.id, "updating task");

        let data: UpdateTaskData = self
            .client
            .execute(
                UPDATE_TASK,
                &UpdateTaskVariables {
                    task_id: task.id,
                    updates,
                },
            )
            .await?;
        let updated = data
            .updated_task
            .ok_or_else(|| Error::TaskNotFound(task.id.to_string()))?;

        if self.policy == CachePolicy::WriteThrough {
            self.cache.replace(&updated).await;
        }
        Ok(updated)
    }

    /// Delete an existing task, returning its pre-deletion snapshot
    pub async fn delete_task(&self, task: &Task) -> Result<Task> {
        if task.id.is_nil() {
            return Err(Error::MissingTaskId);
        }
        debug!(id = %task.id, "deleting task");

        let data: DeleteTaskData = self
            .client
            .execute(DELETE_TASK, &TaskIdVariables { task_id: task.id })
            .await?;
        let deleted = data
            .deleted_task
            .ok_or_else(|| Error::TaskNotFound(task.id.to_string()))?;

        if self.policy == CachePolicy::WriteThrough {
            self.cache.remove(deleted.id).await;
        }
        Ok(deleted)
    }

    /// Look up a single task by id
    pub async fn find_task(&self, id: Uuid) -> Result<Option<Task>> {
        debug!(id = %id, "fetching task");

        let data: GetTaskData = self
            .client
            .execute(GET_TASK, &TaskIdVariables { task_id: id })
            .await?;
        Ok(data.task)
    }
}
