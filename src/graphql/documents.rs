//! GraphQL operation documents and their typed variables/result shapes
//!
//! Each document aliases its mutation field and returns the full task field
//! set, so every operation resolves to the canonical post-operation record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::{Task, TaskUpdate};

/// Creates one task from a full insert record
pub const ADD_TASK: &str = r#"
mutation AddTask($task: TaskInsertInput!) {
  addedTask: insertOneTask(data: $task) {
    _id
    _partition
    name
    status
  }
}"#;

/// Applies a partial field patch to the task with the given id
pub const UPDATE_TASK: &str = r#"
mutation UpdateTask($taskId: ObjectId!, $updates: TaskUpdateInput!) {
  updatedTask: updateOneTask(query: { _id: $taskId }, set: $updates) {
    _id
    _partition
    name
    status
  }
}"#;

/// Deletes the task with the given id, returning its last state
pub const DELETE_TASK: &str = r#"
mutation DeleteTask($taskId: ObjectId!) {
  deletedTask: deleteOneTask(query: { _id: $taskId }) {
    _id
    _partition
    name
    status
  }
}"#;

/// Looks up a single task by id
pub const GET_TASK: &str = r#"
query GetTask($taskId: ObjectId!) {
  task(query: { _id: $taskId }) {
    _id
    _partition
    name
    status
  }
}"#;

#[derive(Debug, Serialize)]
pub struct AddTaskVariables {
    pub task: Task,
}

#[derive(Debug, Serialize)]
pub struct UpdateTaskVariables {
    #[serde(rename = "taskId")]
    pub task_id: Uuid,
    pub updates: TaskUpdate,
}

#[derive(Debug, Serialize)]
pub struct TaskIdVariables {
    #[serde(rename = "taskId")]
    pub task_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskData {
    #[serde(rename = "addedTask")]
    pub added_task: Option<Task>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskData {
    #[serde(rename = "updatedTask")]
    pub updated_task: Option<Task>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTaskData {
    #[serde(rename = "deletedTask")]
    pub deleted_task: Option<Task>,
}

#[derive(Debug, Deserialize)]
pub struct GetTaskData {
    pub task: Option<Task>,
}
