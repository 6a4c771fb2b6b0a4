//! Error types for the client library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Task has no id")]
    MissingTaskId,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend rejected the request: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
