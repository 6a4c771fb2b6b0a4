//! Project model definitions

use serde::{Deserialize, Serialize};

/// A Project scopes tasks to a tenant.
///
/// The project owns the partition key that is attached to every task created
/// under it. The backend enforces partition-scoped access control; this client
/// only forwards the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Human-readable project name
    pub name: String,

    /// Tenant-scoping key stamped onto every created task
    pub partition: String,
}

impl Project {
    /// Create a new project context
    pub fn new(name: impl Into<String>, partition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partition: partition.into(),
        }
    }
}
