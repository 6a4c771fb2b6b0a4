//! Task management
//!
//! Model types, the local task cache, and the mutation facade.

mod cache;
mod model;
mod mutations;

pub use cache::{CachePolicy, TaskCache};
pub use model::{Task, TaskDraft, TaskStatus, TaskUpdate};
pub use mutations::TaskMutations;
