//! Record identifier generation
//!
//! Ids are minted client-side before the creation request is sent. The
//! generator is an injectable dependency so tests can produce known ids.

use uuid::Uuid;

/// Source of unique record identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce a new globally unique id
    fn generate(&self) -> Uuid;
}

/// Default generator backed by random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
