//! Client library for a partition-scoped task tracker backed by a managed
//! GraphQL gateway.
//!
//! This crate contains the glue layer between a UI and the backend:
//! - Task mutation facade (add / update / delete)
//! - Optimistic local task cache
//! - GraphQL transport and mutation documents

pub mod config;
pub mod error;
pub mod graphql;
pub mod id;
pub mod project;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
