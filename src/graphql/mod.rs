//! GraphQL transport and operation documents

mod client;
pub mod documents;

pub use client::GraphqlClient;
