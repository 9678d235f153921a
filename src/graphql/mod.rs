//! GraphQL data layer: documents, normalized cache and HTTP client

pub mod cache;
pub mod client;
pub mod error;
pub mod operations;

pub use client::{use_graphql_client, variables, GraphQlClient};
pub use error::TransportError;
pub use operations::{MutationSpec, Operation};
