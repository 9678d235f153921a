//! Entity hooks over the GraphQL client

mod comments;
mod mutation;
mod organization;
mod projects;
mod query;
mod tasks;

pub use comments::*;
pub use mutation::{Completion, MutationHandle, MutationPayload};
pub use organization::*;
pub use projects::*;
pub use query::{watch_query, QueryHandle};
pub use tasks::*;
