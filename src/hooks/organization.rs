use serde_json::json;

use super::query::{watch_query, QueryHandle};
use crate::graphql::operations::{GET_ORGANIZATION, GET_USERS};
use crate::graphql::{GraphQlClient, TransportError};
use crate::models::{Organization, User};

pub fn use_organization(slug: &str) -> QueryHandle<Option<Organization>> {
    watch_query(&GET_ORGANIZATION, json!({ "slug": slug }), slug.is_empty())
}

pub fn use_users() -> QueryHandle<Vec<User>> {
    watch_query(&GET_USERS, json!({}), false)
}

/// One-off lookup used when switching organizations
pub async fn fetch_organization(client: &GraphQlClient, slug: &str) -> Result<Option<Organization>, TransportError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Ok(None);
    }
    let data = client.query(&GET_ORGANIZATION, json!({ "slug": slug })).await?;
    Ok(serde_json::from_value(data)?)
}
