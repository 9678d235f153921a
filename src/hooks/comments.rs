use serde::Serialize;
use serde_json::json;

use super::mutation::{use_mutation, MutationHandle};
use super::query::{watch_query, QueryHandle};
use crate::graphql::operations::{CREATE_COMMENT, DELETE_COMMENT, GET_COMMENTS, UPDATE_COMMENT};
use crate::models::Comment;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    pub task_id: String,
    pub content: String,
    pub author_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCommentInput {
    pub id: String,
    pub content: String,
}

pub fn use_comments(task_id: &str) -> QueryHandle<Vec<Comment>> {
    watch_query(&GET_COMMENTS, json!({ "taskId": task_id }), task_id.is_empty())
}

pub fn use_create_comment() -> MutationHandle<Comment> {
    use_mutation(&CREATE_COMMENT)
}

pub fn use_update_comment() -> MutationHandle<Comment> {
    use_mutation(&UPDATE_COMMENT)
}

pub fn use_delete_comment() -> MutationHandle<()> {
    use_mutation(&DELETE_COMMENT)
}
