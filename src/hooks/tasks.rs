use serde::Serialize;
use serde_json::json;

use super::mutation::{use_mutation, MutationHandle};
use super::query::{watch_query, QueryHandle};
use crate::graphql::operations::{CREATE_TASK, DELETE_TASK, GET_TASK, GET_TASKS, UPDATE_TASK};
use crate::models::{Task, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    pub project_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl UpdateTaskInput {
    pub fn status_change(id: impl Into<String>, status: TaskStatus) -> Self {
        Self { id: id.into(), status: Some(status), ..Default::default() }
    }
}

fn task_list_variables(project_id: Option<&str>) -> serde_json::Value {
    match project_id.filter(|id| !id.is_empty()) {
        Some(id) => json!({ "projectId": id }),
        None => json!({}),
    }
}

/// All tasks, or only those of one project
pub fn use_tasks(project_id: Option<&str>) -> QueryHandle<Vec<Task>> {
    watch_query(&GET_TASKS, task_list_variables(project_id), false)
}

pub fn use_task(id: &str) -> QueryHandle<Option<Task>> {
    watch_query(&GET_TASK, json!({ "id": id }), id.is_empty())
}

pub fn use_create_task() -> MutationHandle<Task> {
    use_mutation(&CREATE_TASK)
}

pub fn use_update_task() -> MutationHandle<Task> {
    use_mutation(&UPDATE_TASK)
}

pub fn use_delete_task() -> MutationHandle<()> {
    use_mutation(&DELETE_TASK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::variables;

    #[test]
    fn test_list_variables() {
        assert_eq!(task_list_variables(None), json!({}));
        assert_eq!(task_list_variables(Some("")), json!({}));
        assert_eq!(task_list_variables(Some("7")), json!({ "projectId": "7" }));
    }

    #[test]
    fn test_status_change_input() {
        let input = UpdateTaskInput::status_change("12", TaskStatus::InProgress);
        assert_eq!(variables(&input), json!({ "id": "12", "status": "in_progress" }));
    }

    #[test]
    fn test_create_input_has_no_priority() {
        let input = CreateTaskInput {
            project_id: "3".to_string(),
            title: "Ship".to_string(),
            assignee_email: Some("ana@acme.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            variables(&input),
            json!({ "projectId": "3", "title": "Ship", "status": "todo", "assigneeEmail": "ana@acme.com" })
        );
    }
}
