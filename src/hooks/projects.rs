use serde::Serialize;
use serde_json::json;

use super::mutation::{use_mutation, MutationHandle};
use super::query::{watch_query, QueryHandle};
use crate::graphql::operations::{
    CREATE_PROJECT, DELETE_PROJECT, GET_PROJECT, GET_PROJECTS, GET_PROJECT_STATS, UPDATE_PROJECT,
};
use crate::models::{Project, ProjectStats, ProjectStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub organization_slug: String,
}

/// Only the fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdInput {
    pub id: String,
}

impl IdInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

pub fn use_projects() -> QueryHandle<Vec<Project>> {
    watch_query(&GET_PROJECTS, json!({}), false)
}

/// Skipped when `id` is empty; `Some(None)` means the server has no such project
pub fn use_project(id: &str) -> QueryHandle<Option<Project>> {
    watch_query(&GET_PROJECT, json!({ "id": id }), id.is_empty())
}

pub fn use_project_stats() -> QueryHandle<ProjectStats> {
    watch_query(&GET_PROJECT_STATS, json!({}), false)
}

pub fn use_create_project() -> MutationHandle<Project> {
    use_mutation(&CREATE_PROJECT)
}

pub fn use_update_project() -> MutationHandle<Project> {
    use_mutation(&UPDATE_PROJECT)
}

pub fn use_delete_project() -> MutationHandle<()> {
    use_mutation(&DELETE_PROJECT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::variables;

    #[test]
    fn test_create_input_wire_shape() {
        let input = CreateProjectInput {
            name: "Apollo".to_string(),
            status: ProjectStatus::OnHold,
            organization_slug: "demo-org".to_string(),
            ..Default::default()
        };
        assert_eq!(
            variables(&input),
            json!({ "name": "Apollo", "status": "on_hold", "organizationSlug": "demo-org" })
        );
    }

    #[test]
    fn test_update_input_sends_only_changes() {
        let input = UpdateProjectInput {
            id: "4".to_string(),
            status: Some(ProjectStatus::Completed),
            ..Default::default()
        };
        assert_eq!(variables(&input), json!({ "id": "4", "status": "completed" }));
    }
}
