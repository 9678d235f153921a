//! Frontend Models
//!
//! Data structures matching the GraphQL schema. Field names follow the
//! server's camelCase; status and priority strings are canonicalized here.

use serde::{Deserialize, Serialize};

use crate::format::progress_percent;

/// Lowercase, trimmed, with `-` folded into `_`
fn canonical(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}

// ========================
// Enumerations
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
    Archived,
    /// Value the client does not recognize, kept verbatim
    Other(String),
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 6] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
        ProjectStatus::Archived,
    ];

    pub fn parse(raw: &str) -> Self {
        match canonical(raw).as_str() {
            "planning" => Self::Planning,
            "active" => Self::Active,
            "on_hold" => Self::OnHold,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "archived" => Self::Archived,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Wire value sent in mutations
    pub fn as_str(&self) -> &str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Archived => "archived",
            Self::Other(raw) => raw,
        }
    }

    /// Unrecognized values display as Planning
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planning | Self::Other(_) => "Planning",
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Archived => "Archived",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Planning | Self::Other(_) => "status-planning",
            Self::Active => "status-active",
            Self::OnHold => "status-on-hold",
            Self::Completed => "status-completed",
            Self::Cancelled => "status-cancelled",
            Self::Archived => "status-archived",
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
    Blocked,
    Other(String),
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Blocked,
    ];

    pub fn parse(raw: &str) -> Self {
        match canonical(raw).as_str() {
            "todo" | "to_do" => Self::Todo,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "blocked" => Self::Blocked,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
            Self::Other(raw) => raw,
        }
    }

    /// Unrecognized values display as To Do
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo | Self::Other(_) => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Todo | Self::Other(_) => "status-todo",
            Self::InProgress => "status-in-progress",
            Self::Completed => "status-completed",
            Self::Blocked => "status-blocked",
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
    Other(String),
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn parse(raw: &str) -> Self {
        match canonical(raw).as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
            Self::Other(raw) => raw,
        }
    }

    /// Unrecognized values display as Medium
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium | Self::Other(_) => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "priority-low",
            Self::Medium | Self::Other(_) => "priority-medium",
            Self::High => "priority-high",
            Self::Urgent => "priority-urgent",
        }
    }
}

impl From<String> for TaskPriority {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<TaskPriority> for String {
    fn from(priority: TaskPriority) -> Self {
        priority.as_str().to_string()
    }
}

// ========================
// Entities
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl User {
    /// Name if present, otherwise the email
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { &self.email } else { &self.name }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Organization as embedded in a project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationRef {
    pub id: String,
    pub slug: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub due_date: Option<String>,
    pub organization: Option<OrganizationRef>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub task_count: Option<u32>,
    pub completed_task_count: Option<u32>,
    pub completion_rate: Option<f64>,
}

impl Project {
    pub fn tasks_count(&self) -> u32 {
        self.task_count.unwrap_or(0)
    }

    pub fn completed_tasks_count(&self) -> u32 {
        self.completed_task_count.unwrap_or(0)
    }

    /// Completion percentage rounded to two decimals
    pub fn progress(&self) -> f64 {
        progress_percent(self.completed_tasks_count(), self.tasks_count())
    }
}

/// Project as embedded in a task
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRef {
    pub id: String,
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project: Option<ProjectRef>,
    pub assignee_email: Option<String>,
    pub due_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Task {
    pub fn project_id(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.id.as_str())
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.name.as_deref())
    }

    /// Resolve the assignee email against a user list
    pub fn assignee<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        let email = self.assignee_email.as_deref()?;
        users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub task: Option<IdRef>,
    pub author_email: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStats {
    pub total_projects: u32,
    pub active_projects: u32,
    pub completed_projects: u32,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub overall_completion_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_casings_collapse() {
        assert_eq!(ProjectStatus::parse("on-hold"), ProjectStatus::OnHold);
        assert_eq!(ProjectStatus::parse("ON_HOLD"), ProjectStatus::OnHold);
        assert_eq!(ProjectStatus::parse("on_hold"), ProjectStatus::OnHold);
        assert_eq!(ProjectStatus::parse("ARCHIVED"), ProjectStatus::Archived);
        assert_eq!(ProjectStatus::parse("archived").label(), "Archived");
        assert_eq!(ProjectStatus::Archived.css_class(), "status-archived");
        assert_eq!(TaskStatus::parse("in-progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("IN_PROGRESS"), TaskStatus::InProgress);
        assert_eq!(TaskPriority::parse("URGENT"), TaskPriority::Urgent);
    }

    #[test]
    fn test_unknown_values_fall_back_for_display() {
        let status = ProjectStatus::parse("shelved");
        assert_eq!(status, ProjectStatus::Other("shelved".to_string()));
        assert_eq!(status.label(), "Planning");
        assert_eq!(status.as_str(), "shelved");

        assert_eq!(TaskStatus::parse("waiting").label(), "To Do");
        assert_eq!(TaskPriority::parse("meh").label(), "Medium");
    }

    #[test]
    fn test_wire_values_are_snake_case() {
        assert_eq!(String::from(ProjectStatus::OnHold), "on_hold");
        assert_eq!(String::from(TaskStatus::InProgress), "in_progress");
        assert_eq!(serde_json::to_value(TaskStatus::Blocked).unwrap(), json!("blocked"));
    }

    #[test]
    fn test_task_deserializes_server_shape() {
        let task: Task = serde_json::from_value(json!({
            "__typename": "TaskType",
            "id": "12",
            "title": "Write docs",
            "description": "",
            "status": "IN_PROGRESS",
            "priority": "HIGH",
            "project": { "id": "3", "name": "Acme Launch", "status": "ACTIVE" },
            "assigneeEmail": "ana@acme.com",
            "dueDate": "2026-01-31",
            "createdAt": "2026-01-01T10:00:00+00:00",
            "updatedAt": "2026-01-02T10:00:00+00:00"
        }))
        .unwrap();

        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.project_id(), Some("3"));
        assert_eq!(task.project_name(), Some("Acme Launch"));
    }

    #[test]
    fn test_assignee_resolution() {
        let users = vec![User {
            id: "1".to_string(),
            email: "Ana@acme.com".to_string(),
            name: "Ana".to_string(),
            avatar: None,
        }];
        let mut task = Task { assignee_email: Some("ana@acme.com".to_string()), ..Default::default() };
        assert_eq!(task.assignee(&users).map(|u| u.name.as_str()), Some("Ana"));

        task.assignee_email = Some("bob@acme.com".to_string());
        assert!(task.assignee(&users).is_none());
    }

    #[test]
    fn test_project_progress() {
        let project = Project {
            task_count: Some(7),
            completed_task_count: Some(3),
            ..Default::default()
        };
        assert_eq!(project.progress(), 42.86);
        assert_eq!(Project::default().progress(), 0.0);
    }
}
