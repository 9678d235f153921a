//! List Filtering
//!
//! Search and selection filters for the projects, tasks and teams pages.

use crate::models::{Project, ProjectStatus, Task, TaskPriority, TaskStatus, User};

/// A filter value: everything, or one specific value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl Selection<String> {
    /// `"all"` or empty selects everything
    pub fn from_key(key: &str) -> Self {
        match key {
            "" | "all" => Self::All,
            other => Self::Only(other.to_string()),
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn normalized(search: &str) -> String {
    search.trim().to_lowercase()
}

/// Name or description contains `search` (case-insensitive)
pub fn filter_projects(projects: &[Project], search: &str, status: &Selection<ProjectStatus>) -> Vec<Project> {
    let needle = normalized(search);
    projects
        .iter()
        .filter(|p| status.matches(&p.status))
        .filter(|p| {
            needle.is_empty()
                || contains_ci(&p.name, &needle)
                || p.description.as_deref().is_some_and(|d| contains_ci(d, &needle))
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskFilter {
    pub search: String,
    pub status: Selection<TaskStatus>,
    pub priority: Selection<TaskPriority>,
    pub project_id: Selection<String>,
}

pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    let needle = normalized(&filter.search);
    tasks
        .iter()
        .filter(|t| filter.status.matches(&t.status))
        .filter(|t| filter.priority.matches(&t.priority))
        .filter(|t| match &filter.project_id {
            Selection::All => true,
            Selection::Only(id) => t.project_id() == Some(id.as_str()),
        })
        .filter(|t| {
            needle.is_empty()
                || contains_ci(&t.title, &needle)
                || t.description.as_deref().is_some_and(|d| contains_ci(d, &needle))
        })
        .cloned()
        .collect()
}

/// Name or email contains `search`
pub fn filter_users(users: &[User], search: &str) -> Vec<User> {
    let needle = normalized(search);
    users
        .iter()
        .filter(|u| needle.is_empty() || contains_ci(&u.name, &needle) || contains_ci(&u.email, &needle))
        .cloned()
        .collect()
}

pub fn count_projects(projects: &[Project], status: &Selection<ProjectStatus>) -> usize {
    projects.iter().filter(|p| status.matches(&p.status)).count()
}

pub fn count_tasks(tasks: &[Task], status: &Selection<TaskStatus>) -> usize {
    tasks.iter().filter(|t| status.matches(&t.status)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectRef;

    fn project(id: &str, name: &str, description: Option<&str>, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_project_search_covers_name_and_description() {
        let projects = vec![
            project("1", "Website Redesign", None, ProjectStatus::Active),
            project("2", "Mobile", Some("New WEBSITE navigation"), ProjectStatus::Planning),
            project("3", "Billing", Some("Invoices"), ProjectStatus::Active),
        ];
        let ids = |v: Vec<Project>| v.into_iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(ids(filter_projects(&projects, " website ", &Selection::All)), vec!["1", "2"]);
        assert_eq!(
            ids(filter_projects(&projects, "website", &Selection::Only(ProjectStatus::Active))),
            vec!["1"]
        );
        assert_eq!(count_projects(&projects, &Selection::Only(ProjectStatus::Active)), 2);
        assert_eq!(count_projects(&projects, &Selection::All), 3);
    }

    #[test]
    fn test_archived_projects_have_their_own_filter() {
        let projects: Vec<Project> = serde_json::from_value(serde_json::json!([
            { "id": "1", "name": "Old site", "status": "ARCHIVED" },
            { "id": "2", "name": "New site", "status": "PLANNING" },
        ]))
        .unwrap();

        assert_eq!(count_projects(&projects, &Selection::Only(ProjectStatus::Archived)), 1);
        assert_eq!(count_projects(&projects, &Selection::Only(ProjectStatus::Planning)), 1);
        assert_eq!(
            filter_projects(&projects, "", &Selection::Only(ProjectStatus::Archived))[0].id,
            "1"
        );
    }

    #[test]
    fn test_task_filters_combine() {
        let tasks = vec![
            Task {
                id: "1".to_string(),
                title: "Fix login".to_string(),
                status: TaskStatus::Todo,
                priority: TaskPriority::High,
                project: Some(ProjectRef { id: "p1".to_string(), ..Default::default() }),
                ..Default::default()
            },
            Task {
                id: "2".to_string(),
                title: "Write docs".to_string(),
                description: Some("login flow".to_string()),
                status: TaskStatus::Todo,
                priority: TaskPriority::Low,
                project: Some(ProjectRef { id: "p2".to_string(), ..Default::default() }),
                ..Default::default()
            },
        ];

        let filter = TaskFilter { search: "LOGIN".to_string(), ..Default::default() };
        assert_eq!(filter_tasks(&tasks, &filter).len(), 2);

        let filter = TaskFilter {
            search: "login".to_string(),
            project_id: Selection::from_key("p2"),
            ..Default::default()
        };
        assert_eq!(filter_tasks(&tasks, &filter)[0].id, "2");

        let filter = TaskFilter { priority: Selection::Only(TaskPriority::High), ..Default::default() };
        assert_eq!(filter_tasks(&tasks, &filter)[0].id, "1");
        assert_eq!(count_tasks(&tasks, &Selection::Only(TaskStatus::Completed)), 0);
    }

    #[test]
    fn test_user_search() {
        let users = vec![
            User { id: "1".to_string(), name: "Ana Diaz".to_string(), email: "ana@acme.com".to_string(), avatar: None },
            User { id: "2".to_string(), name: "Bo".to_string(), email: "bo@other.io".to_string(), avatar: None },
        ];
        assert_eq!(filter_users(&users, "acme").len(), 1);
        assert_eq!(filter_users(&users, "").len(), 2);
        assert_eq!(Selection::from_key("all"), Selection::<String>::All);
    }
}
