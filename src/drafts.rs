//! Form Drafts
//!
//! Edit buffers for the project, task and comment forms, with validation
//! and conversion into mutation inputs.

use crate::hooks::{CreateProjectInput, CreateTaskInput, UpdateCommentInput, UpdateProjectInput};
use crate::models::{Comment, Project, ProjectStatus, TaskStatus};

pub const PROJECT_NAME_MAX: usize = 100;

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `local@domain.tld` with no whitespace
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: String,
}

impl ProjectDraft {
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            status: project.status.clone(),
            due_date: project.due_date.clone().unwrap_or_default(),
        }
    }

    /// First validation problem, if any
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Project name is required".to_string());
        }
        if name.chars().count() > PROJECT_NAME_MAX {
            return Err(format!("Project name must be at most {} characters", PROJECT_NAME_MAX));
        }
        Ok(())
    }

    pub fn to_create(&self, organization_slug: &str) -> CreateProjectInput {
        CreateProjectInput {
            name: self.name.trim().to_string(),
            description: non_empty(&self.description),
            status: self.status.clone(),
            due_date: non_empty(&self.due_date),
            organization_slug: organization_slug.to_string(),
        }
    }

    pub fn to_update(&self, id: &str) -> UpdateProjectInput {
        UpdateProjectInput {
            id: id.to_string(),
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status.clone()),
            due_date: non_empty(&self.due_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee_email: String,
    pub due_date: String,
}

impl TaskDraft {
    pub fn with_status(status: TaskStatus) -> Self {
        Self { status, ..Default::default() }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Task title is required".to_string());
        }
        if non_empty(&self.assignee_email).is_some_and(|email| !looks_like_email(&email)) {
            return Err("Assignee must be a valid email address".to_string());
        }
        Ok(())
    }

    pub fn to_create(&self, project_id: &str) -> CreateTaskInput {
        CreateTaskInput {
            project_id: project_id.to_string(),
            title: self.title.trim().to_string(),
            description: non_empty(&self.description),
            status: self.status.clone(),
            assignee_email: non_empty(&self.assignee_email),
            due_date: non_empty(&self.due_date),
        }
    }
}

/// Inline edit of one comment. The buffer survives a rejected save.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentEdit {
    pub comment_id: Option<String>,
    pub buffer: String,
}

impl CommentEdit {
    pub fn start(&mut self, comment: &Comment) {
        self.comment_id = Some(comment.id.clone());
        self.buffer = comment.content.clone();
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self, comment_id: &str) -> bool {
        self.comment_id.as_deref() == Some(comment_id)
    }

    /// Update to send; None when nothing is being edited or the text is blank
    pub fn submission(&self) -> Option<UpdateCommentInput> {
        let id = self.comment_id.clone()?;
        let content = non_empty(&self.buffer)?;
        Some(UpdateCommentInput { id, content })
    }

    /// Close the editor once the server applied the edit to `comment_id`
    pub fn settle(&mut self, comment_id: &str, applied: bool) {
        if applied && self.is_editing(comment_id) {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_rules() {
        let mut draft = ProjectDraft { name: "   ".to_string(), ..Default::default() };
        assert_eq!(draft.validate(), Err("Project name is required".to_string()));

        draft.name = "x".repeat(PROJECT_NAME_MAX);
        assert!(draft.validate().is_ok());

        draft.name = "x".repeat(PROJECT_NAME_MAX + 1);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_project_create_input_trims_and_drops_blanks() {
        let draft = ProjectDraft {
            name: "  Apollo ".to_string(),
            description: "  ".to_string(),
            status: ProjectStatus::Active,
            due_date: "2026-03-01".to_string(),
        };
        let input = draft.to_create("demo-org");
        assert_eq!(input.name, "Apollo");
        assert_eq!(input.description, None);
        assert_eq!(input.due_date.as_deref(), Some("2026-03-01"));
        assert_eq!(input.organization_slug, "demo-org");
    }

    #[test]
    fn test_task_validation() {
        let mut draft = TaskDraft::with_status(TaskStatus::Blocked);
        assert_eq!(draft.validate(), Err("Task title is required".to_string()));

        draft.title = "Ship it".to_string();
        assert!(draft.validate().is_ok());

        draft.assignee_email = "not-an-email".to_string();
        assert!(draft.validate().is_err());

        draft.assignee_email = "ana@acme.com".to_string();
        assert!(draft.validate().is_ok());
        assert_eq!(draft.to_create("3").status, TaskStatus::Blocked);
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a b@c.de"));
        assert!(!looks_like_email("a@@c.de"));
    }

    #[test]
    fn test_rejected_comment_edit_keeps_buffer() {
        let comment = Comment { id: "7".to_string(), content: "first draft".to_string(), ..Default::default() };
        let mut edit = CommentEdit::default();
        edit.start(&comment);
        edit.buffer = "  second draft ".to_string();

        let input = edit.submission().unwrap();
        assert_eq!(input, UpdateCommentInput { id: "7".to_string(), content: "second draft".to_string() });

        edit.settle("7", false);
        assert!(edit.is_editing("7"));
        assert_eq!(edit.buffer, "  second draft ");

        edit.settle("7", true);
        assert_eq!(edit, CommentEdit::default());
    }

    #[test]
    fn test_comment_edit_ignores_stale_results() {
        let mut edit = CommentEdit::default();
        assert!(edit.submission().is_none());

        edit.start(&Comment { id: "2".to_string(), content: "b".to_string(), ..Default::default() });
        edit.settle("1", true);
        assert!(edit.is_editing("2"));

        edit.buffer = "   ".to_string();
        assert!(edit.submission().is_none());
    }
}
