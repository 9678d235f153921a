//! GraphQL Documents
//!
//! Every entity selection includes `__typename` so the cache can
//! normalize it.

/// A named GraphQL operation and the root field its result lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
    pub root_field: &'static str,
}

/// A mutation plus its refetch and notification behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationSpec {
    pub op: Operation,
    /// Field of the payload carrying the mutated entity (None for deletes)
    pub entity_field: Option<&'static str>,
    /// Active queries to refetch once a response arrives
    pub refetch: &'static [&'static str],
    pub success_message: &'static str,
}

// ========================
// Queries
// ========================

pub const GET_ORGANIZATION: Operation = Operation {
    name: "GetOrganization",
    root_field: "organization",
    document: r#"
query GetOrganization($slug: String!) {
  organization(slug: $slug) {
    __typename
    id
    name
    slug
    contactEmail
    createdAt
    updatedAt
  }
}"#,
};

pub const GET_PROJECTS: Operation = Operation {
    name: "GetProjects",
    root_field: "projects",
    document: r#"
query GetProjects {
  projects {
    __typename
    id
    name
    description
    status
    dueDate
    organization { __typename id slug }
    createdAt
    updatedAt
    taskCount
    completedTaskCount
    completionRate
  }
}"#,
};

pub const GET_PROJECT: Operation = Operation {
    name: "GetProject",
    root_field: "project",
    document: r#"
query GetProject($id: ID!) {
  project(id: $id) {
    __typename
    id
    name
    description
    status
    dueDate
    organization { __typename id slug name }
    createdAt
    updatedAt
    taskCount
    completedTaskCount
    completionRate
  }
}"#,
};

pub const GET_TASKS: Operation = Operation {
    name: "GetTasks",
    root_field: "tasks",
    document: r#"
query GetTasks($projectId: ID) {
  tasks(projectId: $projectId) {
    __typename
    id
    title
    description
    status
    priority
    project { __typename id name status }
    assigneeEmail
    dueDate
    createdAt
    updatedAt
  }
}"#,
};

pub const GET_TASK: Operation = Operation {
    name: "GetTask",
    root_field: "task",
    document: r#"
query GetTask($id: ID!) {
  task(id: $id) {
    __typename
    id
    title
    description
    status
    priority
    project { __typename id name status organization { __typename id slug } }
    assigneeEmail
    dueDate
    createdAt
    updatedAt
  }
}"#,
};

pub const GET_COMMENTS: Operation = Operation {
    name: "GetComments",
    root_field: "taskComments",
    document: r#"
query GetComments($taskId: ID!) {
  taskComments(taskId: $taskId) {
    __typename
    id
    content
    task { __typename id }
    authorEmail
    timestamp
  }
}"#,
};

pub const GET_USERS: Operation = Operation {
    name: "GetUsers",
    root_field: "users",
    document: r#"
query GetUsers {
  users {
    __typename
    id
    name
    email
    avatar
  }
}"#,
};

pub const GET_PROJECT_STATS: Operation = Operation {
    name: "GetProjectStats",
    root_field: "projectStats",
    document: r#"
query GetProjectStats {
  projectStats {
    totalProjects
    activeProjects
    completedProjects
    totalTasks
    completedTasks
    overallCompletionRate
  }
}"#,
};

// ========================
// Mutations
// ========================

const PROJECT_REFETCH: &[&str] = &["GetProjects"];
const TASK_REFETCH: &[&str] = &["GetTasks"];
const COMMENT_REFETCH: &[&str] = &["GetComments"];

pub const CREATE_PROJECT: MutationSpec = MutationSpec {
    op: Operation {
        name: "CreateProject",
        root_field: "createProject",
        document: r#"
mutation CreateProject($name: String!, $description: String, $status: String, $dueDate: Date, $organizationSlug: String!) {
  createProject(name: $name, description: $description, status: $status, dueDate: $dueDate, organizationSlug: $organizationSlug) {
    project {
      __typename
      id
      name
      description
      status
      dueDate
      organization { __typename id slug name }
      createdAt
    }
    success
    errors
  }
}"#,
    },
    entity_field: Some("project"),
    refetch: PROJECT_REFETCH,
    success_message: "Project created successfully",
};

pub const UPDATE_PROJECT: MutationSpec = MutationSpec {
    op: Operation {
        name: "UpdateProject",
        root_field: "updateProject",
        document: r#"
mutation UpdateProject($id: ID!, $name: String, $description: String, $status: String, $dueDate: Date) {
  updateProject(id: $id, name: $name, description: $description, status: $status, dueDate: $dueDate) {
    project {
      __typename
      id
      name
      description
      status
      dueDate
      updatedAt
    }
    success
    errors
  }
}"#,
    },
    entity_field: Some("project"),
    refetch: PROJECT_REFETCH,
    success_message: "Project updated successfully",
};

pub const DELETE_PROJECT: MutationSpec = MutationSpec {
    op: Operation {
        name: "DeleteProject",
        root_field: "deleteProject",
        document: r#"
mutation DeleteProject($id: ID!) {
  deleteProject(id: $id) {
    success
    message
    errors
  }
}"#,
    },
    entity_field: None,
    refetch: PROJECT_REFETCH,
    success_message: "Project deleted successfully",
};

pub const CREATE_TASK: MutationSpec = MutationSpec {
    op: Operation {
        name: "CreateTask",
        root_field: "createTask",
        document: r#"
mutation CreateTask($projectId: ID!, $title: String!, $description: String, $status: String, $assigneeEmail: String, $dueDate: Date) {
  createTask(projectId: $projectId, title: $title, description: $description, status: $status, assigneeEmail: $assigneeEmail, dueDate: $dueDate) {
    task {
      __typename
      id
      title
      description
      status
      priority
      assigneeEmail
      dueDate
      createdAt
    }
    success
    errors
  }
}"#,
    },
    entity_field: Some("task"),
    refetch: TASK_REFETCH,
    success_message: "Task created successfully",
};

pub const UPDATE_TASK: MutationSpec = MutationSpec {
    op: Operation {
        name: "UpdateTask",
        root_field: "updateTask",
        document: r#"
mutation UpdateTask($id: ID!, $title: String, $description: String, $status: String, $assigneeEmail: String, $dueDate: Date) {
  updateTask(id: $id, title: $title, description: $description, status: $status, assigneeEmail: $assigneeEmail, dueDate: $dueDate) {
    task {
      __typename
      id
      title
      description
      status
      priority
      assigneeEmail
      dueDate
      updatedAt
    }
    success
    errors
  }
}"#,
    },
    entity_field: Some("task"),
    refetch: TASK_REFETCH,
    success_message: "Task updated successfully",
};

pub const DELETE_TASK: MutationSpec = MutationSpec {
    op: Operation {
        name: "DeleteTask",
        root_field: "deleteTask",
        document: r#"
mutation DeleteTask($id: ID!) {
  deleteTask(id: $id) {
    success
    message
    errors
  }
}"#,
    },
    entity_field: None,
    refetch: TASK_REFETCH,
    success_message: "Task deleted successfully",
};

pub const CREATE_COMMENT: MutationSpec = MutationSpec {
    op: Operation {
        name: "CreateComment",
        root_field: "addTaskComment",
        document: r#"
mutation CreateComment($taskId: ID!, $content: String!, $authorEmail: String!) {
  addTaskComment(taskId: $taskId, content: $content, authorEmail: $authorEmail) {
    comment {
      __typename
      id
      content
      task { __typename id }
      authorEmail
      timestamp
    }
    success
    errors
  }
}"#,
    },
    entity_field: Some("comment"),
    refetch: COMMENT_REFETCH,
    success_message: "Comment added successfully",
};

pub const UPDATE_COMMENT: MutationSpec = MutationSpec {
    op: Operation {
        name: "UpdateComment",
        root_field: "updateComment",
        document: r#"
mutation UpdateComment($id: ID!, $content: String!) {
  updateComment(id: $id, content: $content) {
    comment {
      __typename
      id
      content
      task { __typename id }
      authorEmail
      timestamp
    }
    success
    errors
  }
}"#,
    },
    entity_field: Some("comment"),
    refetch: COMMENT_REFETCH,
    success_message: "Comment updated successfully",
};

pub const DELETE_COMMENT: MutationSpec = MutationSpec {
    op: Operation {
        name: "DeleteComment",
        root_field: "deleteComment",
        document: r#"
mutation DeleteComment($id: ID!) {
  deleteComment(id: $id) {
    success
    message
    errors
  }
}"#,
    },
    entity_field: None,
    refetch: COMMENT_REFETCH,
    success_message: "Comment deleted successfully",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_name_their_operation_and_root_field() {
        let queries = [
            GET_ORGANIZATION, GET_PROJECTS, GET_PROJECT, GET_TASKS,
            GET_TASK, GET_COMMENTS, GET_USERS, GET_PROJECT_STATS,
        ];
        let mutations = [
            CREATE_PROJECT, UPDATE_PROJECT, DELETE_PROJECT, CREATE_TASK, UPDATE_TASK,
            DELETE_TASK, CREATE_COMMENT, UPDATE_COMMENT, DELETE_COMMENT,
        ];
        for op in queries.iter().chain(mutations.iter().map(|m| &m.op)) {
            assert!(op.document.contains(op.name), "{} not named in document", op.name);
            assert!(op.document.contains(&format!("{}(", op.root_field)) || op.document.contains(&format!("{} {{", op.root_field)));
        }
    }

    #[test]
    fn test_mutations_refetch_their_list() {
        assert_eq!(CREATE_PROJECT.refetch, &["GetProjects"]);
        assert_eq!(UPDATE_TASK.refetch, &["GetTasks"]);
        assert_eq!(DELETE_COMMENT.refetch, &["GetComments"]);
        assert!(DELETE_TASK.entity_field.is_none());
    }
}
