//! Task Board Buckets
//!
//! Tasks are grouped into the four fixed status buckets. Unknown statuses
//! land in To Do, matching their display fallback.

use crate::models::{Task, TaskStatus};

pub const BUCKETS: [TaskStatus; 4] = TaskStatus::ALL;

/// Bucket a status is shown in
pub fn bucket_of(status: &TaskStatus) -> TaskStatus {
    match status {
        TaskStatus::Other(_) => TaskStatus::Todo,
        known => known.clone(),
    }
}

/// Split tasks into `BUCKETS` order, preserving input order within each
pub fn partition(tasks: &[Task]) -> Vec<(TaskStatus, Vec<Task>)> {
    BUCKETS
        .iter()
        .map(|bucket| {
            let members = tasks
                .iter()
                .filter(|t| &bucket_of(&t.status) == bucket)
                .cloned()
                .collect();
            (bucket.clone(), members)
        })
        .collect()
}

/// Status update implied by dropping `task_id` on `target`.
/// None when the task is unknown or already in that bucket.
pub fn status_change_for_drop(tasks: &[Task], task_id: &str, target: &TaskStatus) -> Option<(String, TaskStatus)> {
    let task = tasks.iter().find(|t| t.id == task_id)?;
    if &bucket_of(&task.status) == target {
        return None;
    }
    Some((task.id.clone(), target.clone()))
}

/// Status a picker shows once an update settles: the request if the
/// server applied it, otherwise the status it had before
pub fn settled_status(previous: &TaskStatus, requested: TaskStatus, applied: bool) -> TaskStatus {
    if applied { requested } else { previous.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task { id: id.to_string(), title: format!("Task {}", id), status, ..Default::default() }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", TaskStatus::Todo),
            task("2", TaskStatus::InProgress),
            task("3", TaskStatus::Todo),
            task("4", TaskStatus::Other("review".to_string())),
            task("5", TaskStatus::Blocked),
        ]
    }

    #[test]
    fn test_partition_keeps_order_and_fixed_buckets() {
        let buckets = partition(&sample());
        let ids: Vec<(TaskStatus, Vec<&str>)> = buckets
            .iter()
            .map(|(s, ts)| (s.clone(), ts.iter().map(|t| t.id.as_str()).collect()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (TaskStatus::Todo, vec!["1", "3", "4"]),
                (TaskStatus::InProgress, vec!["2"]),
                (TaskStatus::Completed, vec![]),
                (TaskStatus::Blocked, vec!["5"]),
            ]
        );
    }

    #[test]
    fn test_drop_on_other_bucket_changes_status_once() {
        let change = status_change_for_drop(&sample(), "1", &TaskStatus::Blocked);
        assert_eq!(change, Some(("1".to_string(), TaskStatus::Blocked)));
    }

    #[test]
    fn test_drop_on_same_bucket_is_noop() {
        assert_eq!(status_change_for_drop(&sample(), "2", &TaskStatus::InProgress), None);
        assert_eq!(status_change_for_drop(&sample(), "4", &TaskStatus::Todo), None);
        assert_eq!(status_change_for_drop(&sample(), "missing", &TaskStatus::Todo), None);
    }

    #[test]
    fn test_rejected_status_change_snaps_back() {
        assert_eq!(
            settled_status(&TaskStatus::Todo, TaskStatus::Blocked, false),
            TaskStatus::Todo
        );
        assert_eq!(
            settled_status(&TaskStatus::Todo, TaskStatus::Blocked, true),
            TaskStatus::Blocked
        );
        let unknown = TaskStatus::Other("review".to_string());
        assert_eq!(settled_status(&unknown, TaskStatus::Completed, false), unknown);
    }
}
