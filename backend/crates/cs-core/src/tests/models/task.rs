use crate::{Task, TaskStatus};

use chrono::Utc;
use uuid::Uuid;

#[test]
fn test_task_new_is_pending() {
    let task = Task::new("Setup".to_string(), "Install".to_string(), Uuid::new_v4());

    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.completed_at.is_none());
    assert!(!task.is_completed());
}

#[test]
fn test_task_completion_stamps_time() {
    let mut task = Task::new("Setup".to_string(), String::new(), Uuid::new_v4());
    let now = Utc::now();

    task.transition_to(TaskStatus::Completed, now);

    assert!(task.is_completed());
    assert_eq!(task.completed_at, Some(now));
}

#[test]
fn test_task_leaving_completed_clears_time() {
    let mut task = Task::new("Setup".to_string(), String::new(), Uuid::new_v4());
    task.transition_to(TaskStatus::Completed, Utc::now());

    task.transition_to(TaskStatus::Skipped, Utc::now());

    assert_eq!(task.status, TaskStatus::Skipped);
    assert!(task.completed_at.is_none());
}
