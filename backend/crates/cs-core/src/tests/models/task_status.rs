use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Pending.as_str(), "PENDING");
    assert_eq!(TaskStatus::Completed.as_str(), "COMPLETED");
    assert_eq!(TaskStatus::Skipped.as_str(), "SKIPPED");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(
        TaskStatus::from_str("COMPLETED").unwrap(),
        TaskStatus::Completed
    );
    assert_eq!(TaskStatus::from_str("skipped").unwrap(), TaskStatus::Skipped);
    assert!(TaskStatus::from_str("done").is_err());
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}
