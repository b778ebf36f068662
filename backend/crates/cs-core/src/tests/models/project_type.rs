use crate::ProjectType;

use std::str::FromStr;

#[test]
fn test_project_type_as_str() {
    assert_eq!(ProjectType::Backend.as_str(), "BACKEND");
    assert_eq!(ProjectType::Frontend.as_str(), "FRONTEND");
    assert_eq!(ProjectType::Fullstack.as_str(), "FULLSTACK");
}

#[test]
fn test_project_type_label() {
    assert_eq!(ProjectType::Fullstack.label(), "fullstack");
}

#[test]
fn test_project_type_from_str_accepts_either_case() {
    assert_eq!(
        ProjectType::from_str("BACKEND").unwrap(),
        ProjectType::Backend
    );
    assert_eq!(
        ProjectType::from_str("frontend").unwrap(),
        ProjectType::Frontend
    );
    assert!(ProjectType::from_str("mobile").is_err());
}
