use crate::{Project, ProjectType};

use uuid::Uuid;

#[test]
fn test_project_new() {
    let owner_id = Uuid::new_v4();
    let project = Project::new(
        "Todo API".to_string(),
        "A REST API".to_string(),
        ProjectType::Backend,
        vec!["Rust".to_string(), "SQLite".to_string()],
        owner_id,
    );

    assert_eq!(project.title, "Todo API");
    assert_eq!(project.project_type, ProjectType::Backend);
    assert_eq!(project.owner_id, owner_id);
    assert!(project.is_active);
    assert_eq!(project.technologies_label(), "Rust, SQLite");
}

#[test]
fn test_project_serializes_type_in_upper_case() {
    let project = Project::new(
        "UI".to_string(),
        String::new(),
        ProjectType::Frontend,
        vec![],
        Uuid::new_v4(),
    );

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["project_type"], "FRONTEND");
}
