use crate::{CoreError, ProjectType, ProposalRequest};

use googletest::prelude::*;

#[test]
fn given_technologies_when_validated_then_ok() {
    let request = ProposalRequest::new(ProjectType::Backend, vec!["Rust".to_string()]);

    assert_that!(request.validate(), ok(anything()));
}

#[test]
fn given_no_technologies_when_validated_then_validation_error() {
    let request = ProposalRequest::new(ProjectType::Backend, vec![]);

    let result = request.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_blank_technologies_when_validated_then_validation_error() {
    let request = ProposalRequest::new(ProjectType::Frontend, vec!["  ".to_string()]);

    assert!(request.validate().is_err());
}

#[test]
fn given_request_json_without_additional_info_when_deserialized_then_none() {
    let request: ProposalRequest = serde_json::from_str(
        r#"{"project_type":"FULLSTACK","technologies":["React","Node"]}"#,
    )
    .unwrap();

    assert_that!(request.additional_info, none());
    assert_that!(request.technologies_label(), eq("React, Node"));
}
