use crate::ServiceError;

use cs_core::{ProjectType, TaskStatus};
use cs_proposal::ProposalError;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_bad_uuid_when_converted_then_validation_code() {
    let err: ServiceError = uuid::Uuid::parse_str("not-a-uuid").unwrap_err().into();

    assert_that!(err.code(), eq("VALIDATION_ERROR"));
}

#[test]
fn given_bad_project_type_when_converted_then_field_is_project_type() {
    let err: ServiceError = ProjectType::from_str("mobile").unwrap_err().into();

    let body = err.to_body();
    assert_that!(body.code, eq("VALIDATION_ERROR"));
    assert_that!(body.field.as_deref(), some(eq("project_type")));
}

#[test]
fn given_bad_task_status_when_converted_then_field_is_status() {
    let err: ServiceError = TaskStatus::from_str("DONE").unwrap_err().into();

    assert_that!(err.to_body().field.as_deref(), some(eq("status")));
}

#[test]
fn given_pipeline_failure_when_converted_then_internal_code() {
    let err: ServiceError = ProposalError::pipeline("agent crashed").into();

    let body = err.to_body();
    assert_that!(body.code, eq("INTERNAL_ERROR"));
    assert_that!(body.message, contains_substring("agent crashed"));
}

#[test]
fn given_not_found_when_serialized_then_field_is_omitted() {
    let body = ServiceError::not_found("User 1 not found").to_body();

    let json = serde_json::to_value(&body).unwrap();
    assert_that!(json["code"].as_str(), some(eq("NOT_FOUND")));
    assert_that!(json.get("field"), none());
}
