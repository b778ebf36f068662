use crate::ServiceError;
use crate::validation::{clean_technologies, require_email, require_non_empty};

use googletest::prelude::*;

#[test]
fn given_padded_value_when_required_then_trimmed_value_returned() {
    assert_that!(require_non_empty("  Agenda  ", "title").unwrap(), eq("Agenda"));
}

#[test]
fn given_blank_value_when_required_then_validation_error_names_field() {
    let err = require_non_empty("   ", "title").unwrap_err();

    match err {
        ServiceError::Validation { field, .. } => {
            assert_that!(field.as_deref(), some(eq("title")))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_well_formed_email_when_checked_then_accepted() {
    assert_that!(require_email(" ada@example.com ").unwrap(), eq("ada@example.com"));
}

#[test]
fn given_malformed_emails_when_checked_then_rejected() {
    for email in ["", "ada", "@example.com", "ada@", "a@b@c"] {
        assert_that!(require_email(email), err(anything()));
    }
}

#[test]
fn given_technologies_with_blanks_when_cleaned_then_blanks_dropped_and_order_kept() {
    let cleaned = clean_technologies(&[
        " Rust ".to_string(),
        "".to_string(),
        "SQLite".to_string(),
        "  ".to_string(),
    ]);

    assert_that!(cleaned, elements_are![eq("Rust"), eq("SQLite")]);
}
