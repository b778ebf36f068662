use crate::{ServiceError, ServiceResult};

/// Trimmed `value`, or a validation error naming `field` if it is blank.
#[track_caller]
pub fn require_non_empty(value: &str, field: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(trimmed.to_string())
}

/// Loose shape check: something on both sides of a single `@`.
#[track_caller]
pub fn require_email(value: &str) -> ServiceResult<String> {
    let email = value.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };

    if !valid {
        return Err(ServiceError::validation(
            format!("'{}' is not a valid email address", email),
            "email",
        ));
    }
    Ok(email.to_string())
}

/// Trimmed technologies with blanks dropped; order is kept.
pub fn clean_technologies(technologies: &[String]) -> Vec<String> {
    technologies
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
