//! Service error types
//!
//! Every lower-layer error is folded into one of four kinds so callers can
//! report a stable machine-readable code.

use cs_core::CoreError;
use cs_db::DbError;
use cs_proposal::ProposalError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

/// JSON error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ServiceError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Client-facing body; locations stay in the logs.
    pub fn to_body(&self) -> ErrorBody {
        let (message, field) = match self {
            Self::Validation { message, field, .. } => (message.clone(), field.clone()),
            Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Internal { message, .. } => (message.clone(), None),
        };

        ErrorBody {
            code: self.code(),
            message,
            field,
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        if let DbError::Sqlx {
            source: sqlx::Error::Database(db_err),
            ..
        } = &e
        {
            if db_err.is_unique_violation() {
                return Self::conflict("Resource already exists");
            }
            if db_err.is_foreign_key_violation() {
                return Self::not_found("Referenced resource does not exist");
            }
        }

        log::error!("Database error: {}", e);
        Self::internal("Database operation failed")
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = match &e {
            CoreError::Validation { field, .. } => field.clone(),
            CoreError::InvalidProjectType { .. } => Some("project_type".to_string()),
            CoreError::InvalidTaskStatus { .. } => Some("status".to_string()),
            CoreError::Uuid { .. } => None,
        };

        Self::Validation {
            message: e.to_string(),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ProposalError> for ServiceError {
    #[track_caller]
    fn from(e: ProposalError) -> Self {
        match e {
            ProposalError::Validation { message, .. } => Self::Validation {
                message,
                field: Some("technologies".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                log::error!("Proposal generation failed: {}", other);
                Self::internal(other.to_string())
            }
        }
    }
}

impl From<uuid::Error> for ServiceError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        Self::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
