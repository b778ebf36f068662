use cs_config::ConfigError;
use cs_db::DbError;
use cs_service::{ErrorBody, ServiceError};

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Error body written to stderr. Service errors keep their own code.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::Service(e) => e.to_body(),
            Self::Usage { message, .. } => ErrorBody {
                code: "USAGE_ERROR",
                message: message.clone(),
                field: None,
            },
            other => ErrorBody {
                code: "INTERNAL_ERROR",
                message: other.to_string(),
                field: None,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
