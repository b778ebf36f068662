use cs_core::CoreError;

use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProposalError {
    #[error("Invalid proposal request: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Agent pipeline failed: {message} {location}")]
    Pipeline {
        message: String,
        location: ErrorLocation,
    },

    #[error("Agent pipeline did not answer within {secs}s {location}")]
    Timeout { secs: u64, location: ErrorLocation },

    #[error("Failed to read transcript {path}: {source}")]
    Transcript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProposalError {
    #[track_caller]
    pub fn pipeline<S: Into<String>>(message: S) -> Self {
        Self::Pipeline {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ProposalError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        Self::Validation {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ProposalError {
    #[track_caller]
    fn from(e: reqwest::Error) -> Self {
        Self::pipeline(e.to_string())
    }
}

pub type ProposalResult<T> = StdResult<T, ProposalError>;
