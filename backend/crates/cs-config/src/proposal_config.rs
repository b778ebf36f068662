use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROPOSAL_TIMEOUT_SECS, MAX_PROPOSAL_TIMEOUT_SECS,
    MIN_PROPOSAL_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where proposals come from and how long to wait for them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProposalConfig {
    /// Agent pipeline endpoint; proposals can only be replayed from
    /// transcripts when unset
    pub pipeline_url: Option<String>,
    /// Upper bound on one full pipeline run
    pub timeout_secs: u64,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            pipeline_url: None,
            timeout_secs: DEFAULT_PROPOSAL_TIMEOUT_SECS,
        }
    }
}

impl ProposalConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs < MIN_PROPOSAL_TIMEOUT_SECS
            || self.timeout_secs > MAX_PROPOSAL_TIMEOUT_SECS
        {
            return Err(ConfigError::proposal(format!(
                "proposal.timeout_secs must be {}-{}, got {}",
                MIN_PROPOSAL_TIMEOUT_SECS, MAX_PROPOSAL_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if let Some(url) = &self.pipeline_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::proposal(format!(
                "proposal.pipeline_url must be an http(s) URL, got '{}'",
                url
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
