use crate::{AgentPipeline, ProposalError, ProposalResult, StagePrompt};

use cs_core::ProposalRequest;

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

/// Replays a transcript captured from an earlier pipeline run.
pub struct RecordedTranscriptPipeline {
    path: PathBuf,
}

impl RecordedTranscriptPipeline {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AgentPipeline for RecordedTranscriptPipeline {
    async fn run(
        &self,
        _request: &ProposalRequest,
        _stages: &[StagePrompt],
    ) -> ProposalResult<String> {
        info!("Replaying transcript from {}", self.path.display());

        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProposalError::Transcript {
                path: self.path.clone(),
                source,
            })
    }
}
