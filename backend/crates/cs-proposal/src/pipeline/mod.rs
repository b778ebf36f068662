//! Seam to the external agent pipeline.

mod http;
mod recorded;

pub use http::HttpAgentPipeline;
pub use recorded::RecordedTranscriptPipeline;

use crate::{ProposalResult, StagePrompt};

use cs_core::ProposalRequest;

use async_trait::async_trait;

/// Runs the stage prompts and returns the concatenated free-text transcript.
///
/// Nothing is assumed about the transcript beyond it being prose, possibly
/// with markdown-like list markers.
#[async_trait]
pub trait AgentPipeline: Send + Sync {
    async fn run(&self, request: &ProposalRequest, stages: &[StagePrompt])
    -> ProposalResult<String>;
}
