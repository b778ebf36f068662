use crate::{
    AgentPipeline, ProposalError, ProposalResult, build_stage_prompts, coarse_fallback, parse,
};

use cs_core::{ProjectProposal, ProposalRequest};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{error, info};

/// Drafts proposals: prompts the agent pipeline, then scrapes its transcript.
#[derive(Clone)]
pub struct ProposalService {
    pipeline: Arc<dyn AgentPipeline>,
    timeout: Duration,
}

impl ProposalService {
    pub fn new(pipeline: Arc<dyn AgentPipeline>, timeout: Duration) -> Self {
        Self { pipeline, timeout }
    }

    /// Pipeline failures and timeouts are errors; the parse step never is.
    pub async fn generate(&self, request: &ProposalRequest) -> ProposalResult<ProjectProposal> {
        request.validate()?;

        let stages = build_stage_prompts(request);
        info!(
            "Generating {} proposal for [{}] ({} stages)",
            request.project_type.label(),
            request.technologies_label(),
            stages.len()
        );

        let transcript = tokio::time::timeout(self.timeout, self.pipeline.run(request, &stages))
            .await
            .map_err(|_| ProposalError::Timeout {
                secs: self.timeout.as_secs(),
                location: ErrorLocation::from(Location::caller()),
            })??;

        let proposal = parse_guarded(transcript, request.technologies.clone(), parse).await;
        info!(
            "Proposal '{}' drafted: {} goals, {} tasks",
            proposal.title,
            proposal.goals.len(),
            proposal.tasks.len()
        );

        Ok(proposal)
    }
}

/// Run `parser` on the blocking pool. If it panics, log the failure and hand
/// back the coarse fallback built from `technologies`.
pub async fn parse_guarded<F>(
    transcript: String,
    technologies: Vec<String>,
    parser: F,
) -> ProjectProposal
where
    F: FnOnce(&str, &[String]) -> ProjectProposal + Send + 'static,
{
    let worker_technologies = technologies.clone();
    let result =
        tokio::task::spawn_blocking(move || parser(&transcript, &worker_technologies)).await;

    match result {
        Ok(proposal) => proposal,
        Err(join_error) => {
            let reason = if join_error.is_panic() {
                match join_error.into_panic().downcast::<String>() {
                    Ok(msg) => *msg,
                    Err(any) => match any.downcast::<&str>() {
                        Ok(msg) => msg.to_string(),
                        Err(_) => "Unknown panic".to_string(),
                    },
                }
            } else {
                "Parse task cancelled".to_string()
            };

            error!("Transcript parse failed, using fallback proposal: {}", reason);
            coarse_fallback(&technologies)
        }
    }
}
