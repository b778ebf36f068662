use crate::{AgentPipeline, ProposalError, ProposalResult, StagePrompt};

use cs_core::{ProjectType, ProposalRequest};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

/// Agent pipeline hosted behind an HTTP endpoint.
///
/// POSTs the request and its stage prompts as JSON and expects
/// `{"transcript": "..."}` back.
pub struct HttpAgentPipeline {
    url: String,
    client: ReqwestClient,
}

#[derive(Debug, Serialize)]
struct PipelineRunRequest<'a> {
    project_type: ProjectType,
    technologies: &'a [String],
    additional_info: Option<&'a str>,
    stages: &'a [StagePrompt],
}

#[derive(Debug, Deserialize)]
struct PipelineRunResponse {
    transcript: String,
}

impl HttpAgentPipeline {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AgentPipeline for HttpAgentPipeline {
    async fn run(
        &self,
        request: &ProposalRequest,
        stages: &[StagePrompt],
    ) -> ProposalResult<String> {
        let body = PipelineRunRequest {
            project_type: request.project_type,
            technologies: &request.technologies,
            additional_info: request.additional_info.as_deref(),
            stages,
        };

        debug!("Calling agent pipeline at {}", self.url);
        let response = self.client.post(&self.url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!("Agent pipeline answered {}: {}", status, detail);
            return Err(ProposalError::pipeline(format!(
                "pipeline returned HTTP {}",
                status.as_u16()
            )));
        }

        let parsed: PipelineRunResponse = response.json().await?;
        debug!(
            "Agent pipeline returned {} bytes of transcript",
            parsed.transcript.len()
        );

        Ok(parsed.transcript)
    }
}
