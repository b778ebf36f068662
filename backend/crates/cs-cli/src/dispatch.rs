//! Maps parsed commands onto `cs-service` operations.

use crate::{
    commands::Commands,
    error::{CliError, Result as CliErrorResult},
    project_commands::ProjectCommands,
    proposal_commands::ProposalCommands,
    task_commands::TaskCommands,
    user_commands::UserCommands,
};

use cs_config::ProposalConfig;
use cs_core::{ProjectType, ProposalRequest, TaskStatus};
use cs_proposal::{
    AgentPipeline, HttpAgentPipeline, ProposalService, RecordedTranscriptPipeline, parse,
    parse_guarded,
};
use cs_service::{
    CreateProjectRequest, CreateTaskRequest, CreateUserRequest, Page, ServiceError,
    UpdateTaskRequest,
};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use error_location::ErrorLocation;
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;

pub(crate) async fn dispatch(
    command: Commands,
    pool: &SqlitePool,
    proposal_config: &ProposalConfig,
) -> CliErrorResult<Value> {
    match command {
        Commands::User { action } => match action {
            UserCommands::Create { email, name } => {
                to_json(cs_service::create_user(pool, CreateUserRequest { email, name }).await?)
            }
            UserCommands::List { skip, limit } => {
                to_json(cs_service::list_users(pool, Page::new(skip, limit)).await?)
            }
            UserCommands::Get { id } => to_json(cs_service::get_user(pool, &id).await?),
        },

        Commands::Project { action } => match action {
            ProjectCommands::Create {
                owner_id,
                title,
                description,
                project_type,
                technologies,
            } => {
                let request = CreateProjectRequest {
                    title,
                    description,
                    project_type: parse_project_type(&project_type)?,
                    technologies,
                };
                to_json(cs_service::create_project(pool, &owner_id, request).await?)
            }
            ProjectCommands::List { skip, limit } => {
                to_json(cs_service::list_projects(pool, Page::new(skip, limit)).await?)
            }
            ProjectCommands::Get { id } => to_json(cs_service::get_project(pool, &id).await?),
            ProjectCommands::ByUser { user_id } => {
                to_json(cs_service::list_user_projects(pool, &user_id).await?)
            }
        },

        Commands::Task { action } => match action {
            TaskCommands::Create {
                project_id,
                title,
                description,
            } => {
                let request = CreateTaskRequest {
                    title,
                    description,
                    project_id,
                };
                to_json(cs_service::create_task(pool, request).await?)
            }
            TaskCommands::List { skip, limit } => {
                to_json(cs_service::list_tasks(pool, Page::new(skip, limit)).await?)
            }
            TaskCommands::Get { id } => to_json(cs_service::get_task(pool, &id).await?),
            TaskCommands::SetStatus { id, status } => {
                let status = status.parse::<TaskStatus>().map_err(ServiceError::from)?;
                to_json(
                    cs_service::update_task_status(pool, &id, UpdateTaskRequest { status })
                        .await?,
                )
            }
            TaskCommands::ByProject { project_id } => {
                to_json(cs_service::list_project_tasks(pool, &project_id).await?)
            }
        },

        Commands::Proposal { action } => match action {
            ProposalCommands::Parse {
                transcript,
                technologies,
            } => {
                let text = read_transcript(&transcript).await?;
                to_json(parse_guarded(text, technologies, parse).await)
            }
            ProposalCommands::Generate {
                project_type,
                technologies,
                info,
                transcript,
                accept_for,
            } => {
                let project_type = parse_project_type(&project_type)?;
                let request = ProposalRequest {
                    additional_info: info,
                    ..ProposalRequest::new(project_type, technologies)
                };

                let service = ProposalService::new(
                    select_pipeline(transcript, proposal_config)?,
                    proposal_config.timeout(),
                );
                let proposal = cs_service::generate_proposal(&service, request).await?;

                match accept_for {
                    Some(owner_id) => to_json(
                        cs_service::accept_proposal(pool, &owner_id, project_type, proposal)
                            .await?,
                    ),
                    None => to_json(proposal),
                }
            }
        },
    }
}

/// Recorded transcript when given, otherwise the configured pipeline URL.
#[track_caller]
pub(crate) fn select_pipeline(
    transcript: Option<PathBuf>,
    proposal_config: &ProposalConfig,
) -> CliErrorResult<Arc<dyn AgentPipeline>> {
    if let Some(path) = transcript {
        return Ok(Arc::new(RecordedTranscriptPipeline::new(path)));
    }

    match proposal_config.pipeline_url.as_deref() {
        Some(url) => Ok(Arc::new(HttpAgentPipeline::new(url))),
        None => Err(CliError::Usage {
            message: "No pipeline configured: pass --transcript or set \
                      CS_PROPOSAL_PIPELINE_URL"
                .to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

fn parse_project_type(value: &str) -> CliErrorResult<ProjectType> {
    Ok(value.parse::<ProjectType>().map_err(ServiceError::from)?)
}

async fn read_transcript(path: &Path) -> CliErrorResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn to_json<T: Serialize>(value: T) -> CliErrorResult<Value> {
    Ok(serde_json::to_value(value)?)
}
