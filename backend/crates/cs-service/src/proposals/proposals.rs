//! Proposal operations: draft one from the agent pipeline, or accept a draft
//! as a real project.

use crate::validation::{clean_technologies, require_non_empty};
use crate::{ProjectWithTasksDto, ServiceError, ServiceResult, TaskDto};

use cs_core::{Project, ProjectProposal, ProjectType, ProposalRequest, Task};
use cs_db::{ProjectRepository, UserRepository};
use cs_proposal::ProposalService;

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Draft a proposal. Nothing is persisted.
pub async fn generate_proposal(
    proposals: &ProposalService,
    request: ProposalRequest,
) -> ServiceResult<ProjectProposal> {
    let request = ProposalRequest {
        technologies: clean_technologies(&request.technologies),
        ..request
    };

    Ok(proposals.generate(&request).await?)
}

/// Persist a proposal as a project owned by `owner_id` plus one pending task
/// per proposed task, all in one transaction. Goals are not stored.
pub async fn accept_proposal(
    pool: &SqlitePool,
    owner_id: &str,
    project_type: ProjectType,
    proposal: ProjectProposal,
) -> ServiceResult<ProjectWithTasksDto> {
    let owner_uuid = Uuid::parse_str(owner_id)?;
    let title = require_non_empty(&proposal.title, "title")?;

    UserRepository::new(pool.clone())
        .find_by_id(owner_uuid)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("User {} not found", owner_id)))?;

    let project = Project::new(
        title,
        proposal.description,
        project_type,
        clean_technologies(&proposal.technologies),
        owner_uuid,
    );
    let tasks: Vec<Task> = proposal
        .tasks
        .into_iter()
        .map(|t| Task::new(t.title, t.description, project.id))
        .collect();

    ProjectRepository::new(pool.clone())
        .create_with_tasks(&project, &tasks)
        .await?;

    info!(
        "Accepted proposal '{}' as project {} with {} tasks",
        project.title,
        project.id,
        tasks.len()
    );

    Ok(ProjectWithTasksDto {
        project: project.into(),
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    })
}
