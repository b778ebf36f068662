//! Transcript parser.
//!
//! A heuristic, line-oriented scraper over agent prose. It never fails: the
//! [`extract`] stage collects whatever the transcript offers and [`normalize`]
//! fills gaps with fixed fallback content, so [`parse`] is total.

mod fallback;
mod line;
mod partial_proposal;
mod scan_state;

pub use fallback::{
    DEFAULT_TITLE, MAX_GOALS, MAX_TASKS, MIN_GOALS, MIN_TASKS, coarse_fallback,
    fallback_description, fallback_goals, fallback_tasks,
};
pub use line::Line;
pub use partial_proposal::PartialProposal;
pub use scan_state::{
    ScanState, TaskStep, description_step, goals_step, strip_task_title, tasks_step,
    title_candidate,
};

use cs_core::{ProjectProposal, ProposalTask};

use log::warn;

/// Parse a transcript into a proposal. Technologies are passed through as-is.
pub fn parse(transcript: &str, technologies: &[String]) -> ProjectProposal {
    normalize(extract(transcript), technologies)
}

/// Single forward pass feeding every line to the title rule and to the three
/// block scanners, each of which keeps its own [`ScanState`].
pub fn extract(transcript: &str) -> PartialProposal {
    let mut partial = PartialProposal::default();

    let mut description = ScanState::Scanning;
    let mut goals = ScanState::Scanning;
    let mut tasks = ScanState::Scanning;
    let mut current_task: Option<ProposalTask> = None;

    for raw in transcript.trim().split('\n') {
        let line = Line::new(raw);

        if partial.title.is_none() {
            partial.title = title_candidate(&line).map(str::to_string);
        }

        let (next, appended) = description_step(description, &line);
        description = next;
        partial.description_lines.extend(appended);

        let (next, goal) = goals_step(goals, &line);
        goals = next;
        partial.goals.extend(goal);

        let (next, step) = tasks_step(tasks, &line);
        tasks = next;
        match step {
            TaskStep::Start(task) => {
                if let Some(done) = current_task.replace(task) {
                    partial.tasks.push(done);
                }
            }
            TaskStep::Continue(text) => {
                // Always space-prefixed, even onto an empty description
                if let Some(task) = current_task.as_mut() {
                    task.description.push(' ');
                    task.description.push_str(&text);
                }
            }
            TaskStep::Ignore => {}
        }
    }

    partial.tasks.extend(current_task);
    partial
}

/// Apply caps and fallbacks so the proposal always has a title, a
/// description, 2-5 goals and 3-8 tasks.
pub fn normalize(partial: PartialProposal, technologies: &[String]) -> ProjectProposal {
    let PartialProposal {
        title,
        description_lines,
        mut goals,
        mut tasks,
    } = partial;

    if goals.len() < MIN_GOALS {
        warn!("Only {} goals extracted, using fallback goals", goals.len());
        goals = fallback_goals();
    }
    goals.truncate(MAX_GOALS);

    if tasks.len() < MIN_TASKS {
        warn!("Only {} tasks extracted, using fallback tasks", tasks.len());
        tasks = fallback_tasks();
    }
    tasks.truncate(MAX_TASKS);

    let description = description_lines.join(" ");
    let description = if description.is_empty() {
        fallback_description(technologies)
    } else {
        description
    };

    ProjectProposal {
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description,
        goals,
        tasks,
        technologies: technologies.to_vec(),
    }
}
