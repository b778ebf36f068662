//! Per-line transition functions for the block scanners.
//!
//! Each block (description, goals, tasks) is scanned independently, so a line
//! can open one block while another is still open. Marker checks always run
//! first: a line that mentions a block's marker (re)opens that block and is
//! never itself content of it.

use super::Line;

use cs_core::ProposalTask;

const DESCRIPTION_MARKERS: [&str; 2] = ["descrição", "description"];
const DESCRIPTION_TERMINATORS: [&str; 2] = ["objetivo", "goal"];
const GOAL_MARKERS: [&str; 3] = ["objetivo", "goal", "meta"];
const TASK_MARKERS: [&str; 2] = ["tarefa", "task"];

/// Words dropped from the front of a task title, alongside `-`, `:`, spaces
/// and digits.
const TASK_TITLE_WORDS: [&str; 3] = ["Tarefa", "Task", "task"];

const TITLE_MAX_CHARS: usize = 100;
const TASK_NUMBER_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Scanning,
    InDescription,
    InGoals,
    InTasks,
}

/// What a line contributes to the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStep {
    Ignore,
    /// Finalize the open task (if any) and start this one
    Start(ProposalTask),
    /// Extra prose for the open task's description
    Continue(String),
}

/// The first short, non-blank line that is not a list item or heading.
pub fn title_candidate<'a>(line: &Line<'a>) -> Option<&'a str> {
    let qualifies = !line.is_blank()
        && !line.raw.starts_with('-')
        && !line.raw.starts_with('#')
        && line.trimmed.chars().count() < TITLE_MAX_CHARS;

    qualifies.then_some(line.trimmed)
}

pub fn description_step(state: ScanState, line: &Line<'_>) -> (ScanState, Option<String>) {
    if line.mentions_any(&DESCRIPTION_MARKERS) {
        return (ScanState::InDescription, None);
    }
    if state != ScanState::InDescription || line.is_blank() {
        return (state, None);
    }
    if line.mentions_any(&DESCRIPTION_TERMINATORS)
        || line.raw.starts_with('-')
        || line.raw.starts_with('#')
    {
        return (ScanState::Scanning, None);
    }

    (ScanState::InDescription, Some(line.trimmed.to_string()))
}

/// Goals are dash items. Only a numbered `1.` line closes the block; blank
/// lines and other prose leave it open.
pub fn goals_step(state: ScanState, line: &Line<'_>) -> (ScanState, Option<String>) {
    if line.mentions_any(&GOAL_MARKERS) {
        return (ScanState::InGoals, None);
    }
    if state != ScanState::InGoals {
        return (state, None);
    }
    if let Some(goal) = line.trimmed.strip_prefix('-') {
        return (ScanState::InGoals, Some(goal.trim().to_string()));
    }
    if line.trimmed.starts_with("1.") {
        return (ScanState::Scanning, None);
    }

    (ScanState::InGoals, None)
}

pub fn tasks_step(state: ScanState, line: &Line<'_>) -> (ScanState, TaskStep) {
    if line.mentions_any(&TASK_MARKERS) {
        return (ScanState::InTasks, TaskStep::Ignore);
    }
    if state != ScanState::InTasks || line.is_blank() {
        return (state, TaskStep::Ignore);
    }
    if starts_task(line) {
        return (ScanState::InTasks, TaskStep::Start(split_task(line.trimmed)));
    }

    (
        ScanState::InTasks,
        TaskStep::Continue(line.trimmed.to_string()),
    )
}

fn starts_task(line: &Line<'_>) -> bool {
    line.trimmed.starts_with('-')
        || line.trimmed.starts_with("Task")
        || line
            .raw
            .chars()
            .take(TASK_NUMBER_WINDOW)
            .any(|c| matches!(c, '1'..='9'))
}

/// `head: body` becomes a task titled `head` (markers stripped) described by
/// `body`; without a colon the whole line is the title.
fn split_task(text: &str) -> ProposalTask {
    match text.split_once(':') {
        Some((head, body)) => ProposalTask::new(strip_task_title(head), body.trim()),
        None => ProposalTask::new(strip_task_title(text), ""),
    }
}

/// Drop leading list/numbering markers and the words `Tarefa`/`Task`/`task`.
///
/// Within [`tasks_step`] any line containing those words is a block marker
/// and never reaches here, so only the marker stripping applies there.
pub fn strip_task_title(head: &str) -> &str {
    let mut rest = head;
    loop {
        rest = rest.trim_start_matches(|c: char| {
            c == '-' || c == ':' || c == ' ' || c.is_ascii_digit()
        });
        match TASK_TITLE_WORDS
            .iter()
            .find_map(|word| rest.strip_prefix(word))
        {
            Some(after) => rest = after,
            None => return rest.trim_end(),
        }
    }
}
