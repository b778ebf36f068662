//! Structured proposal scraped from an agent transcript.

use crate::ProposalTask;

use serde::{Deserialize, Serialize};

/// Returned directly to the caller; never persisted as-is.
///
/// Once normalized, `goals` holds 2 to 5 entries and `tasks` 3 to 8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProposal {
    pub title: String,
    pub description: String,
    pub goals: Vec<String>,
    pub tasks: Vec<ProposalTask>,
    pub technologies: Vec<String>,
}
