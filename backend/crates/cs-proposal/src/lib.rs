//! Project proposal drafting.
//!
//! An external agent pipeline writes a free-text transcript for a requested
//! project; this crate assembles the stage prompts sent to it and scrapes the
//! transcript back into a [`ProjectProposal`](cs_core::ProjectProposal).

pub mod error;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{ProposalError, ProposalResult};
pub use parser::{PartialProposal, ScanState, coarse_fallback, extract, normalize, parse};
pub use pipeline::{AgentPipeline, HttpAgentPipeline, RecordedTranscriptPipeline};
pub use prompts::{AgentPersona, PipelineStage, StagePrompt, build_stage_prompts};
pub use service::{ProposalService, parse_guarded};
