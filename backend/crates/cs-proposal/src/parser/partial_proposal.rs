use cs_core::ProposalTask;

/// Raw extraction output. Any field may be empty or under-populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialProposal {
    pub title: Option<String>,
    pub description_lines: Vec<String>,
    pub goals: Vec<String>,
    pub tasks: Vec<ProposalTask>,
}
