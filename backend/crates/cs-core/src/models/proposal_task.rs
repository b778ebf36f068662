use serde::{Deserialize, Serialize};

/// One step of a drafted project plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalTask {
    pub title: String,
    /// Empty when the source line carried no `title: body` split
    pub description: String,
}

impl ProposalTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
