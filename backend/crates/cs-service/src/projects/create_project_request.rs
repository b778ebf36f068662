use cs_core::ProjectType;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project title (required)
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub project_type: ProjectType,

    #[serde(default)]
    pub technologies: Vec<String>,
}
