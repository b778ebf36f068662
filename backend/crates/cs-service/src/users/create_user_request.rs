use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// Unique across users (required)
    pub email: String,

    /// Display name (required)
    pub name: String,
}
