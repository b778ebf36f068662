use cs_core::User;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User DTO for JSON serialization
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            name: u.name,
            is_active: u.is_active,
            created_at: u.created_at,
        }
    }
}
