//! User domain models and parameters.
//!
//! Provides the domain model for application users with their Discord identity.
//! Users are created and refreshed by the OAuth login flow.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Application user backed by a Discord account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database id of the user.
    pub id: i32,
    /// Discord ID of the user (stored as String, snowflakes exceed i32).
    pub discord_id: String,
    /// Discord username at last login.
    pub username: String,
    /// Avatar CDN URL, if the user has one.
    pub avatar_url: Option<String>,
    /// Timestamp when the user first logged in.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent login.
    pub last_login: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            username: entity.username,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
            last_login: entity.last_login,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            discord_id: self.discord_id,
            username: self.username,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        }
    }
}

/// Parameters for upserting a user during the OAuth login flow.
///
/// Creates a new user on first login or refreshes username, avatar, and the
/// last_login timestamp on subsequent logins.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user.
    pub discord_id: String,
    /// Current Discord username.
    pub username: String,
    /// Current avatar CDN URL, if any.
    pub avatar_url: Option<String>,
}
