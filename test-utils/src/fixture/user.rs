//! User fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating user entity models without database insertion.

use chrono::Utc;
use entity::user;

/// Default test Discord ID.
pub const DEFAULT_DISCORD_ID: &str = "123456789";

/// Default test username.
pub const DEFAULT_USERNAME: &str = "Test User";

/// Creates a user entity model with default values.
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
///
/// # Returns
/// - `UserEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    discord_id: String,
    username: String,
    avatar_url: Option<String>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            discord_id: DEFAULT_DISCORD_ID.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            avatar_url: None,
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the Discord ID.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the avatar URL.
    pub fn avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        let now = Utc::now();
        user::Model {
            id: self.id,
            discord_id: self.discord_id,
            username: self.username,
            avatar_url: self.avatar_url,
            created_at: now,
            last_login: now,
        }
    }
}
