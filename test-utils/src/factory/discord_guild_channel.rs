//! Discord guild channel factory for creating test channel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test Discord guild channels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discord_guild_channel::GuildChannelFactory;
///
/// let channel = GuildChannelFactory::new(&db, &guild.guild_id)
///     .channel_id("555666777")
///     .name("party-ranks")
///     .build()
///     .await?;
/// ```
pub struct GuildChannelFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    name: String,
}

impl<'a> GuildChannelFactory<'a> {
    /// Creates a new GuildChannelFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: auto-incremented numeric string
    /// - name: `"channel-{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Discord guild ID the channel belongs to
    ///
    /// # Returns
    /// - `GuildChannelFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            channel_id: id.to_string(),
            name: format!("channel-{}", id),
        }
    }

    /// Sets the channel ID.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the channel name.
    ///
    /// # Arguments
    /// - `name` - Display name for the channel
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the channel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discord_guild_channel::Model)` - Created channel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discord_guild_channel::Model, DbErr> {
        entity::discord_guild_channel::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild channel with default values.
///
/// Shorthand for `GuildChannelFactory::new(db, guild_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the channel belongs to
///
/// # Returns
/// - `Ok(entity::discord_guild_channel::Model)` - Created channel entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let channel = create_guild_channel(&db, &guild.guild_id).await?;
/// ```
pub async fn create_guild_channel(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::discord_guild_channel::Model, DbErr> {
    GuildChannelFactory::new(db, guild_id).build().await
}
