use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::discord::DiscordGuildChannel;

/// Repository for Discord guild channel database operations.
///
/// Provides CRUD operations for Discord text channels, converting between entity
/// models and domain models at the infrastructure boundary. Handles channel
/// creation, updates, deletion, and retrieval operations.
pub struct DiscordGuildChannelRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildChannelRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a single channel from Discord API data.
    ///
    /// Creates or updates a channel record in the database. Updates the channel's
    /// name if it already exists based on channel_id. Converts the entity model to
    /// a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    /// - `channel_id` - Discord's unique identifier for the channel
    /// - `name` - Channel display name
    ///
    /// # Returns
    /// - `Ok(DiscordGuildChannel)` - Successfully created or updated channel domain model
    /// - `Err(DbErr)` - Database error during insert/update or entity conversion failure
    pub async fn upsert(
        &self,
        guild_id: u64,
        channel_id: u64,
        name: &str,
    ) -> Result<DiscordGuildChannel, DbErr> {
        let entity = entity::prelude::DiscordGuildChannel::insert(
            entity::discord_guild_channel::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                channel_id: ActiveValue::Set(channel_id.to_string()),
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(chrono::Utc::now()),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(entity::discord_guild_channel::Column::ChannelId)
                .update_columns([entity::discord_guild_channel::Column::Name])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordGuildChannel::from_entity(entity)
    }

    /// Deletes a channel by its Discord channel ID.
    ///
    /// Removes a channel record from the database when a channel is deleted from
    /// Discord. Party rank links to the channel cascade away with it.
    ///
    /// # Arguments
    /// - `channel_id` - Discord's unique identifier for the channel
    ///
    /// # Returns
    /// - `Ok(())` - Channel deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, channel_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordGuildChannel::delete_many()
            .filter(entity::discord_guild_channel::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes every channel of a guild except the given ones.
    ///
    /// Used during guild sync to drop channels that no longer exist on Discord.
    /// With an empty `keep` slice all of the guild's channels are removed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    /// - `keep` - Channel IDs that remain valid and must survive the sweep
    ///
    /// # Returns
    /// - `Ok(())` - Stale channels deleted
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_stale(&self, guild_id: u64, keep: &[u64]) -> Result<(), DbErr> {
        let keep_ids: Vec<String> = keep.iter().map(|id| id.to_string()).collect();

        let mut query = entity::prelude::DiscordGuildChannel::delete_many()
            .filter(entity::discord_guild_channel::Column::GuildId.eq(guild_id.to_string()));

        if !keep_ids.is_empty() {
            query = query
                .filter(entity::discord_guild_channel::Column::ChannelId.is_not_in(keep_ids));
        }

        query.exec(self.db).await?;
        Ok(())
    }

    /// Retrieves all channels for a specific guild.
    ///
    /// Fetches all channel records belonging to a guild, ordered by name for
    /// display purposes. Converts entity models to domain models at the
    /// repository boundary.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordGuildChannel>)` - List of channel domain models in name order
    /// - `Err(DbErr)` - Database error during query or entity conversion failure
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<DiscordGuildChannel>, DbErr> {
        let entities = entity::prelude::DiscordGuildChannel::find()
            .filter(entity::discord_guild_channel::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::discord_guild_channel::Column::Name)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(DiscordGuildChannel::from_entity)
            .collect()
    }

    /// Finds a channel by its Discord channel ID
    ///
    /// # Arguments
    /// - `channel_id` - Discord's unique identifier for the channel
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuildChannel))` - Channel found in database
    /// - `Ok(None)` - Channel not synced
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_channel_id(
        &self,
        channel_id: u64,
    ) -> Result<Option<DiscordGuildChannel>, DbErr> {
        let entity = entity::prelude::DiscordGuildChannel::find()
            .filter(entity::discord_guild_channel::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(DiscordGuildChannel::from_entity).transpose()
    }
}
