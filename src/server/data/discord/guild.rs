use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::discord::DiscordGuild;

pub struct DiscordGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a guild the bot is present in.
    ///
    /// Creates the guild record or refreshes its name if the guild ID is
    /// already known. Called from gateway guild events.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    /// - `name`: Guild display name
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)`: The created or updated guild domain model
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(&self, guild_id: u64, name: &str) -> Result<DiscordGuild, DbErr> {
        let entity = entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .update_columns([entity::discord_guild::Column::Name])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordGuild::from_entity(entity)
    }

    /// Deletes a guild by its Discord guild ID.
    ///
    /// Channel records cascade away with the guild.
    ///
    /// # Returns
    /// - `Ok(())`: Guild deleted (or didn't exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, guild_id: u64) -> Result<(), DbErr> {
        entity::prelude::DiscordGuild::delete_many()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Finds a guild by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuild))`: Guild found in database
    /// - `Ok(None)`: Guild not found (bot not in this guild)
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<DiscordGuild>, DbErr> {
        let entity = entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(DiscordGuild::from_entity).transpose()
    }

    /// Gets all guilds the bot is present in, ordered by name
    ///
    /// # Returns
    /// - `Ok(guilds)`: All synced guilds
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<DiscordGuild>, DbErr> {
        let entities = entity::prelude::DiscordGuild::find()
            .order_by_asc(entity::discord_guild::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(DiscordGuild::from_entity).collect()
    }
}
