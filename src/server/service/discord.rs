//! Discord guild/channel mirroring and party rank channel links.
//!
//! The bot mirrors the guilds it is in and their text channels into the
//! database; the REST API reads that mirror for the channel-link picker and
//! never talks to Discord directly. Linking a channel to a party rank only
//! records the link; posting into it is the notification service's job.

use sea_orm::DatabaseConnection;

use crate::{
    model::discord::{DiscordGuildChannelDto, DiscordGuildDto, PartyRankChannelDto},
    server::{
        data::{
            discord::{
                DiscordGuildChannelRepository, DiscordGuildRepository, PartyRankChannelRepository,
            },
            party_rank::PartyRankRepository,
        },
        error::AppError,
        model::discord::PartyRankChannelLink,
    },
};

/// Keeps the guild/channel mirror in sync with gateway events.
pub struct DiscordSyncService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordSyncService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Mirrors a guild and its current text channels.
    ///
    /// Upserts the guild row, upserts every given channel, and sweeps
    /// channels that no longer exist on Discord. Channels removed while the
    /// bot was offline disappear here, which cascades into any party rank
    /// links pointing at them.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `name`: Guild display name
    /// - `channels`: The guild's current text channels as (id, name) pairs
    pub async fn sync_guild(
        &self,
        guild_id: u64,
        name: &str,
        channels: &[(u64, String)],
    ) -> Result<(), AppError> {
        let guild_repo = DiscordGuildRepository::new(self.db);
        let channel_repo = DiscordGuildChannelRepository::new(self.db);

        guild_repo.upsert(guild_id, name).await?;

        for (channel_id, channel_name) in channels {
            channel_repo
                .upsert(guild_id, *channel_id, channel_name)
                .await?;
        }

        let keep: Vec<u64> = channels.iter().map(|(id, _)| *id).collect();
        channel_repo.delete_stale(guild_id, &keep).await?;

        tracing::info!(
            "Synced guild {} ({}) with {} text channels",
            name,
            guild_id,
            channels.len()
        );

        Ok(())
    }

    /// Removes a guild and its channels from the mirror.
    pub async fn remove_guild(&self, guild_id: u64) -> Result<(), AppError> {
        let guild_repo = DiscordGuildRepository::new(self.db);
        let channel_repo = DiscordGuildChannelRepository::new(self.db);

        channel_repo.delete_stale(guild_id, &[]).await?;
        guild_repo.delete(guild_id).await?;

        tracing::info!("Removed guild {} from the mirror", guild_id);

        Ok(())
    }
}

/// Read side of the mirror, backing the channel-link picker.
pub struct DiscordGuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every guild the bot is in.
    pub async fn get_guilds(&self) -> Result<Vec<DiscordGuildDto>, AppError> {
        let guilds = DiscordGuildRepository::new(self.db).get_all().await?;

        Ok(guilds.into_iter().map(|guild| guild.into_dto()).collect())
    }

    /// Lists a synced guild's text channels, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordGuildChannelDto>)`: The guild's synced channels
    /// - `Err(AppError::NotFound)`: The bot is not in this guild
    pub async fn get_channels(
        &self,
        guild_id: u64,
    ) -> Result<Vec<DiscordGuildChannelDto>, AppError> {
        let guild_repo = DiscordGuildRepository::new(self.db);
        let channel_repo = DiscordGuildChannelRepository::new(self.db);

        guild_repo
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} is not synced", guild_id)))?;

        let channels = channel_repo.get_by_guild_id(guild_id).await?;

        Ok(channels
            .into_iter()
            .map(|channel| channel.into_dto())
            .collect())
    }
}

/// Manages the links between party ranks and Discord channels.
pub struct PartyRankChannelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyRankChannelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a synced channel to a party rank.
    ///
    /// The channel must be in the mirror and belong to the given guild.
    /// Posting the confirmation embed is the caller's concern.
    ///
    /// # Returns
    /// - `Ok(PartyRankChannelDto)`: The created link
    /// - `Err(AppError::BadRequest)`: Channel not synced or in another guild
    /// - `Err(AppError::Conflict)`: Channel already linked to this contest
    pub async fn link(
        &self,
        party_rank_id: i32,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<PartyRankChannelDto, AppError> {
        let channel_repo = DiscordGuildChannelRepository::new(self.db);
        let link_repo = PartyRankChannelRepository::new(self.db);

        self.require_party_rank(party_rank_id).await?;

        let channel = channel_repo
            .find_by_channel_id(channel_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Channel {} is not synced", channel_id))
            })?;

        if channel.guild_id != guild_id {
            return Err(AppError::BadRequest(format!(
                "Channel {} does not belong to guild {}",
                channel_id, guild_id
            )));
        }

        if link_repo.find(party_rank_id, channel_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Channel {} is already linked to this party rank",
                channel_id
            )));
        }

        let link = link_repo.create(party_rank_id, channel_id).await?;

        tracing::info!(
            "Linked channel {} ({}) to party rank {}",
            channel.name,
            channel.channel_id,
            party_rank_id
        );

        Ok(PartyRankChannelLink {
            id: link.id,
            party_rank_id: link.party_rank_id,
            guild_id: channel.guild_id,
            channel_id: channel.channel_id,
            channel_name: channel.name,
        }
        .into_dto())
    }

    /// Lists a party rank's channel links.
    pub async fn list(&self, party_rank_id: i32) -> Result<Vec<PartyRankChannelDto>, AppError> {
        let link_repo = PartyRankChannelRepository::new(self.db);

        self.require_party_rank(party_rank_id).await?;

        let links = link_repo.get_by_party_rank(party_rank_id).await?;

        Ok(links.into_iter().map(|link| link.into_dto()).collect())
    }

    /// Removes a channel link.
    ///
    /// # Returns
    /// - `Ok(())`: Link removed
    /// - `Err(AppError::NotFound)`: No such link on this party rank
    pub async fn unlink(&self, party_rank_id: i32, link_id: i32) -> Result<(), AppError> {
        let link_repo = PartyRankChannelRepository::new(self.db);

        let link = link_repo
            .get_by_id(link_id)
            .await?
            .filter(|link| link.party_rank_id == party_rank_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Link {} not found on party rank {}",
                    link_id, party_rank_id
                ))
            })?;

        link_repo.delete(link.id).await?;

        Ok(())
    }

    async fn require_party_rank(&self, party_rank_id: i32) -> Result<(), AppError> {
        PartyRankRepository::new(self.db)
            .get_by_id(party_rank_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Party rank {} not found", party_rank_id)))?;

        Ok(())
    }
}
