//! Discord domain models.
//!
//! Domain models for synced guilds and channels, party rank channel links,
//! and the bookkeeping kinds for messages the bot has posted. String IDs
//! from the database are parsed into u64 values at the repository boundary.

use sea_orm::DbErr;

use crate::{
    model::discord::{DiscordGuildChannelDto, DiscordGuildDto, PartyRankChannelDto},
    server::model::party_rank::PartyRankStatus,
};

/// Discord guild the bot has been invited to.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    pub id: i32,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Guild display name.
    pub name: String,
}

impl DiscordGuild {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::discord_guild::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            id: entity.id,
            guild_id,
            name: entity.name,
        })
    }

    pub fn into_dto(self) -> DiscordGuildDto {
        DiscordGuildDto {
            id: self.id,
            guild_id: self.guild_id,
            name: self.name,
        }
    }
}

/// Text channel within a synced guild.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildChannel {
    pub id: i32,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Discord channel ID as a u64.
    pub channel_id: u64,
    /// Channel display name.
    pub name: String,
}

impl DiscordGuildChannel {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordGuildChannel)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse channel_id or guild_id as u64
    pub fn from_entity(entity: entity::discord_guild_channel::Model) -> Result<Self, DbErr> {
        let channel_id = entity
            .channel_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse channel_id: {}", e)))?;

        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            id: entity.id,
            guild_id,
            channel_id,
            name: entity.name,
        })
    }

    pub fn into_dto(self) -> DiscordGuildChannelDto {
        DiscordGuildChannelDto {
            id: self.id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            name: self.name,
        }
    }
}

/// A party rank's link to a Discord channel, joined with the channel row.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyRankChannelLink {
    pub id: i32,
    pub party_rank_id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub channel_name: String,
}

impl PartyRankChannelLink {
    /// Builds the link domain model from the link row and its channel row.
    ///
    /// # Returns
    /// - `Ok(PartyRankChannelLink)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse channel_id or guild_id as u64
    pub fn from_entities(
        link: entity::party_rank_channel::Model,
        channel: entity::discord_guild_channel::Model,
    ) -> Result<Self, DbErr> {
        let channel = DiscordGuildChannel::from_entity(channel)?;

        Ok(Self {
            id: link.id,
            party_rank_id: link.party_rank_id,
            guild_id: channel.guild_id,
            channel_id: channel.channel_id,
            channel_name: channel.name,
        })
    }

    pub fn into_dto(self) -> PartyRankChannelDto {
        PartyRankChannelDto {
            id: self.id,
            party_rank_id: self.party_rank_id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            channel_name: self.channel_name,
        }
    }
}

/// Category of a message the bot posted into a linked channel.
///
/// Each kind is posted at most once per (party rank, channel) pair; the
/// recorded rows are how reposts are suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Announcement that submissions closed and the watch phase started.
    StatusOngoing,
    /// Announcement that the rating phase started.
    StatusRating,
    /// Announcement that the contest finished.
    StatusFinished,
    /// The results podium.
    Results,
    /// Rating deadline reminder.
    Reminder,
    /// Posted when the channel is first linked to a contest.
    Link,
}

impl MessageKind {
    /// String form used in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StatusOngoing => "status_ongoing",
            Self::StatusRating => "status_rating",
            Self::StatusFinished => "status_finished",
            Self::Results => "results",
            Self::Reminder => "reminder",
            Self::Link => "link",
        }
    }

    /// The announcement kind for a status transition, if the status has one.
    /// Registration has no announcement since channels are linked during it.
    pub fn for_status(status: PartyRankStatus) -> Option<Self> {
        match status {
            PartyRankStatus::Registration => None,
            PartyRankStatus::Ongoing => Some(Self::StatusOngoing),
            PartyRankStatus::Rating => Some(Self::StatusRating),
            PartyRankStatus::Finished => Some(Self::StatusFinished),
        }
    }
}
