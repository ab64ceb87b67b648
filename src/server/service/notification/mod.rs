//! Discord notification service for party rank announcements.
//!
//! This module provides the `PartyRankNotificationService` for posting contest
//! announcements into linked Discord channels. Every post is recorded per
//! (party rank, channel, kind) so the same announcement is never sent twice,
//! no matter how often the scheduler or a moderator retries.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Embed building utilities
//! - `status` - Status transition announcements
//! - `results` - The results podium post
//! - `reminder` - Rating deadline reminders
//! - `link` - Channel link confirmations

pub mod builder;
pub mod link;
pub mod reminder;
pub mod results;
pub mod status;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::discord::{PartyRankChannelRepository, PartyRankMessageRepository},
    error::AppError,
    model::discord::MessageKind,
};

/// Service posting party rank announcements into linked Discord channels.
///
/// Holds the database connection, the Discord HTTP client, and the public
/// application URL for embed links. The service reads the channel links and
/// message records through repositories; a failure to post into one channel
/// never prevents posting into the others.
pub struct PartyRankNotificationService<'a> {
    /// Database connection for channel links and message records
    db: &'a DatabaseConnection,
    /// Discord HTTP client for sending messages
    http: Arc<Http>,
    /// Base application URL for embedding links in announcements
    app_url: String,
}

impl<'a> PartyRankNotificationService<'a> {
    /// Creates a new PartyRankNotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `app_url` - Base URL of the application for embedding in announcements
    ///
    /// # Returns
    /// - `PartyRankNotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>, app_url: String) -> Self {
        Self { db, http, app_url }
    }

    /// The public contest page, used as the embed link target.
    fn party_rank_url(&self, party_rank_id: i32) -> String {
        format!("{}/party-ranks/{}", self.app_url, party_rank_id)
    }

    /// Posts an embed of the given kind to every channel linked to a contest.
    ///
    /// Channels that already carry a message of this kind are skipped. Send
    /// failures are logged and the remaining channels still get their post;
    /// only database errors abort the loop.
    ///
    /// # Arguments
    /// - `party_rank_id` - Contest the announcement belongs to
    /// - `kind` - Message category for the dedup record
    /// - `embed` - The announcement embed
    ///
    /// # Returns
    /// - `Ok(())` - All channels handled (posted, skipped, or logged)
    /// - `Err(AppError::DbErr)` - Database error reading links or recording
    async fn post_to_linked_channels(
        &self,
        party_rank_id: i32,
        kind: MessageKind,
        embed: &CreateEmbed,
    ) -> Result<(), AppError> {
        let link_repo = PartyRankChannelRepository::new(self.db);
        let message_repo = PartyRankMessageRepository::new(self.db);

        let links = link_repo.get_by_party_rank(party_rank_id).await?;

        for link in links {
            if message_repo
                .exists(party_rank_id, link.channel_id, kind)
                .await?
            {
                continue;
            }

            self.post_to_channel(party_rank_id, link.channel_id, kind, embed)
                .await?;
        }

        Ok(())
    }

    /// Posts an embed into a single channel and records it.
    ///
    /// The caller is responsible for the dedup check; this only sends and
    /// records. A Discord send failure is logged and swallowed so the record
    /// stays absent and a later attempt can retry the channel.
    async fn post_to_channel(
        &self,
        party_rank_id: i32,
        channel_id: u64,
        kind: MessageKind,
        embed: &CreateEmbed,
    ) -> Result<(), AppError> {
        let message_repo = PartyRankMessageRepository::new(self.db);

        let message = CreateMessage::new().embed(embed.clone());

        match ChannelId::new(channel_id).send_message(&self.http, message).await {
            Ok(msg) => {
                message_repo
                    .record(party_rank_id, channel_id, msg.id.get(), kind)
                    .await?;

                tracing::info!(
                    "Posted {} for party rank {} to channel {}",
                    kind.as_str(),
                    party_rank_id,
                    channel_id
                );
            }
            Err(e) => {
                tracing::error!(
                    "Failed to post {} for party rank {} to channel {}: {}",
                    kind.as_str(),
                    party_rank_id,
                    channel_id,
                    e
                );
                // Continue posting to other channels even if one fails
            }
        }

        Ok(())
    }
}
