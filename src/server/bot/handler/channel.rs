//! Channel event handlers for Discord guild channels.
//!
//! This module handles Discord events related to guild channels, specifically
//! text channels that can be linked to a party rank. The handlers keep the
//! database synchronized with Discord's channel state to enable:
//! - Channel selection in the link picker
//! - Validation that linked channels still exist
//! - Proper cleanup when channels are deleted
//!
//! Only text channels are tracked, as they are the only channel type that can
//! receive announcement messages and embeds.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelType, Context, GuildChannel, Message};

use crate::server::data::discord::DiscordGuildChannelRepository;

/// Handles the channel_create event when a channel is created in a guild.
///
/// Adds the channel to the database if it's a text channel. This makes the
/// channel available in the link picker. Non-text channels (voice,
/// announcement, etc.) are ignored as they cannot receive messages.
///
/// # Arguments
/// - `db` - Database connection for creating the channel record
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `channel` - The newly created guild channel from Discord
pub async fn handle_channel_create(db: &DatabaseConnection, _ctx: Context, channel: GuildChannel) {
    let guild_id = channel.guild_id.get();
    let channel_repo = DiscordGuildChannelRepository::new(db);

    // Only track text channels
    if channel.kind != ChannelType::Text {
        tracing::debug!(
            "Ignoring non-text channel {} (type: {:?}) in guild {}",
            channel.name,
            channel.kind,
            guild_id
        );
        return;
    }

    if let Err(e) = channel_repo
        .upsert(guild_id, channel.id.get(), &channel.name)
        .await
    {
        tracing::error!(
            "Failed to upsert new channel {} in guild {}: {:?}",
            channel.name,
            guild_id,
            e
        );
    } else {
        tracing::debug!("Created channel {} in guild {}", channel.name, guild_id);
    }
}

/// Handles the channel_update event when a channel is updated in a guild.
///
/// Refreshes the stored name so the link picker and the link listings keep
/// showing the current one. A channel converted away from a text channel is
/// dropped from the mirror, which cascades into any links pointing at it.
///
/// # Arguments
/// - `db` - Database connection for updating the channel record
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `_old` - Previous channel data, if cached
/// - `new` - Updated guild channel from Discord
pub async fn handle_channel_update(
    db: &DatabaseConnection,
    _ctx: Context,
    _old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let guild_id = new.guild_id.get();
    let channel_repo = DiscordGuildChannelRepository::new(db);

    if new.kind != ChannelType::Text {
        if let Err(e) = channel_repo.delete(new.id.get()).await {
            tracing::error!(
                "Failed to drop converted channel {} in guild {}: {:?}",
                new.name,
                guild_id,
                e
            );
        }
        return;
    }

    if let Err(e) = channel_repo.upsert(guild_id, new.id.get(), &new.name).await {
        tracing::error!(
            "Failed to upsert updated channel {} in guild {}: {:?}",
            new.name,
            guild_id,
            e
        );
    } else {
        tracing::debug!("Updated channel {} in guild {}", new.name, guild_id);
    }
}

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// Removes the channel from the mirror. Party rank links to the channel
/// cascade away with it, so stale channels never receive announcements.
///
/// # Arguments
/// - `db` - Database connection for deleting the channel record
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `channel` - The deleted guild channel
/// - `_messages` - Cached messages from the channel, if any
pub async fn handle_channel_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let channel_repo = DiscordGuildChannelRepository::new(db);

    if let Err(e) = channel_repo.delete(channel.id.get()).await {
        tracing::error!(
            "Failed to delete channel {} in guild {}: {:?}",
            channel.name,
            channel.guild_id.get(),
            e
        );
    } else {
        tracing::debug!(
            "Deleted channel {} from guild {}",
            channel.name,
            channel.guild_id.get()
        );
    }
}
