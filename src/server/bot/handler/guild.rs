//! Guild event handlers for the guild/channel mirror.
//!
//! The `guild_create` event fires when a guild becomes available to the bot:
//! - On bot startup for each guild the bot is already in
//! - When the bot joins a new guild
//! - When a guild becomes available after a Discord outage
//!
//! Each occurrence re-mirrors the guild and its text channels, which also
//! sweeps channels that were deleted while the bot was offline. Leaving a
//! guild removes the mirror rows; channel links into that guild cascade away
//! with them.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelType, Context, Guild, UnavailableGuild};

use crate::server::service::discord::DiscordSyncService;

/// Handles the guild_create event when a guild becomes available or the bot
/// joins a new guild.
///
/// Mirrors the guild row and its current text channels. Non-text channels
/// (voice, categories, threads) are skipped; they cannot receive the
/// notification embeds.
///
/// # Arguments
/// - `db` - Database connection for the mirror
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `guild` - Full guild data from the gateway
/// - `is_new` - Whether the bot just joined, as opposed to a startup replay
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    if is_new == Some(true) {
        tracing::info!("Joined guild {} ({})", guild.name, guild_id);
    }

    let channels: Vec<(u64, String)> = guild
        .channels
        .values()
        .filter(|channel| channel.kind == ChannelType::Text)
        .map(|channel| (channel.id.get(), channel.name.clone()))
        .collect();

    let sync_service = DiscordSyncService::new(db);
    if let Err(e) = sync_service
        .sync_guild(guild_id, &guild.name, &channels)
        .await
    {
        tracing::error!("Failed to sync guild {}: {:?}", guild_id, e);
    }
}

/// Handles the guild_delete event when the bot leaves a guild.
///
/// A guild going temporarily unavailable during an outage also fires this
/// event with the `unavailable` flag set; the mirror is kept in that case
/// so existing channel links survive the outage.
///
/// # Arguments
/// - `db` - Database connection for the mirror
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `incomplete` - Guild id plus the unavailability flag
/// - `_full` - Cached guild data, if any
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", incomplete.id);
        return;
    }

    let guild_id = incomplete.id.get();

    let sync_service = DiscordSyncService::new(db);
    if let Err(e) = sync_service.remove_guild(guild_id).await {
        tracing::error!("Failed to remove guild {}: {:?}", guild_id, e);
    } else {
        tracing::info!("Removed from guild {}", guild_id);
    }
}
