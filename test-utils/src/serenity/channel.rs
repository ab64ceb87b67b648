//! Test factory for creating Serenity GuildChannel objects.
//!
//! This module provides factory functions for creating mock Serenity `GuildChannel`
//! structs for testing purposes. These factories create valid channel objects by
//! deserializing JSON, simulating what Discord's API would return.

use serenity::all::GuildChannel;

/// Creates a test Serenity text GuildChannel.
///
/// Shorthand for `create_test_guild_channel_with_kind` with channel type `0`
/// (guild text channel).
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::channel::create_test_guild_channel;
///
/// let channel = create_test_guild_channel(111, 123456789, "general");
/// ```
pub fn create_test_guild_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    create_test_guild_channel_with_kind(channel_id, guild_id, name, 0)
}

/// Creates a test Serenity GuildChannel with an explicit channel type.
///
/// Channel types follow Discord's numbering: `0` text, `2` voice, `4` category.
/// Useful for asserting that sync logic skips non-text channels.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
/// - `kind` - Discord channel type number
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_guild_channel_with_kind(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": kind,
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": 0,
        "nsfw": false,
        "rate_limit_per_user": 0,
        "topic": null,
        "parent_id": null,
        "last_message_id": null,
        "permission_overwrites": [],
    }))
    .expect("Failed to create test guild channel - invalid JSON structure")
}
