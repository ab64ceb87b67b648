//! Test factory for creating Serenity Guild objects.
//!
//! This module provides factory functions for creating mock Serenity `Guild` structs
//! for testing purposes. These factories create valid Guild objects by deserializing
//! JSON, simulating what Discord's gateway would deliver on `guild_create`.

use serenity::all::{Guild, GuildChannel};

/// Creates a test Serenity Guild with the provided channels.
///
/// Creates a Guild object by deserializing JSON with the provided values. The
/// channels are embedded the way the gateway delivers them on `guild_create`,
/// so guild sync logic can be exercised without a live connection. All other
/// fields are set to reasonable defaults.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `channels` - Channels present in the guild payload
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{channel::create_test_guild_channel, guild::create_test_guild};
///
/// // Create guild without channels
/// let guild = create_test_guild(123456789, "Test Guild", vec![]);
///
/// // Create guild with a text channel
/// let general = create_test_guild_channel(111, 123456789, "general");
/// let guild = create_test_guild(123456789, "Test Guild", vec![general]);
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, channels: Vec<GuildChannel>) -> Guild {
    let channels = serde_json::to_value(channels)
        .expect("Failed to serialize test guild channels");

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": channels,
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
