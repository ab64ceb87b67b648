//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, GuildChannel, etc.) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Overview
//!
//! When testing code that interacts with Discord's API via Serenity, you often
//! need to create mock Serenity structs. These factories provide a consistent
//! way to create these objects with sensible defaults while allowing customization
//! of key fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{channel::create_test_guild_channel, guild::create_test_guild};
//!
//! #[tokio::test]
//! async fn test_guild_sync() {
//!     let general = create_test_guild_channel(111, 123456789, "general");
//!     let guild = create_test_guild(123456789, "Test Guild", vec![general]);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `channel::create_test_guild_channel` - Create Serenity GuildChannel objects

pub mod channel;
pub mod guild;

// Re-export commonly used functions for convenience
pub use channel::create_test_guild_channel;
pub use guild::create_test_guild;
