//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let guild = factory::discord_guild::create_guild(&db).await?;
//!
//!     // Create with all dependencies
//!     let (creator, party_rank) =
//!         factory::helpers::create_party_rank_with_creator(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let party_rank = factory::party_rank::PartyRankFactory::new(&db, creator.id)
//!     .name("Best 80s Synth Tracks")
//!     .status("rating")
//!     .items_per_member(3)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `party_rank` - Create party rank entities
//! - `party_rank_member` - Create membership entities
//! - `party_rank_moderator` - Create moderator entries
//! - `rank_item` - Create rank item entities
//! - `item_rating` - Create item rating entities
//! - `discord_guild` - Create Discord guild entities
//! - `discord_guild_channel` - Create Discord guild channel entities
//! - `media_file` - Create media file records
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod discord_guild;
pub mod discord_guild_channel;
pub mod helpers;
pub mod item_rating;
pub mod media_file;
pub mod party_rank;
pub mod party_rank_member;
pub mod party_rank_moderator;
pub mod rank_item;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use discord_guild::create_guild;
pub use discord_guild_channel::create_guild_channel;
pub use item_rating::create_rating;
pub use media_file::create_media_file;
pub use party_rank::create_party_rank;
pub use party_rank_member::create_member;
pub use party_rank_moderator::create_moderator;
pub use rank_item::create_rank_item;
pub use user::create_user;
