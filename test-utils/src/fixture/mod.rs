//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test business logic without database overhead
//! - **Mocking**: Create test data for mocking repository responses
//! - **Default values**: Provide consistent defaults for factory builders
//! - **Serialization tests**: Test DTO conversion without persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let user = fixture::user::entity();
//!
//! // Create with custom fields
//! let rating = fixture::item_rating::entity_builder()
//!     .value(9.5)
//!     .build();
//! ```

pub mod item_rating;
pub mod party_rank;
pub mod rank_item;
pub mod user;

pub use item_rating::{entity as item_rating_entity, entity_builder as item_rating_entity_builder};
pub use party_rank::{entity as party_rank_entity, entity_builder as party_rank_entity_builder};
pub use rank_item::{entity as rank_item_entity, entity_builder as rank_item_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
