//! Rank item factory for creating test rank item entities.
//!
//! This module provides factory methods for creating rank item entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rank items with customizable fields.
///
/// Provides a builder pattern for creating rank item entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::rank_item::RankItemFactory;
///
/// let item = RankItemFactory::new(&db, party_rank.id, user.id)
///     .name("Take On Me")
///     .media_kind("audio")
///     .media_url("/media/abcd.mp3")
///     .build()
///     .await?;
/// ```
pub struct RankItemFactory<'a> {
    db: &'a DatabaseConnection,
    party_rank_id: i32,
    author_id: i32,
    name: String,
    comment: Option<String>,
    media_kind: String,
    media_url: String,
    start_seconds: Option<i32>,
}

impl<'a> RankItemFactory<'a> {
    /// Creates a new RankItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - comment: `None`
    /// - media_kind: `"youtube"`
    /// - media_url: unique YouTube watch URL
    /// - start_seconds: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `party_rank_id` - Party rank this item belongs to
    /// - `author_id` - User ID of the submitting member
    ///
    /// # Returns
    /// - `RankItemFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, party_rank_id: i32, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            party_rank_id,
            author_id,
            name: format!("Item {}", id),
            comment: None,
            media_kind: "youtube".to_string(),
            media_url: format!("https://www.youtube.com/watch?v=test{:07}", id),
            start_seconds: None,
        }
    }

    /// Sets the item name.
    ///
    /// # Arguments
    /// - `name` - Display name for the item
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the author comment.
    ///
    /// # Arguments
    /// - `comment` - Optional comment attached to the item
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Sets the media kind.
    ///
    /// # Arguments
    /// - `media_kind` - One of `"video"`, `"audio"`, `"image"`, `"youtube"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn media_kind(mut self, media_kind: impl Into<String>) -> Self {
        self.media_kind = media_kind.into();
        self
    }

    /// Sets the media URL.
    ///
    /// # Arguments
    /// - `media_url` - Playback URL for the item media
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = media_url.into();
        self
    }

    /// Sets the playback start offset.
    ///
    /// # Arguments
    /// - `start_seconds` - Optional offset in seconds where playback begins
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_seconds(mut self, start_seconds: Option<i32>) -> Self {
        self.start_seconds = start_seconds;
        self
    }

    /// Builds and inserts the rank item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rank_item::Model)` - Created rank item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rank_item::Model, DbErr> {
        let now = Utc::now();
        entity::rank_item::ActiveModel {
            id: ActiveValue::NotSet,
            party_rank_id: ActiveValue::Set(self.party_rank_id),
            author_id: ActiveValue::Set(self.author_id),
            name: ActiveValue::Set(self.name),
            comment: ActiveValue::Set(self.comment),
            media_kind: ActiveValue::Set(self.media_kind),
            media_url: ActiveValue::Set(self.media_url),
            start_seconds: ActiveValue::Set(self.start_seconds),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rank item with default values.
///
/// Shorthand for `RankItemFactory::new(db, party_rank_id, author_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `party_rank_id` - Party rank this item belongs to
/// - `author_id` - User ID of the submitting member
///
/// # Returns
/// - `Ok(entity::rank_item::Model)` - Created rank item entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let item = create_rank_item(&db, party_rank.id, user.id).await?;
/// ```
pub async fn create_rank_item(
    db: &DatabaseConnection,
    party_rank_id: i32,
    author_id: i32,
) -> Result<entity::rank_item::Model, DbErr> {
    RankItemFactory::new(db, party_rank_id, author_id)
        .build()
        .await
}
