//! Rank item fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating rank item entity models without database
//! insertion. Useful for unit testing the score tally.

use chrono::Utc;
use entity::rank_item;

/// Default test item name.
pub const DEFAULT_NAME: &str = "Test Item";

/// Default media kind.
pub const DEFAULT_MEDIA_KIND: &str = "youtube";

/// Default media URL.
pub const DEFAULT_MEDIA_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Creates a rank item entity model with default values.
///
/// # Returns
/// - `rank_item::Model` - In-memory rank item entity
pub fn entity() -> rank_item::Model {
    entity_builder().build()
}

/// Creates a rank item entity builder for customization.
///
/// # Returns
/// - `RankItemEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> RankItemEntityBuilder {
    RankItemEntityBuilder::default()
}

/// Builder for creating customized rank item entity models.
pub struct RankItemEntityBuilder {
    id: i32,
    party_rank_id: i32,
    author_id: i32,
    name: String,
    comment: Option<String>,
    media_kind: String,
    media_url: String,
    start_seconds: Option<i32>,
}

impl Default for RankItemEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            party_rank_id: 1,
            author_id: 1,
            name: DEFAULT_NAME.to_string(),
            comment: None,
            media_kind: DEFAULT_MEDIA_KIND.to_string(),
            media_url: DEFAULT_MEDIA_URL.to_string(),
            start_seconds: None,
        }
    }
}

impl RankItemEntityBuilder {
    /// Sets the item ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the party rank ID.
    pub fn party_rank_id(mut self, party_rank_id: i32) -> Self {
        self.party_rank_id = party_rank_id;
        self
    }

    /// Sets the author's user ID.
    pub fn author_id(mut self, author_id: i32) -> Self {
        self.author_id = author_id;
        self
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the author comment.
    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Sets the media kind.
    pub fn media_kind(mut self, media_kind: impl Into<String>) -> Self {
        self.media_kind = media_kind.into();
        self
    }

    /// Sets the media URL.
    pub fn media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = media_url.into();
        self
    }

    /// Sets the playback start offset.
    pub fn start_seconds(mut self, start_seconds: Option<i32>) -> Self {
        self.start_seconds = start_seconds;
        self
    }

    /// Builds and returns the rank item entity model.
    pub fn build(self) -> rank_item::Model {
        let now = Utc::now();
        rank_item::Model {
            id: self.id,
            party_rank_id: self.party_rank_id,
            author_id: self.author_id,
            name: self.name,
            comment: self.comment,
            media_kind: self.media_kind,
            media_url: self.media_url,
            start_seconds: self.start_seconds,
            created_at: now,
            updated_at: now,
        }
    }
}
