//! Item rating fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating rating entity models without database
//! insertion. Useful for unit testing the score tally.

use chrono::Utc;
use entity::item_rating;

/// Default rating value.
pub const DEFAULT_VALUE: f64 = 5.0;

/// Creates a rating entity model with default values.
///
/// # Returns
/// - `item_rating::Model` - In-memory rating entity
pub fn entity() -> item_rating::Model {
    entity_builder().build()
}

/// Creates a rating entity builder for customization.
///
/// # Returns
/// - `ItemRatingEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> ItemRatingEntityBuilder {
    ItemRatingEntityBuilder::default()
}

/// Builder for creating customized rating entity models.
pub struct ItemRatingEntityBuilder {
    id: i32,
    item_id: i32,
    user_id: i32,
    value: f64,
}

impl Default for ItemRatingEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            item_id: 1,
            user_id: 1,
            value: DEFAULT_VALUE,
        }
    }
}

impl ItemRatingEntityBuilder {
    /// Sets the rating ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the rated item ID.
    pub fn item_id(mut self, item_id: i32) -> Self {
        self.item_id = item_id;
        self
    }

    /// Sets the rating user's ID.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the rating value.
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Builds and returns the rating entity model.
    pub fn build(self) -> item_rating::Model {
        let now = Utc::now();
        item_rating::Model {
            id: self.id,
            item_id: self.item_id,
            user_id: self.user_id,
            value: self.value,
            created_at: now,
            updated_at: now,
        }
    }
}
