//! Item rating factory for creating test rating entities.
//!
//! This module provides factory methods for creating item rating entities with
//! sensible defaults. Ratings usually need explicit values, so the common entry
//! point is `create_rating` with the value spelled out.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item ratings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::item_rating::ItemRatingFactory;
///
/// let rating = ItemRatingFactory::new(&db, item.id, user.id)
///     .value(8.5)
///     .build()
///     .await?;
/// ```
pub struct ItemRatingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    user_id: i32,
    value: f64,
}

impl<'a> ItemRatingFactory<'a> {
    /// Creates a new ItemRatingFactory with default values.
    ///
    /// Defaults:
    /// - value: `5.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `item_id` - Rank item being rated
    /// - `user_id` - Rating member
    ///
    /// # Returns
    /// - `ItemRatingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, item_id: i32, user_id: i32) -> Self {
        Self {
            db,
            item_id,
            user_id,
            value: 5.0,
        }
    }

    /// Sets the rating value.
    ///
    /// # Arguments
    /// - `value` - Rating on the half-step scale from 0.5 to 10.0
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Builds and inserts the rating entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::item_rating::Model)` - Created rating entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::item_rating::Model, DbErr> {
        let now = Utc::now();
        entity::item_rating::ActiveModel {
            id: ActiveValue::NotSet,
            item_id: ActiveValue::Set(self.item_id),
            user_id: ActiveValue::Set(self.user_id),
            value: ActiveValue::Set(self.value),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rating with an explicit value.
///
/// Shorthand for `ItemRatingFactory::new(db, item_id, user_id).value(value).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `item_id` - Rank item being rated
/// - `user_id` - Rating member
/// - `value` - Rating value on the half-step scale
///
/// # Returns
/// - `Ok(entity::item_rating::Model)` - Created rating entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let rating = create_rating(&db, item.id, user.id, 8.5).await?;
/// ```
pub async fn create_rating(
    db: &DatabaseConnection,
    item_id: i32,
    user_id: i32,
    value: f64,
) -> Result<entity::item_rating::Model, DbErr> {
    ItemRatingFactory::new(db, item_id, user_id)
        .value(value)
        .build()
        .await
}
