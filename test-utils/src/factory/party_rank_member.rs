//! Membership factory for creating test party rank member entities.
//!
//! This module provides factory methods for linking users to party ranks with
//! sensible defaults. The factory supports customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test memberships with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::party_rank_member::MemberFactory;
///
/// let member = MemberFactory::new(&db, party_rank.id, user.id)
///     .favorite_item_id(Some(item.id))
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    party_rank_id: i32,
    user_id: i32,
    favorite_item_id: Option<i32>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - favorite_item_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `party_rank_id` - Party rank the user joins
    /// - `user_id` - Joining user
    ///
    /// # Returns
    /// - `MemberFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, party_rank_id: i32, user_id: i32) -> Self {
        Self {
            db,
            party_rank_id,
            user_id,
            favorite_item_id: None,
        }
    }

    /// Sets the member's favorite item.
    ///
    /// # Arguments
    /// - `favorite_item_id` - Optional rank item ID marked as favorite
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn favorite_item_id(mut self, favorite_item_id: Option<i32>) -> Self {
        self.favorite_item_id = favorite_item_id;
        self
    }

    /// Builds and inserts the membership entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::party_rank_member::Model)` - Created membership entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::party_rank_member::Model, DbErr> {
        entity::party_rank_member::ActiveModel {
            id: ActiveValue::NotSet,
            party_rank_id: ActiveValue::Set(self.party_rank_id),
            user_id: ActiveValue::Set(self.user_id),
            favorite_item_id: ActiveValue::Set(self.favorite_item_id),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a membership with default values.
///
/// Shorthand for `MemberFactory::new(db, party_rank_id, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `party_rank_id` - Party rank the user joins
/// - `user_id` - Joining user
///
/// # Returns
/// - `Ok(entity::party_rank_member::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let member = create_member(&db, party_rank.id, user.id).await?;
/// ```
pub async fn create_member(
    db: &DatabaseConnection,
    party_rank_id: i32,
    user_id: i32,
) -> Result<entity::party_rank_member::Model, DbErr> {
    MemberFactory::new(db, party_rank_id, user_id).build().await
}
