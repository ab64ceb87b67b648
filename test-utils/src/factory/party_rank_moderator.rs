//! Moderator factory for creating test moderator entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a moderator entry granting a user moderator rights on a party rank.
///
/// # Arguments
/// - `db` - Database connection
/// - `party_rank_id` - Party rank being moderated
/// - `user_id` - User receiving moderator rights
///
/// # Returns
/// - `Ok(entity::party_rank_moderator::Model)` - Created moderator entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let moderator = create_moderator(&db, party_rank.id, user.id).await?;
/// ```
pub async fn create_moderator(
    db: &DatabaseConnection,
    party_rank_id: i32,
    user_id: i32,
) -> Result<entity::party_rank_moderator::Model, DbErr> {
    entity::party_rank_moderator::ActiveModel {
        id: ActiveValue::NotSet,
        party_rank_id: ActiveValue::Set(party_rank_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
