use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::User;

pub struct PartyRankModeratorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyRankModeratorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user holds a moderator entry for a party rank
    ///
    /// The creator moderates implicitly and has no entry here; callers check
    /// `creator_id` separately.
    ///
    /// # Returns
    /// - `Ok(true)`: User has a moderator entry
    /// - `Ok(false)`: No entry
    /// - `Err(DbErr)`: Database error
    pub async fn is_moderator(&self, party_rank_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PartyRankModerator::find()
            .filter(entity::party_rank_moderator::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::party_rank_moderator::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Grants a user moderator rights on a party rank
    ///
    /// # Returns
    /// - `Ok(Model)`: The created moderator entry
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        party_rank_id: i32,
        user_id: i32,
    ) -> Result<entity::party_rank_moderator::Model, DbErr> {
        entity::party_rank_moderator::ActiveModel {
            party_rank_id: ActiveValue::Set(party_rank_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Revokes a user's moderator entry
    ///
    /// # Returns
    /// - `Ok(true)`: An entry was removed
    /// - `Ok(false)`: User had no entry
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, party_rank_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PartyRankModerator::delete_many()
            .filter(entity::party_rank_moderator::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::party_rank_moderator::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the users holding moderator entries for a party rank
    ///
    /// # Returns
    /// - `Ok(users)`: Moderating users in grant order
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_party_rank(&self, party_rank_id: i32) -> Result<Vec<User>, DbErr> {
        let rows = entity::prelude::PartyRankModerator::find()
            .filter(entity::party_rank_moderator::Column::PartyRankId.eq(party_rank_id))
            .order_by_asc(entity::party_rank_moderator::Column::CreatedAt)
            .order_by_asc(entity::party_rank_moderator::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for (entry, user) in rows {
            let user = user.ok_or(DbErr::RecordNotFound(format!(
                "User {} for moderator entry {} not found",
                entry.user_id, entry.id
            )))?;

            users.push(User::from_entity(user));
        }

        Ok(users)
    }
}
