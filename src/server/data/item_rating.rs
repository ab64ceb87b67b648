use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{rating::ItemRating, user::User};

pub struct ItemRatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRatingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces a member's rating of an item
    ///
    /// Looks the row up by (item, user) and updates it in place when present,
    /// so re-rating never accumulates rows.
    ///
    /// # Arguments
    /// - `item_id`: Rated item
    /// - `user_id`: Rating member
    /// - `value`: Rating value on the half-step scale
    ///
    /// # Returns
    /// - `Ok(ItemRating)`: The stored rating
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        item_id: i32,
        user_id: i32,
        value: f64,
    ) -> Result<ItemRating, DbErr> {
        let existing = entity::prelude::ItemRating::find()
            .filter(entity::item_rating::Column::ItemId.eq(item_id))
            .filter(entity::item_rating::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(rating) => {
                let mut active_model: entity::item_rating::ActiveModel = rating.into();
                active_model.value = ActiveValue::Set(value);
                active_model.updated_at = ActiveValue::Set(Utc::now());
                active_model.update(self.db).await?
            }
            None => {
                let now = Utc::now();
                entity::item_rating::ActiveModel {
                    item_id: ActiveValue::Set(item_id),
                    user_id: ActiveValue::Set(user_id),
                    value: ActiveValue::Set(value),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(ItemRating::from_entity(entity))
    }

    /// Removes a member's rating of an item
    ///
    /// # Returns
    /// - `Ok(true)`: A rating was removed
    /// - `Ok(false)`: No rating existed
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, item_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ItemRating::delete_many()
            .filter(entity::item_rating::Column::ItemId.eq(item_id))
            .filter(entity::item_rating::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a member's ratings across a party rank's items
    ///
    /// # Returns
    /// - `Ok(ratings)`: The member's ratings ordered by item ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_user_for_party_rank(
        &self,
        party_rank_id: i32,
        user_id: i32,
    ) -> Result<Vec<ItemRating>, DbErr> {
        let entities = entity::prelude::ItemRating::find()
            .join(
                JoinType::InnerJoin,
                entity::item_rating::Relation::RankItem.def(),
            )
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::item_rating::Column::UserId.eq(user_id))
            .order_by_asc(entity::item_rating::Column::ItemId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ItemRating::from_entity).collect())
    }

    /// Gets every rating across a party rank's items with the rating users
    ///
    /// Feeds the results tally, which needs values attributed to usernames.
    ///
    /// # Returns
    /// - `Ok(ratings)`: Vector of (rating, user) pairs ordered by item ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_for_party_rank_with_users(
        &self,
        party_rank_id: i32,
    ) -> Result<Vec<(ItemRating, User)>, DbErr> {
        let rows = entity::prelude::ItemRating::find()
            .join(
                JoinType::InnerJoin,
                entity::item_rating::Relation::RankItem.def(),
            )
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .order_by_asc(entity::item_rating::Column::ItemId)
            .order_by_asc(entity::item_rating::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut ratings = Vec::with_capacity(rows.len());
        for (rating, user) in rows {
            let user = user.ok_or(DbErr::RecordNotFound(format!(
                "User {} for rating {} not found",
                rating.user_id, rating.id
            )))?;

            ratings.push((ItemRating::from_entity(rating), User::from_entity(user)));
        }

        Ok(ratings)
    }

    /// Counts how many of a party rank's items a member has rated
    ///
    /// # Returns
    /// - `Ok(count)`: Number of rated items
    /// - `Err(DbErr)`: Database error
    pub async fn count_rated_by_user(
        &self,
        party_rank_id: i32,
        user_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::ItemRating::find()
            .join(
                JoinType::InnerJoin,
                entity::item_rating::Relation::RankItem.def(),
            )
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::item_rating::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Deletes all of a member's ratings across a party rank's items
    ///
    /// Used when a member leaves during registration. Fetches the matching
    /// rating IDs through the item join, then deletes them by ID.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of ratings removed
    /// - `Err(DbErr)`: Database error
    pub async fn delete_by_user_for_party_rank(
        &self,
        party_rank_id: i32,
        user_id: i32,
    ) -> Result<u64, DbErr> {
        let rating_ids: Vec<i32> = entity::prelude::ItemRating::find()
            .join(
                JoinType::InnerJoin,
                entity::item_rating::Relation::RankItem.def(),
            )
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::item_rating::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|rating| rating.id)
            .collect();

        if rating_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::ItemRating::delete_many()
            .filter(entity::item_rating::Column::Id.is_in(rating_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
