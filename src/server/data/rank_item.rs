use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    rank_item::{CreateRankItemParam, RankItem, UpdateRankItemParam},
    user::User,
};

pub struct RankItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new rank item
    ///
    /// # Arguments
    /// - `param`: Submission parameters including contest, author, and media
    ///
    /// # Returns
    /// - `Ok(RankItem)`: The created item
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateRankItemParam) -> Result<RankItem, DbErr> {
        let now = Utc::now();

        let entity = entity::rank_item::ActiveModel {
            party_rank_id: ActiveValue::Set(param.party_rank_id),
            author_id: ActiveValue::Set(param.author_id),
            name: ActiveValue::Set(param.name),
            comment: ActiveValue::Set(param.comment),
            media_kind: ActiveValue::Set(param.media_kind.as_str().to_string()),
            media_url: ActiveValue::Set(param.media_url),
            start_seconds: ActiveValue::Set(param.start_seconds),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        RankItem::from_entity(entity)
    }

    /// Gets a rank item by ID
    ///
    /// # Returns
    /// - `Ok(Some(RankItem))`: Item found
    /// - `Ok(None)`: Item not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RankItem>, DbErr> {
        let entity = entity::prelude::RankItem::find_by_id(id).one(self.db).await?;

        entity.map(RankItem::from_entity).transpose()
    }

    /// Gets all items of a party rank in submission order
    ///
    /// # Returns
    /// - `Ok(items)`: Items ordered oldest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_party_rank(&self, party_rank_id: i32) -> Result<Vec<RankItem>, DbErr> {
        let entities = entity::prelude::RankItem::find()
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .order_by_asc(entity::rank_item::Column::CreatedAt)
            .order_by_asc(entity::rank_item::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(RankItem::from_entity).collect()
    }

    /// Gets all items of a party rank joined with their authors
    ///
    /// # Returns
    /// - `Ok(items)`: Vector of (item, author) pairs in submission order
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_party_rank_with_authors(
        &self,
        party_rank_id: i32,
    ) -> Result<Vec<(RankItem, User)>, DbErr> {
        let rows = entity::prelude::RankItem::find()
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .order_by_asc(entity::rank_item::Column::CreatedAt)
            .order_by_asc(entity::rank_item::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for (item, author) in rows {
            let author = author.ok_or(DbErr::RecordNotFound(format!(
                "Author {} for rank item {} not found",
                item.author_id, item.id
            )))?;

            items.push((RankItem::from_entity(item)?, User::from_entity(author)));
        }

        Ok(items)
    }

    /// Counts all items of a party rank
    ///
    /// # Returns
    /// - `Ok(count)`: Total number of items
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_party_rank(&self, party_rank_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RankItem::find()
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .count(self.db)
            .await
    }

    /// Counts a member's items in a party rank
    ///
    /// Used to enforce the per-member submission cap.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of items the member has submitted
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_author(
        &self,
        party_rank_id: i32,
        author_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::RankItem::find()
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::rank_item::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }

    /// Updates a rank item's editable fields
    ///
    /// # Arguments
    /// - `param`: New values for every editable field
    ///
    /// # Returns
    /// - `Ok(RankItem)`: The updated item
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn update(&self, param: UpdateRankItemParam) -> Result<RankItem, DbErr> {
        let item = entity::prelude::RankItem::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Rank item {} not found",
                param.id
            )))?;

        let mut active_model: entity::rank_item::ActiveModel = item.into();

        active_model.name = ActiveValue::Set(param.name);
        active_model.comment = ActiveValue::Set(param.comment);
        active_model.media_kind = ActiveValue::Set(param.media_kind.as_str().to_string());
        active_model.media_url = ActiveValue::Set(param.media_url);
        active_model.start_seconds = ActiveValue::Set(param.start_seconds);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        RankItem::from_entity(updated)
    }

    /// Deletes a rank item by ID
    ///
    /// Ratings on the item are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(())`: Item deleted successfully
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RankItem::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes all of a member's items in a party rank
    ///
    /// Used when a member leaves during registration.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of items removed
    /// - `Err(DbErr)`: Database error
    pub async fn delete_by_author(
        &self,
        party_rank_id: i32,
        author_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::RankItem::delete_many()
            .filter(entity::rank_item::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::rank_item::Column::AuthorId.eq(author_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
