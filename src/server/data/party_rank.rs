use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::model::party_rank::{
    CreatePartyRankParam, GetPartyRanksParam, PartyRank, PartyRankListItem, PartyRankStatus,
    UpdatePartyRankParam,
};

pub struct PartyRankRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyRankRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new party rank in registration status.
    ///
    /// The creator is enrolled as the first member in the same call so a fresh
    /// contest is never without its creator.
    ///
    /// # Arguments
    /// - `param`: Creation parameters including creator, name, and deadlines
    ///
    /// # Returns
    /// - `Ok(PartyRank)`: The created party rank
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreatePartyRankParam) -> Result<PartyRank, DbErr> {
        let now = Utc::now();

        let party_rank = entity::party_rank::ActiveModel {
            creator_id: ActiveValue::Set(param.creator_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(PartyRankStatus::Registration.as_str().to_string()),
            items_per_member: ActiveValue::Set(param.items_per_member),
            allow_comments: ActiveValue::Set(param.allow_comments),
            show_authors_on_results: ActiveValue::Set(param.show_authors_on_results),
            deadline_submissions: ActiveValue::Set(param.deadline_submissions),
            deadline_ratings: ActiveValue::Set(param.deadline_ratings),
            finished_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::party_rank_member::ActiveModel {
            party_rank_id: ActiveValue::Set(party_rank.id),
            user_id: ActiveValue::Set(param.creator_id),
            favorite_item_id: ActiveValue::Set(None),
            joined_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PartyRank::from_entity(party_rank)
    }

    /// Gets a party rank by ID
    ///
    /// # Returns
    /// - `Ok(Some(PartyRank))`: Party rank found
    /// - `Ok(None)`: Party rank not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PartyRank>, DbErr> {
        let entity = entity::prelude::PartyRank::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(PartyRank::from_entity).transpose()
    }

    /// Gets paginated party ranks with creator names and counts, newest first
    ///
    /// # Arguments
    /// - `param`: Page, page size, and optional status/creator/member filters
    ///
    /// # Returns
    /// - `Ok((rows, total, total_pages))`: Page of listing rows plus totals
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        param: GetPartyRanksParam,
    ) -> Result<(Vec<PartyRankListItem>, u64, u64), DbErr> {
        let mut query = entity::prelude::PartyRank::find();

        if let Some(status) = param.status {
            query = query.filter(entity::party_rank::Column::Status.eq(status.as_str()));
        }
        if let Some(creator_id) = param.created_by {
            query = query.filter(entity::party_rank::Column::CreatorId.eq(creator_id));
        }
        if let Some(user_id) = param.member_of {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::party_rank::Relation::PartyRankMember.def(),
                )
                .filter(entity::party_rank_member::Column::UserId.eq(user_id));
        }

        let paginator = query
            .order_by_desc(entity::party_rank::Column::CreatedAt)
            .order_by_desc(entity::party_rank::Column::Id)
            .paginate(self.db, param.per_page);

        let totals = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(param.page).await?;

        let creator_ids: Vec<i32> = entities.iter().map(|e| e.creator_id).collect();
        let creators: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(creator_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        let mut rows = Vec::with_capacity(entities.len());
        for entity in entities {
            let member_count = entity::prelude::PartyRankMember::find()
                .filter(entity::party_rank_member::Column::PartyRankId.eq(entity.id))
                .count(self.db)
                .await?;
            let item_count = entity::prelude::RankItem::find()
                .filter(entity::rank_item::Column::PartyRankId.eq(entity.id))
                .count(self.db)
                .await?;

            let creator_name = creators.get(&entity.creator_id).cloned().unwrap_or_default();

            rows.push(PartyRankListItem {
                party_rank: PartyRank::from_entity(entity)?,
                creator_name,
                member_count,
                item_count,
            });
        }

        Ok((rows, totals.number_of_items, totals.number_of_pages))
    }

    /// Updates a party rank's editable fields
    ///
    /// # Arguments
    /// - `param`: New values for every editable field
    ///
    /// # Returns
    /// - `Ok(PartyRank)`: The updated party rank
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn update(&self, param: UpdatePartyRankParam) -> Result<PartyRank, DbErr> {
        let party_rank = entity::prelude::PartyRank::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Party rank {} not found",
                param.id
            )))?;

        let mut active_model: entity::party_rank::ActiveModel = party_rank.into();

        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        active_model.items_per_member = ActiveValue::Set(param.items_per_member);
        active_model.allow_comments = ActiveValue::Set(param.allow_comments);
        active_model.show_authors_on_results = ActiveValue::Set(param.show_authors_on_results);
        active_model.deadline_submissions = ActiveValue::Set(param.deadline_submissions);
        active_model.deadline_ratings = ActiveValue::Set(param.deadline_ratings);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        PartyRank::from_entity(updated)
    }

    /// Sets a party rank's lifecycle status
    ///
    /// # Arguments
    /// - `id`: Party rank ID
    /// - `status`: New lifecycle status
    /// - `finished_at`: Finish timestamp, stamped when entering `Finished`
    ///
    /// # Returns
    /// - `Ok(PartyRank)`: The updated party rank
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn set_status(
        &self,
        id: i32,
        status: PartyRankStatus,
        finished_at: Option<DateTime<Utc>>,
    ) -> Result<PartyRank, DbErr> {
        let party_rank = entity::prelude::PartyRank::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Party rank {} not found",
                id
            )))?;

        let mut active_model: entity::party_rank::ActiveModel = party_rank.into();

        active_model.status = ActiveValue::Set(status.as_str().to_string());
        if finished_at.is_some() {
            active_model.finished_at = ActiveValue::Set(finished_at);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        PartyRank::from_entity(updated)
    }

    /// Deletes a party rank by ID
    ///
    /// Members, items, ratings, links, and posted message records are removed
    /// by cascade.
    ///
    /// # Returns
    /// - `Ok(())`: Party rank deleted successfully
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::PartyRank::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Finds contests in registration whose submission deadline has passed
    ///
    /// # Arguments
    /// - `now`: Current time the deadlines are compared against
    ///
    /// # Returns
    /// - `Ok(party_ranks)`: Contests due to move to ongoing
    /// - `Err(DbErr)`: Database error
    pub async fn find_due_submissions(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<PartyRank>, DbErr> {
        let entities = entity::prelude::PartyRank::find()
            .filter(
                entity::party_rank::Column::Status.eq(PartyRankStatus::Registration.as_str()),
            )
            .filter(entity::party_rank::Column::DeadlineSubmissions.lte(now))
            .all(self.db)
            .await?;

        entities.into_iter().map(PartyRank::from_entity).collect()
    }

    /// Finds contests in rating whose rating deadline has passed
    ///
    /// # Arguments
    /// - `now`: Current time the deadlines are compared against
    ///
    /// # Returns
    /// - `Ok(party_ranks)`: Contests due to finish
    /// - `Err(DbErr)`: Database error
    pub async fn find_due_ratings(&self, now: DateTime<Utc>) -> Result<Vec<PartyRank>, DbErr> {
        let entities = entity::prelude::PartyRank::find()
            .filter(entity::party_rank::Column::Status.eq(PartyRankStatus::Rating.as_str()))
            .filter(entity::party_rank::Column::DeadlineRatings.lte(now))
            .all(self.db)
            .await?;

        entities.into_iter().map(PartyRank::from_entity).collect()
    }

    /// Finds contests in rating whose deadline falls within the lead window
    ///
    /// Used for reminder posts shortly before ratings close. Contests whose
    /// deadline already passed are excluded.
    ///
    /// # Arguments
    /// - `now`: Current time
    /// - `within`: How far ahead of `now` to look
    ///
    /// # Returns
    /// - `Ok(party_ranks)`: Contests ending inside the window
    /// - `Err(DbErr)`: Database error
    pub async fn find_rating_ending_within(
        &self,
        now: DateTime<Utc>,
        within: Duration,
    ) -> Result<Vec<PartyRank>, DbErr> {
        let entities = entity::prelude::PartyRank::find()
            .filter(entity::party_rank::Column::Status.eq(PartyRankStatus::Rating.as_str()))
            .filter(entity::party_rank::Column::DeadlineRatings.gt(now))
            .filter(entity::party_rank::Column::DeadlineRatings.lte(now + within))
            .all(self.db)
            .await?;

        entities.into_iter().map(PartyRank::from_entity).collect()
    }
}
