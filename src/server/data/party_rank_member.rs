use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{party_rank::PartyRankMember, user::User};

pub struct PartyRankMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyRankMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user's membership in a party rank
    ///
    /// # Returns
    /// - `Ok(Some(PartyRankMember))`: Membership found
    /// - `Ok(None)`: User is not a member
    /// - `Err(DbErr)`: Database error
    pub async fn find_membership(
        &self,
        party_rank_id: i32,
        user_id: i32,
    ) -> Result<Option<PartyRankMember>, DbErr> {
        let entity = entity::prelude::PartyRankMember::find()
            .filter(entity::party_rank_member::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::party_rank_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(PartyRankMember::from_entity))
    }

    /// Enrolls a user in a party rank
    ///
    /// Callers are expected to check for an existing membership first; the
    /// composite unique index also rejects duplicates at the database level.
    ///
    /// # Returns
    /// - `Ok(PartyRankMember)`: The created membership
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        party_rank_id: i32,
        user_id: i32,
    ) -> Result<PartyRankMember, DbErr> {
        let entity = entity::party_rank_member::ActiveModel {
            party_rank_id: ActiveValue::Set(party_rank_id),
            user_id: ActiveValue::Set(user_id),
            favorite_item_id: ActiveValue::Set(None),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PartyRankMember::from_entity(entity))
    }

    /// Removes a user's membership from a party rank
    ///
    /// # Returns
    /// - `Ok(())`: Membership deleted (or didn't exist)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, party_rank_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::PartyRankMember::delete_many()
            .filter(entity::party_rank_member::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::party_rank_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all members of a party rank with their user rows, in join order
    ///
    /// # Returns
    /// - `Ok(members)`: Vector of (membership, user) pairs
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_party_rank(
        &self,
        party_rank_id: i32,
    ) -> Result<Vec<(PartyRankMember, User)>, DbErr> {
        let rows = entity::prelude::PartyRankMember::find()
            .filter(entity::party_rank_member::Column::PartyRankId.eq(party_rank_id))
            .order_by_asc(entity::party_rank_member::Column::JoinedAt)
            .order_by_asc(entity::party_rank_member::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut members = Vec::with_capacity(rows.len());
        for (member, user) in rows {
            let user = user.ok_or(DbErr::RecordNotFound(format!(
                "User {} for membership {} not found",
                member.user_id, member.id
            )))?;

            members.push((
                PartyRankMember::from_entity(member),
                User::from_entity(user),
            ));
        }

        Ok(members)
    }

    /// Counts members of a party rank
    ///
    /// # Returns
    /// - `Ok(count)`: Number of members
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_party_rank(&self, party_rank_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PartyRankMember::find()
            .filter(entity::party_rank_member::Column::PartyRankId.eq(party_rank_id))
            .count(self.db)
            .await
    }

    /// Sets or clears a member's favorite item
    ///
    /// # Arguments
    /// - `party_rank_id`: Party rank the membership belongs to
    /// - `user_id`: Member whose favorite is updated
    /// - `favorite_item_id`: Item to mark as favorite, or `None` to clear
    ///
    /// # Returns
    /// - `Ok(PartyRankMember)`: The updated membership
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn set_favorite(
        &self,
        party_rank_id: i32,
        user_id: i32,
        favorite_item_id: Option<i32>,
    ) -> Result<PartyRankMember, DbErr> {
        let membership = entity::prelude::PartyRankMember::find()
            .filter(entity::party_rank_member::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::party_rank_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Membership of user {} in party rank {} not found",
                user_id, party_rank_id
            )))?;

        let mut active_model: entity::party_rank_member::ActiveModel = membership.into();
        active_model.favorite_item_id = ActiveValue::Set(favorite_item_id);

        let updated = active_model.update(self.db).await?;

        Ok(PartyRankMember::from_entity(updated))
    }
}
