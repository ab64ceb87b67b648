use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::discord::PartyRankChannelLink;

pub struct PartyRankChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyRankChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an existing link between a party rank and a channel
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Link exists
    /// - `Ok(None)`: Channel not linked to this party rank
    /// - `Err(DbErr)`: Database error
    pub async fn find(
        &self,
        party_rank_id: i32,
        channel_id: u64,
    ) -> Result<Option<entity::party_rank_channel::Model>, DbErr> {
        entity::prelude::PartyRankChannel::find()
            .filter(entity::party_rank_channel::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::party_rank_channel::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await
    }

    /// Gets a link by its ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Link found
    /// - `Ok(None)`: No link with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::party_rank_channel::Model>, DbErr> {
        entity::prelude::PartyRankChannel::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Links a party rank to a Discord channel
    ///
    /// Callers are expected to check for an existing link first; the composite
    /// unique index also rejects duplicates at the database level.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created link
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        party_rank_id: i32,
        channel_id: u64,
    ) -> Result<entity::party_rank_channel::Model, DbErr> {
        entity::party_rank_channel::ActiveModel {
            party_rank_id: ActiveValue::Set(party_rank_id),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all channel links of a party rank joined with their channel rows
    ///
    /// # Returns
    /// - `Ok(links)`: Link domain models in link order
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_party_rank(
        &self,
        party_rank_id: i32,
    ) -> Result<Vec<PartyRankChannelLink>, DbErr> {
        let rows = entity::prelude::PartyRankChannel::find()
            .filter(entity::party_rank_channel::Column::PartyRankId.eq(party_rank_id))
            .order_by_asc(entity::party_rank_channel::Column::Id)
            .find_also_related(entity::prelude::DiscordGuildChannel)
            .all(self.db)
            .await?;

        let mut links = Vec::with_capacity(rows.len());
        for (link, channel) in rows {
            let channel = channel.ok_or(DbErr::RecordNotFound(format!(
                "Channel {} for link {} not found",
                link.channel_id, link.id
            )))?;

            links.push(PartyRankChannelLink::from_entities(link, channel)?);
        }

        Ok(links)
    }

    /// Deletes a link by its ID
    ///
    /// # Returns
    /// - `Ok(())`: Link deleted successfully
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::PartyRankChannel::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
