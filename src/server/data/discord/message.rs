use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::discord::MessageKind;

pub struct PartyRankMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyRankMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a message of this kind was already posted to a channel
    ///
    /// This is the dedup check that keeps each announcement to at most one
    /// post per (party rank, channel, kind).
    ///
    /// # Returns
    /// - `Ok(true)`: Message already recorded
    /// - `Ok(false)`: Nothing posted yet
    /// - `Err(DbErr)`: Database error
    pub async fn exists(
        &self,
        party_rank_id: i32,
        channel_id: u64,
        kind: MessageKind,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::PartyRankMessage::find()
            .filter(entity::party_rank_message::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::party_rank_message::Column::ChannelId.eq(channel_id.to_string()))
            .filter(entity::party_rank_message::Column::Kind.eq(kind.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records a posted message
    ///
    /// Looks the row up by (party rank, channel, kind) and updates the stored
    /// message ID in place when present, so a repost never accumulates rows.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest the message announces
    /// - `channel_id`: Channel the message was posted to
    /// - `message_id`: Discord message ID of the post
    /// - `kind`: Message category
    ///
    /// # Returns
    /// - `Ok(Model)`: The recorded message row
    /// - `Err(DbErr)`: Database error
    pub async fn record(
        &self,
        party_rank_id: i32,
        channel_id: u64,
        message_id: u64,
        kind: MessageKind,
    ) -> Result<entity::party_rank_message::Model, DbErr> {
        let existing = entity::prelude::PartyRankMessage::find()
            .filter(entity::party_rank_message::Column::PartyRankId.eq(party_rank_id))
            .filter(entity::party_rank_message::Column::ChannelId.eq(channel_id.to_string()))
            .filter(entity::party_rank_message::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?;

        match existing {
            Some(message) => {
                let mut active_model: entity::party_rank_message::ActiveModel = message.into();
                active_model.message_id = ActiveValue::Set(message_id.to_string());
                active_model.update(self.db).await
            }
            None => {
                entity::party_rank_message::ActiveModel {
                    party_rank_id: ActiveValue::Set(party_rank_id),
                    channel_id: ActiveValue::Set(channel_id.to_string()),
                    message_id: ActiveValue::Set(message_id.to_string()),
                    kind: ActiveValue::Set(kind.as_str().to_string()),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }
}
