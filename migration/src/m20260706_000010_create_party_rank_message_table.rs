use sea_orm_migration::{prelude::*, schema::*};

use super::m20260705_000002_create_party_rank_table::PartyRank;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartyRankMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(PartyRankMessage::Id))
                    .col(integer(PartyRankMessage::PartyRankId))
                    .col(string(PartyRankMessage::ChannelId))
                    .col(string(PartyRankMessage::MessageId))
                    .col(string(PartyRankMessage::Kind).not_null())
                    .col(
                        timestamp(PartyRankMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_message_party_rank_id")
                            .from(PartyRankMessage::Table, PartyRankMessage::PartyRankId)
                            .to(PartyRank::Table, PartyRank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for party rank lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_party_rank_message_party_rank_id")
                    .table(PartyRankMessage::Table)
                    .col(PartyRankMessage::PartyRankId)
                    .to_owned(),
            )
            .await?;

        // Create unique index for one message kind per channel per party rank
        manager
            .create_index(
                Index::create()
                    .name("idx_party_rank_message_unique")
                    .table(PartyRankMessage::Table)
                    .col(PartyRankMessage::PartyRankId)
                    .col(PartyRankMessage::ChannelId)
                    .col(PartyRankMessage::Kind)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_party_rank_message_unique")
                    .table(PartyRankMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_party_rank_message_party_rank_id")
                    .table(PartyRankMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartyRankMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartyRankMessage {
    Table,
    Id,
    PartyRankId,
    ChannelId,
    MessageId,
    Kind,
    CreatedAt,
}
