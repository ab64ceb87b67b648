use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260705_000002_create_party_rank_table::PartyRank,
    m20260706_000008_create_discord_guild_channel_table::DiscordGuildChannel,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartyRankChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(PartyRankChannel::Id))
                    .col(integer(PartyRankChannel::PartyRankId))
                    .col(string(PartyRankChannel::ChannelId))
                    .col(
                        timestamp(PartyRankChannel::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_channel_party_rank_id")
                            .from(PartyRankChannel::Table, PartyRankChannel::PartyRankId)
                            .to(PartyRank::Table, PartyRank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_channel_channel_id")
                            .from(PartyRankChannel::Table, PartyRankChannel::ChannelId)
                            .to(DiscordGuildChannel::Table, DiscordGuildChannel::ChannelId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index for one link per channel per party rank
        manager
            .create_index(
                Index::create()
                    .name("idx_party_rank_channel_unique")
                    .table(PartyRankChannel::Table)
                    .col(PartyRankChannel::PartyRankId)
                    .col(PartyRankChannel::ChannelId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_party_rank_channel_unique")
                    .table(PartyRankChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartyRankChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartyRankChannel {
    Table,
    Id,
    PartyRankId,
    ChannelId,
    CreatedAt,
}
