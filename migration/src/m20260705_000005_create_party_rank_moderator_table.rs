use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260705_000001_create_user_table::User,
    m20260705_000002_create_party_rank_table::PartyRank,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartyRankModerator::Table)
                    .if_not_exists()
                    .col(pk_auto(PartyRankModerator::Id))
                    .col(integer(PartyRankModerator::PartyRankId))
                    .col(integer(PartyRankModerator::UserId))
                    .col(
                        timestamp(PartyRankModerator::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_moderator_party_rank_id")
                            .from(PartyRankModerator::Table, PartyRankModerator::PartyRankId)
                            .to(PartyRank::Table, PartyRank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_moderator_user_id")
                            .from(PartyRankModerator::Table, PartyRankModerator::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index for one moderator entry per user per party rank
        manager
            .create_index(
                Index::create()
                    .name("idx_party_rank_moderator_unique")
                    .table(PartyRankModerator::Table)
                    .col(PartyRankModerator::PartyRankId)
                    .col(PartyRankModerator::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_party_rank_moderator_unique")
                    .table(PartyRankModerator::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartyRankModerator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartyRankModerator {
    Table,
    Id,
    PartyRankId,
    UserId,
    CreatedAt,
}
