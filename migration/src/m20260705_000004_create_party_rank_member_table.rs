use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260705_000001_create_user_table::User,
    m20260705_000002_create_party_rank_table::PartyRank,
    m20260705_000003_create_rank_item_table::RankItem,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartyRankMember::Table)
                    .if_not_exists()
                    .col(pk_auto(PartyRankMember::Id))
                    .col(integer(PartyRankMember::PartyRankId))
                    .col(integer(PartyRankMember::UserId))
                    .col(integer_null(PartyRankMember::FavoriteItemId))
                    .col(
                        timestamp(PartyRankMember::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_member_party_rank_id")
                            .from(PartyRankMember::Table, PartyRankMember::PartyRankId)
                            .to(PartyRank::Table, PartyRank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_member_user_id")
                            .from(PartyRankMember::Table, PartyRankMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_member_favorite_item_id")
                            .from(PartyRankMember::Table, PartyRankMember::FavoriteItemId)
                            .to(RankItem::Table, RankItem::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index for one membership per user per party rank
        manager
            .create_index(
                Index::create()
                    .name("idx_party_rank_member_unique")
                    .table(PartyRankMember::Table)
                    .col(PartyRankMember::PartyRankId)
                    .col(PartyRankMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_party_rank_member_unique")
                    .table(PartyRankMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartyRankMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartyRankMember {
    Table,
    Id,
    PartyRankId,
    UserId,
    FavoriteItemId,
    JoinedAt,
}
