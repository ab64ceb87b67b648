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
                    .table(RankItem::Table)
                    .if_not_exists()
                    .col(pk_auto(RankItem::Id))
                    .col(integer(RankItem::PartyRankId))
                    .col(integer(RankItem::AuthorId))
                    .col(string(RankItem::Name))
                    .col(text_null(RankItem::Comment))
                    .col(string(RankItem::MediaKind))
                    .col(string(RankItem::MediaUrl))
                    .col(integer_null(RankItem::StartSeconds))
                    .col(
                        timestamp(RankItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(RankItem::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rank_item_party_rank_id")
                            .from(RankItem::Table, RankItem::PartyRankId)
                            .to(PartyRank::Table, PartyRank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rank_item_author_id")
                            .from(RankItem::Table, RankItem::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for party rank item lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_rank_item_party_rank_id")
                    .table(RankItem::Table)
                    .col(RankItem::PartyRankId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_rank_item_party_rank_id")
                    .table(RankItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RankItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankItem {
    Table,
    Id,
    PartyRankId,
    AuthorId,
    Name,
    Comment,
    MediaKind,
    MediaUrl,
    StartSeconds,
    CreatedAt,
    UpdatedAt,
}
