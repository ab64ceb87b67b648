use sea_orm_migration::{prelude::*, schema::*};

use super::m20260705_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartyRank::Table)
                    .if_not_exists()
                    .col(pk_auto(PartyRank::Id))
                    .col(integer(PartyRank::CreatorId))
                    .col(string(PartyRank::Name))
                    .col(text_null(PartyRank::Description))
                    .col(string(PartyRank::Status))
                    .col(integer(PartyRank::ItemsPerMember))
                    .col(boolean(PartyRank::AllowComments))
                    .col(boolean(PartyRank::ShowAuthorsOnResults))
                    .col(timestamp_null(PartyRank::DeadlineSubmissions))
                    .col(timestamp_null(PartyRank::DeadlineRatings))
                    .col(timestamp_null(PartyRank::FinishedAt))
                    .col(
                        timestamp(PartyRank::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(PartyRank::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_party_rank_creator_id")
                            .from(PartyRank::Table, PartyRank::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for scheduler deadline scans
        manager
            .create_index(
                Index::create()
                    .name("idx_party_rank_status")
                    .table(PartyRank::Table)
                    .col(PartyRank::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_party_rank_status")
                    .table(PartyRank::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartyRank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartyRank {
    Table,
    Id,
    CreatorId,
    Name,
    Description,
    Status,
    ItemsPerMember,
    AllowComments,
    ShowAuthorsOnResults,
    DeadlineSubmissions,
    DeadlineRatings,
    FinishedAt,
    CreatedAt,
    UpdatedAt,
}
