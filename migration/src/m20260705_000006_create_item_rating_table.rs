use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260705_000001_create_user_table::User,
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
                    .table(ItemRating::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemRating::Id))
                    .col(integer(ItemRating::ItemId))
                    .col(integer(ItemRating::UserId))
                    .col(double(ItemRating::Value))
                    .col(
                        timestamp(ItemRating::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(ItemRating::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_rating_item_id")
                            .from(ItemRating::Table, ItemRating::ItemId)
                            .to(RankItem::Table, RankItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_rating_user_id")
                            .from(ItemRating::Table, ItemRating::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index for rating lookups by item
        manager
            .create_index(
                Index::create()
                    .name("idx_item_rating_item_id")
                    .table(ItemRating::Table)
                    .col(ItemRating::ItemId)
                    .to_owned(),
            )
            .await?;

        // Create unique index for one rating per user per item
        manager
            .create_index(
                Index::create()
                    .name("idx_item_rating_unique")
                    .table(ItemRating::Table)
                    .col(ItemRating::ItemId)
                    .col(ItemRating::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_item_rating_unique")
                    .table(ItemRating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_item_rating_item_id")
                    .table(ItemRating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemRating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemRating {
    Table,
    Id,
    ItemId,
    UserId,
    Value,
    CreatedAt,
    UpdatedAt,
}
