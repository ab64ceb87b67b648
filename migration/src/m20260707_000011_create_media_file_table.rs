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
                    .table(MediaFile::Table)
                    .if_not_exists()
                    .col(string(MediaFile::Id).primary_key())
                    .col(integer(MediaFile::UploaderId))
                    .col(string(MediaFile::FileName))
                    .col(string(MediaFile::ContentType))
                    .col(big_integer(MediaFile::SizeBytes))
                    .col(
                        timestamp(MediaFile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_file_uploader_id")
                            .from(MediaFile::Table, MediaFile::UploaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MediaFile {
    Table,
    Id,
    UploaderId,
    FileName,
    ContentType,
    SizeBytes,
    CreatedAt,
}
