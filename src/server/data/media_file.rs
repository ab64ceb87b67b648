use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::media::{CreateMediaFileParam, MediaFile};

pub struct MediaFileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaFileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a stored upload
    ///
    /// The file itself is written to disk by the media service before this
    /// row is created.
    ///
    /// # Returns
    /// - `Ok(MediaFile)`: The recorded file
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateMediaFileParam) -> Result<MediaFile, DbErr> {
        let entity = entity::media_file::ActiveModel {
            id: ActiveValue::Set(param.id),
            uploader_id: ActiveValue::Set(param.uploader_id),
            file_name: ActiveValue::Set(param.file_name),
            content_type: ActiveValue::Set(param.content_type),
            size_bytes: ActiveValue::Set(param.size_bytes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(MediaFile::from_entity(entity))
    }

    /// Finds a media file by its stored name
    ///
    /// # Returns
    /// - `Ok(Some(MediaFile))`: File record found
    /// - `Ok(None)`: No record with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<MediaFile>, DbErr> {
        let entity = entity::prelude::MediaFile::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(MediaFile::from_entity))
    }

    /// Gets a user's uploads with pagination, newest first
    ///
    /// # Arguments
    /// - `uploader_id`: Uploading user
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of files per page
    ///
    /// # Returns
    /// - `Ok((files, total, total_pages))`: Page of files plus totals
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_uploader(
        &self,
        uploader_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<MediaFile>, u64, u64), DbErr> {
        let paginator = entity::prelude::MediaFile::find()
            .filter(entity::media_file::Column::UploaderId.eq(uploader_id))
            .order_by_desc(entity::media_file::Column::CreatedAt)
            .order_by_desc(entity::media_file::Column::Id)
            .paginate(self.db, per_page);

        let totals = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;
        let files = entities.into_iter().map(MediaFile::from_entity).collect();

        Ok((files, totals.number_of_items, totals.number_of_pages))
    }

    /// Deletes a media file record by its stored name
    ///
    /// # Returns
    /// - `Ok(true)`: A record was removed
    /// - `Ok(false)`: No record existed
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::MediaFile::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
