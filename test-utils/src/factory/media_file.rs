//! Media file factory for creating test media records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test media file records with customizable fields.
///
/// Records describe uploads already on disk; no file is written by this factory.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::media_file::MediaFileFactory;
///
/// let media = MediaFileFactory::new(&db, user.id)
///     .content_type("audio/mpeg")
///     .file_name("track.mp3")
///     .build()
///     .await?;
/// ```
pub struct MediaFileFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    uploader_id: i32,
    file_name: String,
    content_type: String,
    size_bytes: i64,
}

impl<'a> MediaFileFactory<'a> {
    /// Creates a new MediaFileFactory with default values.
    ///
    /// Defaults:
    /// - id: `"media-{id}"` where id is auto-incremented
    /// - file_name: `"upload-{id}.png"`
    /// - content_type: `"image/png"`
    /// - size_bytes: `1024`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `uploader_id` - User ID of the uploading member
    ///
    /// # Returns
    /// - `MediaFileFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, uploader_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("media-{}", id),
            uploader_id,
            file_name: format!("upload-{}.png", id),
            content_type: "image/png".to_string(),
            size_bytes: 1024,
        }
    }

    /// Sets the media file ID.
    ///
    /// # Arguments
    /// - `id` - Storage identifier for the file
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the original file name.
    ///
    /// # Arguments
    /// - `file_name` - Name of the uploaded file
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the content type.
    ///
    /// # Arguments
    /// - `content_type` - MIME type of the upload
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the file size.
    ///
    /// # Arguments
    /// - `size_bytes` - Size of the upload in bytes
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn size_bytes(mut self, size_bytes: i64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    /// Builds and inserts the media file record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::media_file::Model)` - Created media file record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::media_file::Model, DbErr> {
        entity::media_file::ActiveModel {
            id: ActiveValue::Set(self.id),
            uploader_id: ActiveValue::Set(self.uploader_id),
            file_name: ActiveValue::Set(self.file_name),
            content_type: ActiveValue::Set(self.content_type),
            size_bytes: ActiveValue::Set(self.size_bytes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a media file record with default values.
///
/// Shorthand for `MediaFileFactory::new(db, uploader_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `uploader_id` - User ID of the uploading member
///
/// # Returns
/// - `Ok(entity::media_file::Model)` - Created media file record
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let media = create_media_file(&db, user.id).await?;
/// ```
pub async fn create_media_file(
    db: &DatabaseConnection,
    uploader_id: i32,
) -> Result<entity::media_file::Model, DbErr> {
    MediaFileFactory::new(db, uploader_id).build().await
}
