//! Uploaded media file domain model.

use chrono::{DateTime, Utc};

use crate::model::media::MediaFileDto;

/// A file stored in the uploads directory.
///
/// The id doubles as the stored file name (`{uuid}.{extension}`), so the
/// public URL is always `/media/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub id: String,
    pub uploader_id: i32,
    /// Original file name as uploaded.
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
}

impl MediaFile {
    pub fn from_entity(entity: entity::media_file::Model) -> Self {
        Self {
            id: entity.id,
            uploader_id: entity.uploader_id,
            file_name: entity.file_name,
            content_type: entity.content_type,
            size_bytes: entity.size_bytes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MediaFileDto {
        let url = format!("/media/{}", self.id);

        MediaFileDto {
            id: self.id,
            file_name: self.file_name,
            content_type: self.content_type,
            size_bytes: self.size_bytes,
            url,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a stored upload.
#[derive(Debug, Clone)]
pub struct CreateMediaFileParam {
    /// Stored file name, `{uuid}.{extension}`.
    pub id: String,
    pub uploader_id: i32,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
}
