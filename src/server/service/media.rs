//! Uploaded media management (the built-in CDN).
//!
//! Uploads land on local disk under the configured uploads directory; the
//! stored file name (`{uuid}.{extension}`) doubles as the database id, so the
//! public URL is always `/media/{id}`. The directory itself is served
//! statically by the router, which gives players the range-request support
//! they need.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::media::{MediaFileDto, PaginatedMediaDto},
    server::{
        data::media_file::MediaFileRepository,
        error::{auth::AuthError, AppError},
        model::{media::CreateMediaFileParam, user::User},
    },
};

/// Content type prefixes accepted for upload.
const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/", "audio/", "video/"];

/// Fallback extension when neither file name nor content type yield one.
const DEFAULT_EXTENSION: &str = "bin";

pub struct MediaService<'a> {
    db: &'a DatabaseConnection,
    uploads_dir: &'a str,
}

impl<'a> MediaService<'a> {
    pub fn new(db: &'a DatabaseConnection, uploads_dir: &'a str) -> Self {
        Self { db, uploads_dir }
    }

    /// Stores an uploaded file and records it for the uploader.
    ///
    /// The payload size is capped by the router's body limit before this is
    /// reached. The file is written first and the row inserted second; if the
    /// insert fails the written file is removed again.
    ///
    /// # Arguments
    /// - `uploader`: The authenticated uploading user
    /// - `file_name`: Original file name from the multipart field, if any
    /// - `content_type`: Declared content type of the upload
    /// - `bytes`: File contents
    ///
    /// # Returns
    /// - `Ok(MediaFileDto)`: The stored file with its public URL
    /// - `Err(AppError::BadRequest)`: Empty payload or disallowed content type
    pub async fn upload(
        &self,
        uploader: &User,
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<MediaFileDto, AppError> {
        let repo = MediaFileRepository::new(self.db);

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let content_type = content_type
            .ok_or_else(|| AppError::BadRequest("Upload is missing a content type".to_string()))?;
        validate_content_type(&content_type)?;

        let file_name = file_name.unwrap_or_else(|| "upload".to_string());
        let extension = derive_extension(&file_name, &content_type);
        let id = format!("{}.{}", Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(self.uploads_dir).await?;
        let path = std::path::Path::new(self.uploads_dir).join(&id);
        tokio::fs::write(&path, &bytes).await?;

        let created = repo
            .create(CreateMediaFileParam {
                id: id.clone(),
                uploader_id: uploader.id,
                file_name,
                content_type,
                size_bytes: bytes.len() as i64,
            })
            .await;

        let file = match created {
            Ok(file) => file,
            Err(e) => {
                if let Err(fs_err) = tokio::fs::remove_file(&path).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", id, fs_err);
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            "User {} uploaded {} ({} bytes)",
            uploader.id,
            file.id,
            file.size_bytes
        );

        Ok(file.into_dto())
    }

    /// Lists the caller's uploads page by page, newest first.
    pub async fn list(
        &self,
        uploader: &User,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMediaDto, AppError> {
        let repo = MediaFileRepository::new(self.db);

        let (files, total, total_pages) = repo.get_by_uploader(uploader.id, page, per_page).await?;

        Ok(PaginatedMediaDto {
            files: files.into_iter().map(|file| file.into_dto()).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Removes an upload: the database row, then best-effort the file.
    ///
    /// Only the uploader may delete their files. A file that is already gone
    /// from disk does not fail the operation; the row is authoritative.
    ///
    /// # Returns
    /// - `Ok(())`: Upload removed
    /// - `Err(AppError::NotFound)`: No such upload
    /// - `Err(AppError::AuthErr)`: Caller is not the uploader
    pub async fn delete(&self, id: &str, caller: &User) -> Result<(), AppError> {
        let repo = MediaFileRepository::new(self.db);

        let file = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Media file {} not found", id)))?;

        if file.uploader_id != caller.id {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("User does not own media file {}", id),
            )
            .into());
        }

        repo.delete(&file.id).await?;

        let path = std::path::Path::new(self.uploads_dir).join(&file.id);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Failed to remove media file {} from disk: {}", file.id, e);
        }

        Ok(())
    }
}

fn validate_content_type(content_type: &str) -> Result<(), AppError> {
    if ALLOWED_CONTENT_TYPES
        .iter()
        .any(|prefix| content_type.starts_with(prefix))
    {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "Content type '{}' is not allowed; only image, audio and video uploads are accepted",
        content_type
    )))
}

/// Derives the stored extension from the original file name, falling back to
/// the content type subtype. The result is lowercased and restricted to a
/// short alphanumeric token so it is safe as part of a file name.
fn derive_extension(file_name: &str, content_type: &str) -> String {
    let from_name = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| is_safe_extension(ext));

    if let Some(ext) = from_name {
        return ext;
    }

    content_type
        .split('/')
        .nth(1)
        .map(|subtype| subtype.to_ascii_lowercase())
        .filter(|subtype| is_safe_extension(subtype))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

fn is_safe_extension(ext: &str) -> bool {
    !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
}
