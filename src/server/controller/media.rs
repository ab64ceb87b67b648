use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        media::{MediaFileDto, PaginatedMediaDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::media::MediaService,
        state::AppState,
    },
};

/// Tag for grouping media endpoints in OpenAPI documentation
pub static MEDIA_TAG: &str = "media";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    20
}

/// Upload a media file.
///
/// Expects a multipart form with a single `file` field. Only image, audio,
/// and video content types are accepted; the body limit on this route caps
/// the size. The stored file is served under `/media/{id}`.
///
/// # Returns
/// - `201 Created` - The stored file with its public URL
/// - `400 Bad Request` - Missing `file` field or disallowed content type
#[utoipa::path(
    post,
    path = "/api/media",
    tag = MEDIA_TAG,
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully uploaded file", body = MediaFileDto),
        (status = 400, description = "Missing file or disallowed content type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 413, description = "File exceeds the upload limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_media(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(|name| name.to_string());
        let content_type = field.content_type().map(|ct| ct.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        upload = Some((file_name, content_type, bytes.to_vec()));
        break;
    }

    let (file_name, content_type, bytes) = upload
        .ok_or_else(|| AppError::BadRequest("Multipart body has no 'file' field".to_string()))?;

    let service = MediaService::new(&state.db, &state.uploads_dir);
    let file = service.upload(&user, file_name, content_type, bytes).await?;

    Ok((StatusCode::CREATED, Json(file)))
}

/// List the caller's uploads, newest first.
#[utoipa::path(
    get,
    path = "/api/media",
    tag = MEDIA_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved uploads", body = PaginatedMediaDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MediaService::new(&state.db, &state.uploads_dir);
    let files = service.list(&user, params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(files)))
}

/// Delete one of the caller's uploads.
///
/// # Returns
/// - `204 No Content` - File removed from database and disk
/// - `403 Forbidden` - Caller is not the uploader
#[utoipa::path(
    delete,
    path = "/api/media/{media_id}",
    tag = MEDIA_TAG,
    params(
        ("media_id" = String, Path, description = "Stored file id, e.g. '{uuid}.mp4'")
    ),
    responses(
        (status = 204, description = "Successfully deleted file"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the uploader", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_media(
    State(state): State<AppState>,
    session: Session,
    Path(media_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MediaService::new(&state.db, &state.uploads_dir);
    service.delete(&media_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
