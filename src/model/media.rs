use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MediaFileDto {
    /// Stored file name, e.g. `550e8400-e29b-41d4-a716-446655440000.png`.
    pub id: String,
    /// Original file name from the upload.
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    /// Public path where the file is served, e.g. `/media/{id}`.
    pub url: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedMediaDto {
    pub files: Vec<MediaFileDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
