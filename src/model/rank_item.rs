use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRankItemDto {
    pub name: String,
    pub media_kind: String,
    pub media_url: String,
    pub comment: Option<String>,
    pub start_seconds: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateRankItemDto {
    pub name: String,
    pub media_kind: String,
    pub media_url: String,
    pub comment: Option<String>,
    pub start_seconds: Option<i32>,
}

/// A submitted entry. Author fields are omitted while the contest keeps
/// submissions anonymous (see the results visibility rules).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RankItemDto {
    pub id: i32,
    pub party_rank_id: i32,
    pub author_id: Option<i32>,
    pub author_name: Option<String>,
    pub name: String,
    pub comment: Option<String>,
    pub media_kind: String,
    pub media_url: String,
    pub start_seconds: Option<i32>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
