use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePartyRankDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_items_per_member")]
    pub items_per_member: i32,
    #[serde(default = "default_allow_comments")]
    pub allow_comments: bool,
    #[serde(default)]
    pub show_authors_on_results: bool,
    pub deadline_submissions: Option<String>, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub deadline_ratings: Option<String>,     // Format: "YYYY-MM-DD HH:MM" in UTC
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePartyRankDto {
    pub name: String,
    pub description: Option<String>,
    pub items_per_member: i32,
    pub allow_comments: bool,
    pub show_authors_on_results: bool,
    pub deadline_submissions: Option<String>, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub deadline_ratings: Option<String>,     // Format: "YYYY-MM-DD HH:MM" in UTC
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateStatusDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PartyRankDto {
    pub id: i32,
    pub creator_id: i32,
    pub creator_name: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub items_per_member: i32,
    pub allow_comments: bool,
    pub show_authors_on_results: bool,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub deadline_submissions: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub deadline_ratings: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub member_count: u64,
    pub item_count: u64,
    pub is_member: bool,
    pub is_moderator: bool,
    pub moderators: Vec<UserDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PartyRankListItemDto {
    pub id: i32,
    pub creator_id: i32,
    pub creator_name: String,
    pub name: String,
    pub status: String,
    pub member_count: u64,
    pub item_count: u64,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub deadline_submissions: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub deadline_ratings: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPartyRanksDto {
    pub party_ranks: Vec<PartyRankListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberProgressDto {
    pub user: UserDto,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub joined_at: DateTime<Utc>,
    pub rated_count: u64,
    pub eligible_count: u64,
    pub favorite_item_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddModeratorDto {
    pub user_id: i32,
}

fn default_items_per_member() -> i32 {
    1
}

fn default_allow_comments() -> bool {
    true
}
