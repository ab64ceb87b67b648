use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::rank_item::RankItemDto;

/// One rater's value for an item, for the results grid.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RaterValueDto {
    pub user_id: i32,
    pub username: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RankedItemDto {
    /// 1-based leaderboard position (1 = winner).
    pub position: u32,
    pub item: RankItemDto,
    pub weighted_score: f64,
    pub average: f64,
    pub rating_count: u64,
    pub favorite_count: u64,
    pub ratings: Vec<RaterValueDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PartyRankResultsDto {
    pub party_rank_id: i32,
    pub status: String,
    /// Items in leaderboard order (position ascending).
    pub items: Vec<RankedItemDto>,
    /// Item ids ordered for the slideshow reveal: last place first.
    pub reveal_order: Vec<i32>,
}
