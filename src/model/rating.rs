use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::rank_item::RankItemDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RateItemDto {
    pub value: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetFavoriteDto {
    /// Item to mark as favorite, or null to clear the current favorite.
    pub item_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ItemRatingDto {
    pub item_id: i32,
    pub value: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MyRatingsDto {
    pub party_rank_id: i32,
    pub ratings: Vec<ItemRatingDto>,
    pub favorite_item_id: Option<i32>,
}

/// One entry of the rating queue: an anonymized item plus the caller's
/// current rating for it, if any.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QueueEntryDto {
    pub item: RankItemDto,
    pub my_rating: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RatingQueueDto {
    pub party_rank_id: i32,
    pub entries: Vec<QueueEntryDto>,
}
