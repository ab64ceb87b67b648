//! Results domain models.

use crate::{
    model::results::{PartyRankResultsDto, RankedItemDto, RaterValueDto},
    server::model::{party_rank::PartyRankStatus, rank_item::RankItem},
};

/// One member's rating of an item, attributed for the results view.
#[derive(Debug, Clone, PartialEq)]
pub struct RaterValue {
    pub user_id: i32,
    pub username: String,
    pub value: f64,
}

impl RaterValue {
    pub fn into_dto(self) -> RaterValueDto {
        RaterValueDto {
            user_id: self.user_id,
            username: self.username,
            value: self.value,
        }
    }
}

/// An item with its tallied standing.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    /// 1-based leaderboard position, best first.
    pub position: u32,
    pub item: RankItem,
    pub weighted_score: f64,
    pub average: f64,
    pub rating_count: u64,
    pub favorite_count: u64,
    pub ratings: Vec<RaterValue>,
}

impl RankedItem {
    pub fn into_dto(self, author_name: Option<String>) -> RankedItemDto {
        RankedItemDto {
            position: self.position,
            item: self.item.into_dto(author_name),
            weighted_score: self.weighted_score,
            average: self.average,
            rating_count: self.rating_count,
            favorite_count: self.favorite_count,
            ratings: self.ratings.into_iter().map(RaterValue::into_dto).collect(),
        }
    }
}

/// The full tallied standings for a contest.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyRankResults {
    pub party_rank_id: i32,
    pub status: PartyRankStatus,
    /// Leaderboard order, best first.
    pub items: Vec<RankedItem>,
    /// Item ids in reveal order, worst first.
    pub reveal_order: Vec<i32>,
}

impl PartyRankResults {
    /// Builds the API representation, resolving each item's author name
    /// through `author_name_for` (returning `None` keeps it anonymous).
    pub fn into_dto<F>(self, mut author_name_for: F) -> PartyRankResultsDto
    where
        F: FnMut(&RankItem) -> Option<String>,
    {
        PartyRankResultsDto {
            party_rank_id: self.party_rank_id,
            status: self.status.as_str().to_string(),
            items: self
                .items
                .into_iter()
                .map(|ranked| {
                    let author_name = author_name_for(&ranked.item);
                    ranked.into_dto(author_name)
                })
                .collect(),
            reveal_order: self.reveal_order,
        }
    }
}
