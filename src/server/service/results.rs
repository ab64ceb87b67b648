//! Results tallying for finished (and moderated) contests.
//!
//! The leaderboard uses a weighted-score aggregation: each rater's influence
//! is scaled by how much of the contest they actually rated, so a drive-by
//! rater who scored two items does not swing the board the way a member who
//! rated everything does. With full participation the weighted score
//! degenerates to the plain mean.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::results::PartyRankResultsDto,
    server::{
        data::{
            item_rating::ItemRatingRepository, party_rank::PartyRankRepository,
            party_rank_member::PartyRankMemberRepository,
            party_rank_moderator::PartyRankModeratorRepository, rank_item::RankItemRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            party_rank::{PartyRank, PartyRankStatus},
            rank_item::RankItem,
            rating::ItemRating,
            results::{PartyRankResults, RankedItem, RaterValue},
            user::User,
        },
    },
};

pub struct ResultsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResultsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Tallies and returns a contest's results for the given viewer.
    ///
    /// Members see results once the contest is `finished`; moderators may peek
    /// at the live standings in any status. Author names on ranked items are
    /// resolved only for moderators, or for everyone once the contest finished
    /// with `show_authors_on_results` set.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to tally
    /// - `viewer`: The calling member
    ///
    /// # Returns
    /// - `Ok(PartyRankResultsDto)`: Ranked items plus the reveal order
    /// - `Err(AppError::AuthErr)`: Contest not finished and viewer is no moderator
    pub async fn results(
        &self,
        party_rank_id: i32,
        viewer: &User,
    ) -> Result<PartyRankResultsDto, AppError> {
        let moderator_repo = PartyRankModeratorRepository::new(self.db);
        let member_repo = PartyRankMemberRepository::new(self.db);
        let item_repo = RankItemRepository::new(self.db);
        let rating_repo = ItemRatingRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;

        let is_moderator = party_rank.creator_id == viewer.id
            || moderator_repo.is_moderator(party_rank.id, viewer.id).await?;

        if party_rank.status != PartyRankStatus::Finished && !is_moderator {
            return Err(AuthError::AccessDenied(
                viewer.id,
                format!(
                    "Results of party rank {} are not visible before it finishes",
                    party_rank.id
                ),
            )
            .into());
        }

        let items = item_repo
            .get_by_party_rank_with_authors(party_rank.id)
            .await?;
        let ratings = rating_repo
            .get_for_party_rank_with_users(party_rank.id)
            .await?;
        let favorites: Vec<i32> = member_repo
            .get_by_party_rank(party_rank.id)
            .await?
            .into_iter()
            .filter_map(|(member, _)| member.favorite_item_id)
            .collect();

        let author_names: HashMap<i32, String> = items
            .iter()
            .map(|(item, author)| (item.id, author.username.clone()))
            .collect();
        let items: Vec<RankItem> = items.into_iter().map(|(item, _)| item).collect();

        let results = tally(&party_rank, items, &ratings, &favorites);

        let authors_revealed = is_moderator
            || (party_rank.status == PartyRankStatus::Finished
                && party_rank.show_authors_on_results);

        Ok(results.into_dto(|item| {
            authors_revealed
                .then(|| author_names.get(&item.id).cloned())
                .flatten()
        }))
    }

    async fn require_party_rank(&self, party_rank_id: i32) -> Result<PartyRank, AppError> {
        PartyRankRepository::new(self.db)
            .get_by_id(party_rank_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Party rank {} not found", party_rank_id)))
    }
}

/// Tallies the leaderboard from a contest's items, ratings, and favorites.
///
/// A rater's weight is `rated / eligible`, where `eligible` counts the items
/// they did not author. An item's weighted score is the weight-scaled mean of
/// its ratings, 0.0 with no raters. Ordering: weighted score descending, then
/// plain average, then rating count, then item id. The reveal order is the
/// leaderboard reversed (last place first) for the slideshow viewer.
pub fn tally(
    party_rank: &PartyRank,
    items: Vec<RankItem>,
    ratings: &[(ItemRating, User)],
    favorites: &[i32],
) -> PartyRankResults {
    let mut rated_counts: HashMap<i32, u64> = HashMap::new();
    for (rating, _) in ratings {
        *rated_counts.entry(rating.user_id).or_insert(0) += 1;
    }

    let weights: HashMap<i32, f64> = rated_counts
        .iter()
        .map(|(&user_id, &rated)| {
            let eligible = items.iter().filter(|item| item.author_id != user_id).count() as u64;
            let weight = if eligible == 0 {
                0.0
            } else {
                rated as f64 / eligible as f64
            };
            (user_id, weight)
        })
        .collect();

    let mut favorite_counts: HashMap<i32, u64> = HashMap::new();
    for item_id in favorites {
        *favorite_counts.entry(*item_id).or_insert(0) += 1;
    }

    let mut ranked: Vec<RankedItem> = items
        .into_iter()
        .map(|item| {
            let item_ratings: Vec<&(ItemRating, User)> = ratings
                .iter()
                .filter(|(rating, _)| rating.item_id == item.id)
                .collect();

            let rating_count = item_ratings.len() as u64;
            let average = if item_ratings.is_empty() {
                0.0
            } else {
                item_ratings.iter().map(|(r, _)| r.value).sum::<f64>() / rating_count as f64
            };

            let weight_sum: f64 = item_ratings
                .iter()
                .map(|(r, _)| weights.get(&r.user_id).copied().unwrap_or(0.0))
                .sum();
            let weighted_score = if weight_sum > 0.0 {
                item_ratings
                    .iter()
                    .map(|(r, _)| weights.get(&r.user_id).copied().unwrap_or(0.0) * r.value)
                    .sum::<f64>()
                    / weight_sum
            } else {
                0.0
            };

            RankedItem {
                position: 0,
                favorite_count: favorite_counts.get(&item.id).copied().unwrap_or(0),
                ratings: item_ratings
                    .into_iter()
                    .map(|(rating, user)| RaterValue {
                        user_id: user.id,
                        username: user.username.clone(),
                        value: rating.value,
                    })
                    .collect(),
                weighted_score,
                average,
                rating_count,
                item,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.weighted_score
            .partial_cmp(&a.weighted_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.average
                    .partial_cmp(&a.average)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then(b.rating_count.cmp(&a.rating_count))
            .then(a.item.id.cmp(&b.item.id))
    });

    for (index, item) in ranked.iter_mut().enumerate() {
        item.position = index as u32 + 1;
    }

    let reveal_order: Vec<i32> = ranked.iter().rev().map(|item| item.item.id).collect();

    PartyRankResults {
        party_rank_id: party_rank.id,
        status: party_rank.status,
        items: ranked,
        reveal_order,
    }
}
