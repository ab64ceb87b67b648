//! Rating phase services: the per-member queue, rating upserts, and favorites.
//!
//! Ratings are accepted while a contest is `ongoing` or `rating`. Members rate
//! every item except their own; the queue presents those items in a stable
//! per-member shuffle so nobody rates in submission order, and never exposes
//! who submitted what.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::rating::{
        ItemRatingDto, MyRatingsDto, QueueEntryDto, RateItemDto, RatingQueueDto, SetFavoriteDto,
    },
    server::{
        data::{
            item_rating::ItemRatingRepository, party_rank::PartyRankRepository,
            party_rank_member::PartyRankMemberRepository, rank_item::RankItemRepository,
        },
        error::AppError,
        model::{
            party_rank::PartyRank,
            rank_item::RankItem,
            rating::is_valid_rating,
            user::User,
        },
        util::shuffle::shuffle_for_user,
    },
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the caller's rating queue.
    ///
    /// The queue holds every item the caller did not author, in a shuffle that
    /// is stable per (contest, member) pair, each entry carrying the caller's
    /// current rating. Queue entries stay anonymous.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to build the queue for
    /// - `viewer`: The rating member
    ///
    /// # Returns
    /// - `Ok(RatingQueueDto)`: The shuffled queue
    /// - `Err(AppError::Conflict)`: Contest does not accept ratings right now
    pub async fn queue(
        &self,
        party_rank_id: i32,
        viewer: &User,
    ) -> Result<RatingQueueDto, AppError> {
        let item_repo = RankItemRepository::new(self.db);
        let rating_repo = ItemRatingRepository::new(self.db);

        let party_rank = self.require_rating_open(party_rank_id).await?;

        let mut items: Vec<RankItem> = item_repo
            .get_by_party_rank(party_rank.id)
            .await?
            .into_iter()
            .filter(|item| item.author_id != viewer.id)
            .collect();
        shuffle_for_user(party_rank.id, viewer.id, &mut items);

        let my_ratings: HashMap<i32, f64> = rating_repo
            .get_by_user_for_party_rank(party_rank.id, viewer.id)
            .await?
            .into_iter()
            .map(|rating| (rating.item_id, rating.value))
            .collect();

        let entries = items
            .into_iter()
            .map(|item| QueueEntryDto {
                my_rating: my_ratings.get(&item.id).copied(),
                item: item.into_dto(None),
            })
            .collect();

        Ok(RatingQueueDto {
            party_rank_id: party_rank.id,
            entries,
        })
    }

    /// Places or replaces the caller's rating on an item.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest the item belongs to
    /// - `item_id`: Item to rate
    /// - `rater`: The rating member
    /// - `dto`: The rating value
    ///
    /// # Returns
    /// - `Ok(ItemRatingDto)`: The stored rating
    /// - `Err(AppError::BadRequest)`: Own item, or value off the half-step scale
    /// - `Err(AppError::Conflict)`: Contest does not accept ratings right now
    pub async fn rate(
        &self,
        party_rank_id: i32,
        item_id: i32,
        rater: &User,
        dto: RateItemDto,
    ) -> Result<ItemRatingDto, AppError> {
        let rating_repo = ItemRatingRepository::new(self.db);

        let party_rank = self.require_rating_open(party_rank_id).await?;
        let item = self.require_item(&party_rank, item_id).await?;

        if item.author_id == rater.id {
            return Err(AppError::BadRequest(
                "You cannot rate your own item".to_string(),
            ));
        }
        if !is_valid_rating(dto.value) {
            return Err(AppError::BadRequest(format!(
                "Rating must be between 0.5 and 10.0 in half steps, got {}",
                dto.value
            )));
        }

        let rating = rating_repo.upsert(item.id, rater.id, dto.value).await?;

        Ok(ItemRatingDto {
            item_id: rating.item_id,
            value: rating.value,
        })
    }

    /// Removes the caller's rating from an item.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest the item belongs to
    /// - `item_id`: Item the rating sits on
    /// - `rater`: The member removing their rating
    ///
    /// # Returns
    /// - `Ok(())`: Rating removed
    /// - `Err(AppError::NotFound)`: The caller had not rated this item
    /// - `Err(AppError::Conflict)`: Contest does not accept ratings right now
    pub async fn unrate(
        &self,
        party_rank_id: i32,
        item_id: i32,
        rater: &User,
    ) -> Result<(), AppError> {
        let rating_repo = ItemRatingRepository::new(self.db);

        let party_rank = self.require_rating_open(party_rank_id).await?;
        let item = self.require_item(&party_rank, item_id).await?;

        if !rating_repo.delete(item.id, rater.id).await? {
            return Err(AppError::NotFound(format!(
                "No rating to remove on item {}",
                item.id
            )));
        }

        Ok(())
    }

    /// Returns the caller's rating map and favorite pick for a contest.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to report on
    /// - `viewer`: The calling member
    ///
    /// # Returns
    /// - `Ok(MyRatingsDto)`: All of the caller's ratings plus their favorite
    /// - `Err(AppError)`: Database error
    pub async fn my_ratings(
        &self,
        party_rank_id: i32,
        viewer: &User,
    ) -> Result<MyRatingsDto, AppError> {
        let member_repo = PartyRankMemberRepository::new(self.db);
        let rating_repo = ItemRatingRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;

        let ratings = rating_repo
            .get_by_user_for_party_rank(party_rank.id, viewer.id)
            .await?
            .into_iter()
            .map(|rating| ItemRatingDto {
                item_id: rating.item_id,
                value: rating.value,
            })
            .collect();

        let favorite_item_id = member_repo
            .find_membership(party_rank.id, viewer.id)
            .await?
            .and_then(|membership| membership.favorite_item_id);

        Ok(MyRatingsDto {
            party_rank_id: party_rank.id,
            ratings,
            favorite_item_id,
        })
    }

    /// Sets or clears the caller's favorite item.
    ///
    /// The favorite must reference an item of this contest that the caller did
    /// not author. Passing no item clears the pick.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest the pick applies to
    /// - `user`: The picking member
    /// - `dto`: The item to favorite, or None to clear
    ///
    /// # Returns
    /// - `Ok(MyRatingsDto)`: The caller's ratings with the updated favorite
    /// - `Err(AppError::BadRequest)`: Picked their own item
    /// - `Err(AppError::Conflict)`: Contest does not accept ratings right now
    pub async fn set_favorite(
        &self,
        party_rank_id: i32,
        user: &User,
        dto: SetFavoriteDto,
    ) -> Result<MyRatingsDto, AppError> {
        let member_repo = PartyRankMemberRepository::new(self.db);

        let party_rank = self.require_rating_open(party_rank_id).await?;

        if let Some(item_id) = dto.item_id {
            let item = self.require_item(&party_rank, item_id).await?;
            if item.author_id == user.id {
                return Err(AppError::BadRequest(
                    "You cannot pick your own item as favorite".to_string(),
                ));
            }
        }

        member_repo
            .set_favorite(party_rank.id, user.id, dto.item_id)
            .await?;

        self.my_ratings(party_rank.id, user).await
    }

    async fn require_party_rank(&self, party_rank_id: i32) -> Result<PartyRank, AppError> {
        PartyRankRepository::new(self.db)
            .get_by_id(party_rank_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Party rank {} not found", party_rank_id)))
    }

    async fn require_rating_open(&self, party_rank_id: i32) -> Result<PartyRank, AppError> {
        let party_rank = self.require_party_rank(party_rank_id).await?;

        if !party_rank.status.accepts_ratings() {
            return Err(AppError::Conflict(format!(
                "Party rank {} does not accept ratings while '{}'",
                party_rank.id,
                party_rank.status.as_str()
            )));
        }

        Ok(party_rank)
    }

    async fn require_item(
        &self,
        party_rank: &PartyRank,
        item_id: i32,
    ) -> Result<RankItem, AppError> {
        let item = RankItemRepository::new(self.db)
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", item_id)))?;

        if item.party_rank_id != party_rank.id {
            return Err(AppError::NotFound(format!(
                "Item {} not found in party rank {}",
                item_id, party_rank.id
            )));
        }

        Ok(item)
    }
}
