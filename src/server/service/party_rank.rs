//! Party rank lifecycle and membership services.
//!
//! This module provides the `PartyRankService` for contest management: creation,
//! listing, editing, the status machine, membership, and moderator grants. It
//! enforces the lifecycle gates (single-step forward transitions, the item-count
//! gate, terminal `finished`) and the membership rules around joining and leaving.

use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::party_rank::{
        CreatePartyRankDto, MemberProgressDto, PaginatedPartyRanksDto, PartyRankDto,
        UpdatePartyRankDto,
    },
    server::{
        data::{
            item_rating::ItemRatingRepository, party_rank::PartyRankRepository,
            party_rank_member::PartyRankMemberRepository,
            party_rank_moderator::PartyRankModeratorRepository, rank_item::RankItemRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            party_rank::{
                CreatePartyRankParam, GetPartyRanksParam, MemberProgress, PartyRank,
                PartyRankStatus, UpdatePartyRankParam,
            },
            user::User,
        },
    },
};

pub struct PartyRankService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyRankService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new party rank and enrolls the creator as its first member.
    ///
    /// The contest starts in `registration`. The creator needs no moderator
    /// entry; the creator check in the auth guard always passes for them.
    ///
    /// # Arguments
    /// - `creator`: The authenticated user opening the contest
    /// - `dto`: Contest creation data
    ///
    /// # Returns
    /// - `Ok(PartyRankDto)`: The created contest with counts and caller flags
    /// - `Err(AppError)`: Validation or database error
    pub async fn create(
        &self,
        creator: &User,
        dto: CreatePartyRankDto,
    ) -> Result<PartyRankDto, AppError> {
        let repo = PartyRankRepository::new(self.db);
        let member_repo = PartyRankMemberRepository::new(self.db);

        Self::validate_fields(&dto.name, dto.items_per_member)?;

        let deadline_submissions = Self::parse_deadline("submissions deadline", dto.deadline_submissions)?;
        let deadline_ratings = Self::parse_deadline("ratings deadline", dto.deadline_ratings)?;
        Self::validate_deadline_order(deadline_submissions, deadline_ratings)?;

        let party_rank = repo
            .create(CreatePartyRankParam {
                creator_id: creator.id,
                name: dto.name.trim().to_string(),
                description: dto.description,
                items_per_member: dto.items_per_member,
                allow_comments: dto.allow_comments,
                show_authors_on_results: dto.show_authors_on_results,
                deadline_submissions,
                deadline_ratings,
            })
            .await?;

        member_repo.create(party_rank.id, creator.id).await?;

        tracing::info!(
            "User {} created party rank {} ({})",
            creator.id,
            party_rank.id,
            party_rank.name
        );

        self.get_details(party_rank.id, Some(creator)).await
    }

    /// Gets a contest with its counts, moderator list, and caller flags.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to fetch
    /// - `viewer`: The caller, if authenticated, for the is_member/is_moderator flags
    ///
    /// # Returns
    /// - `Ok(PartyRankDto)`: The contest details
    /// - `Err(AppError::NotFound)`: No such contest
    pub async fn get_details(
        &self,
        party_rank_id: i32,
        viewer: Option<&User>,
    ) -> Result<PartyRankDto, AppError> {
        let party_rank = self.require_party_rank(party_rank_id).await?;

        let user_repo = UserRepository::new(self.db);
        let member_repo = PartyRankMemberRepository::new(self.db);
        let moderator_repo = PartyRankModeratorRepository::new(self.db);
        let item_repo = RankItemRepository::new(self.db);

        let creator = user_repo
            .find_by_id(party_rank.creator_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest creator not found".to_string()))?;

        let member_count = member_repo.count_by_party_rank(party_rank.id).await?;
        let item_count = item_repo.count_by_party_rank(party_rank.id).await?;
        let moderators = moderator_repo.get_by_party_rank(party_rank.id).await?;

        let (is_member, is_moderator) = match viewer {
            Some(user) => {
                let is_member = member_repo
                    .find_membership(party_rank.id, user.id)
                    .await?
                    .is_some();
                let is_moderator = party_rank.creator_id == user.id
                    || moderators.iter().any(|m| m.id == user.id);
                (is_member, is_moderator)
            }
            None => (false, false),
        };

        Ok(PartyRankDto {
            id: party_rank.id,
            creator_id: party_rank.creator_id,
            creator_name: creator.username,
            name: party_rank.name,
            description: party_rank.description,
            status: party_rank.status.as_str().to_string(),
            items_per_member: party_rank.items_per_member,
            allow_comments: party_rank.allow_comments,
            show_authors_on_results: party_rank.show_authors_on_results,
            deadline_submissions: party_rank.deadline_submissions,
            deadline_ratings: party_rank.deadline_ratings,
            finished_at: party_rank.finished_at,
            created_at: party_rank.created_at,
            member_count,
            item_count,
            is_member,
            is_moderator,
            moderators: moderators.into_iter().map(User::into_dto).collect(),
        })
    }

    /// Lists contests page by page, newest first.
    ///
    /// # Arguments
    /// - `param`: Page, page size, and the status/creator/membership filters
    ///
    /// # Returns
    /// - `Ok(PaginatedPartyRanksDto)`: One page plus totals
    /// - `Err(AppError)`: Database error
    pub async fn list(&self, param: GetPartyRanksParam) -> Result<PaginatedPartyRanksDto, AppError> {
        let repo = PartyRankRepository::new(self.db);

        let page = param.page;
        let per_page = param.per_page;
        let (items, total, total_pages) = repo.get_paginated(param).await?;

        Ok(PaginatedPartyRanksDto {
            party_ranks: items.into_iter().map(|item| item.into_dto()).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a contest's editable fields.
    ///
    /// Status, creator, and the finished timestamp are never touched through
    /// this path. Finished contests can no longer be edited.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to update
    /// - `viewer`: The calling moderator, for the response flags
    /// - `dto`: Replacement values for the editable fields
    ///
    /// # Returns
    /// - `Ok(PartyRankDto)`: The updated contest details
    /// - `Err(AppError)`: Validation failure, lifecycle conflict, or database error
    pub async fn update(
        &self,
        party_rank_id: i32,
        viewer: &User,
        dto: UpdatePartyRankDto,
    ) -> Result<PartyRankDto, AppError> {
        let repo = PartyRankRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;
        if party_rank.status == PartyRankStatus::Finished {
            return Err(AppError::Conflict(
                "Finished party ranks can no longer be edited".to_string(),
            ));
        }

        Self::validate_fields(&dto.name, dto.items_per_member)?;

        let deadline_submissions = Self::parse_deadline("submissions deadline", dto.deadline_submissions)?;
        let deadline_ratings = Self::parse_deadline("ratings deadline", dto.deadline_ratings)?;
        Self::validate_deadline_order(deadline_submissions, deadline_ratings)?;

        repo.update(UpdatePartyRankParam {
            id: party_rank.id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            items_per_member: dto.items_per_member,
            allow_comments: dto.allow_comments,
            show_authors_on_results: dto.show_authors_on_results,
            deadline_submissions,
            deadline_ratings,
        })
        .await?;

        self.get_details(party_rank_id, Some(viewer)).await
    }

    /// Advances a contest exactly one lifecycle step.
    ///
    /// Transitions only ever move forward: registration -> ongoing -> rating ->
    /// finished. Leaving `registration` requires at least one submitted item,
    /// and entering `finished` stamps `finished_at`. Announcing the transition
    /// to linked Discord channels is the caller's concern.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to advance
    /// - `requested`: The target status string from the request
    ///
    /// # Returns
    /// - `Ok(PartyRank)`: The contest after the transition
    /// - `Err(AppError::BadRequest)`: Unknown status string
    /// - `Err(AppError::Conflict)`: Not the single next step, or the item gate failed
    pub async fn change_status(
        &self,
        party_rank_id: i32,
        requested: &str,
    ) -> Result<PartyRank, AppError> {
        let repo = PartyRankRepository::new(self.db);
        let item_repo = RankItemRepository::new(self.db);

        let requested = PartyRankStatus::parse(requested)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", requested)))?;

        let party_rank = self.require_party_rank(party_rank_id).await?;

        if party_rank.status.next() != Some(requested) {
            return Err(AppError::Conflict(format!(
                "Cannot move party rank {} from '{}' to '{}'",
                party_rank.id,
                party_rank.status.as_str(),
                requested.as_str()
            )));
        }

        if party_rank.status == PartyRankStatus::Registration {
            let item_count = item_repo.count_by_party_rank(party_rank.id).await?;
            if item_count == 0 {
                return Err(AppError::Conflict(
                    "Cannot close submissions before any item was submitted".to_string(),
                ));
            }
        }

        let finished_at = (requested == PartyRankStatus::Finished).then(Utc::now);
        let updated = repo.set_status(party_rank.id, requested, finished_at).await?;

        tracing::info!(
            "Party rank {} moved to status '{}'",
            updated.id,
            updated.status.as_str()
        );

        Ok(updated)
    }

    /// Deletes a contest and everything hanging off it.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to delete
    ///
    /// # Returns
    /// - `Ok(())`: Contest removed, members/items/ratings/links cascaded
    /// - `Err(AppError::NotFound)`: No such contest
    pub async fn delete(&self, party_rank_id: i32) -> Result<(), AppError> {
        let repo = PartyRankRepository::new(self.db);

        self.require_party_rank(party_rank_id).await?;
        repo.delete(party_rank_id).await?;

        tracing::info!("Party rank {} deleted", party_rank_id);

        Ok(())
    }

    /// Enrolls the caller in a contest.
    ///
    /// Joining is open in every status except `finished`; late joiners simply
    /// have less time to submit or rate.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to join
    /// - `user`: The joining user
    ///
    /// # Returns
    /// - `Ok(())`: Membership created
    /// - `Err(AppError::Conflict)`: Contest finished or user already a member
    pub async fn join(&self, party_rank_id: i32, user: &User) -> Result<(), AppError> {
        let member_repo = PartyRankMemberRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;
        if party_rank.status == PartyRankStatus::Finished {
            return Err(AppError::Conflict(
                "Finished party ranks cannot be joined".to_string(),
            ));
        }

        if member_repo
            .find_membership(party_rank.id, user.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You are already a member of this party rank".to_string(),
            ));
        }

        member_repo.create(party_rank.id, user.id).await?;

        tracing::info!("User {} joined party rank {}", user.id, party_rank.id);

        Ok(())
    }

    /// Removes the caller from a contest, taking their submissions along.
    ///
    /// Leaving is restricted to `registration`: once submissions close the
    /// member pool is fixed so rating weights stay comparable. The creator
    /// can delete the contest but never leave it.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to leave
    /// - `user`: The leaving member
    ///
    /// # Returns
    /// - `Ok(())`: Membership, own items, and own ratings removed
    /// - `Err(AppError::Conflict)`: Caller is the creator or submissions already closed
    pub async fn leave(&self, party_rank_id: i32, user: &User) -> Result<(), AppError> {
        let member_repo = PartyRankMemberRepository::new(self.db);
        let item_repo = RankItemRepository::new(self.db);
        let rating_repo = ItemRatingRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;
        if party_rank.creator_id == user.id {
            return Err(AppError::Conflict(
                "The creator cannot leave their own party rank".to_string(),
            ));
        }
        if party_rank.status != PartyRankStatus::Registration {
            return Err(AppError::Conflict(
                "Members can only leave while registration is open".to_string(),
            ));
        }

        rating_repo
            .delete_by_user_for_party_rank(party_rank.id, user.id)
            .await?;
        item_repo.delete_by_author(party_rank.id, user.id).await?;
        member_repo.delete(party_rank.id, user.id).await?;

        tracing::info!("User {} left party rank {}", user.id, party_rank.id);

        Ok(())
    }

    /// Lists a contest's members with their rating progress.
    ///
    /// Progress counts ratings the member placed on items they did not author
    /// against the number of such items, for the member grid.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest whose members to list
    ///
    /// # Returns
    /// - `Ok(Vec<MemberProgressDto>)`: Members in join order with progress counts
    /// - `Err(AppError)`: Database error
    pub async fn members_with_progress(
        &self,
        party_rank_id: i32,
    ) -> Result<Vec<MemberProgressDto>, AppError> {
        let member_repo = PartyRankMemberRepository::new(self.db);
        let item_repo = RankItemRepository::new(self.db);
        let rating_repo = ItemRatingRepository::new(self.db);

        self.require_party_rank(party_rank_id).await?;

        let members = member_repo.get_by_party_rank(party_rank_id).await?;
        let items = item_repo.get_by_party_rank(party_rank_id).await?;

        let mut progress = Vec::with_capacity(members.len());
        for (member, user) in members {
            let eligible_count = items
                .iter()
                .filter(|item| item.author_id != user.id)
                .count() as u64;
            let rated_count = rating_repo
                .count_rated_by_user(party_rank_id, user.id)
                .await?;

            progress.push(
                MemberProgress {
                    user,
                    joined_at: member.joined_at,
                    rated_count,
                    eligible_count,
                    favorite_item_id: member.favorite_item_id,
                }
                .into_dto(),
            );
        }

        Ok(progress)
    }

    /// Grants a member moderator rights.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest the grant applies to
    /// - `user_id`: Member to promote
    ///
    /// # Returns
    /// - `Ok(())`: Moderator entry created
    /// - `Err(AppError::BadRequest)`: Target is not a member, or is the creator
    /// - `Err(AppError::Conflict)`: Target already holds an entry
    pub async fn add_moderator(&self, party_rank_id: i32, user_id: i32) -> Result<(), AppError> {
        let member_repo = PartyRankMemberRepository::new(self.db);
        let moderator_repo = PartyRankModeratorRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;
        if party_rank.creator_id == user_id {
            return Err(AppError::BadRequest(
                "The creator already moderates their own party rank".to_string(),
            ));
        }

        if member_repo
            .find_membership(party_rank.id, user_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(
                "Only members can be made moderators".to_string(),
            ));
        }

        if moderator_repo.is_moderator(party_rank.id, user_id).await? {
            return Err(AppError::Conflict(
                "User is already a moderator of this party rank".to_string(),
            ));
        }

        moderator_repo.create(party_rank.id, user_id).await?;

        tracing::info!(
            "User {} granted moderator rights on party rank {}",
            user_id,
            party_rank.id
        );

        Ok(())
    }

    /// Revokes a member's moderator entry.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest the entry belongs to
    /// - `user_id`: Moderator to demote
    ///
    /// # Returns
    /// - `Ok(())`: Entry removed
    /// - `Err(AppError::NotFound)`: User held no entry
    pub async fn remove_moderator(&self, party_rank_id: i32, user_id: i32) -> Result<(), AppError> {
        let moderator_repo = PartyRankModeratorRepository::new(self.db);

        self.require_party_rank(party_rank_id).await?;

        if !moderator_repo.delete(party_rank_id, user_id).await? {
            return Err(AppError::NotFound(format!(
                "User {} is not a moderator of party rank {}",
                user_id, party_rank_id
            )));
        }

        Ok(())
    }

    async fn require_party_rank(&self, party_rank_id: i32) -> Result<PartyRank, AppError> {
        PartyRankRepository::new(self.db)
            .get_by_id(party_rank_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Party rank {} not found", party_rank_id)))
    }

    fn validate_fields(name: &str, items_per_member: i32) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Party rank name cannot be empty".to_string(),
            ));
        }
        if items_per_member < 1 {
            return Err(AppError::BadRequest(
                "items_per_member must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Parses an optional deadline from "YYYY-MM-DD HH:MM" (UTC).
    fn parse_deadline(
        label: &str,
        value: Option<String>,
    ) -> Result<Option<DateTime<Utc>>, AppError> {
        let Some(value) = value else {
            return Ok(None);
        };

        NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M")
            .map(|naive| Some(naive.and_utc()))
            .map_err(|e| {
                AppError::BadRequest(format!(
                    "Invalid {} format. Expected 'YYYY-MM-DD HH:MM' in UTC, got '{}': {}",
                    label, value, e
                ))
            })
    }

    fn validate_deadline_order(
        deadline_submissions: Option<DateTime<Utc>>,
        deadline_ratings: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        if let (Some(submissions), Some(ratings)) = (deadline_submissions, deadline_ratings) {
            if submissions >= ratings {
                return Err(AppError::BadRequest(
                    "The submissions deadline must come before the ratings deadline".to_string(),
                ));
            }
        }

        Ok(())
    }
}
