//! Entry submission and management services.
//!
//! Members submit entries while registration is open, within their per-member
//! quota. Authors may edit their own entries during registration; moderators
//! may edit any entry through registration and ongoing. Author identity on
//! listed entries stays hidden until the results visibility rules reveal it.

use sea_orm::DatabaseConnection;
use url::Url;

use crate::{
    model::rank_item::{CreateRankItemDto, RankItemDto, UpdateRankItemDto},
    server::{
        data::{
            party_rank::PartyRankRepository, party_rank_moderator::PartyRankModeratorRepository,
            rank_item::RankItemRepository, user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            party_rank::{PartyRank, PartyRankStatus},
            rank_item::{CreateRankItemParam, MediaKind, RankItem, UpdateRankItemParam},
            user::User,
        },
    },
};

/// Hosts accepted for `youtube` entries.
const YOUTUBE_HOSTS: [&str; 4] = ["youtube.com", "www.youtube.com", "m.youtube.com", "youtu.be"];

pub struct RankItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new entry to a contest.
    ///
    /// Only open while the contest is in `registration`, and only up to the
    /// contest's per-member quota.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest to submit into
    /// - `author`: The submitting member
    /// - `dto`: Entry data
    ///
    /// # Returns
    /// - `Ok(RankItemDto)`: The created entry, author visible to its owner
    /// - `Err(AppError::Conflict)`: Submissions closed or quota reached
    /// - `Err(AppError::BadRequest)`: Validation failure
    pub async fn submit(
        &self,
        party_rank_id: i32,
        author: &User,
        dto: CreateRankItemDto,
    ) -> Result<RankItemDto, AppError> {
        let item_repo = RankItemRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;
        if party_rank.status != PartyRankStatus::Registration {
            return Err(AppError::Conflict(
                "Submissions are closed for this party rank".to_string(),
            ));
        }

        let media_kind = Self::validate_entry(
            &party_rank,
            &dto.name,
            &dto.media_kind,
            &dto.media_url,
            &dto.comment,
            dto.start_seconds,
        )?;

        let submitted = item_repo.count_by_author(party_rank.id, author.id).await?;
        if submitted >= party_rank.items_per_member as u64 {
            return Err(AppError::Conflict(format!(
                "Submission limit of {} items reached",
                party_rank.items_per_member
            )));
        }

        let item = item_repo
            .create(CreateRankItemParam {
                party_rank_id: party_rank.id,
                author_id: author.id,
                name: dto.name.trim().to_string(),
                comment: dto.comment,
                media_kind,
                media_url: dto.media_url,
                start_seconds: dto.start_seconds,
            })
            .await?;

        tracing::info!(
            "User {} submitted item {} to party rank {}",
            author.id,
            item.id,
            party_rank.id
        );

        Ok(item.into_dto(Some(author.username.clone())))
    }

    /// Lists a contest's entries, oldest first.
    ///
    /// Author fields are filled in per entry: members always see their own,
    /// moderators see all, and everyone sees them once the contest finished
    /// with `show_authors_on_results` set.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest whose entries to list
    /// - `viewer`: The calling member
    ///
    /// # Returns
    /// - `Ok(Vec<RankItemDto>)`: Entries with author visibility applied
    /// - `Err(AppError)`: Database error
    pub async fn list(
        &self,
        party_rank_id: i32,
        viewer: &User,
    ) -> Result<Vec<RankItemDto>, AppError> {
        let item_repo = RankItemRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;
        let is_moderator = self.is_moderator(&party_rank, viewer.id).await?;
        let revealed = is_moderator
            || (party_rank.status == PartyRankStatus::Finished
                && party_rank.show_authors_on_results);

        let items = item_repo
            .get_by_party_rank_with_authors(party_rank.id)
            .await?;

        Ok(items
            .into_iter()
            .map(|(item, author)| {
                let author_name = (revealed || item.author_id == viewer.id)
                    .then(|| author.username.clone());
                item.into_dto(author_name)
            })
            .collect())
    }

    /// Replaces an entry's fields.
    ///
    /// Authors may edit during `registration`; moderators also during
    /// `ongoing`. The same validation as submission applies.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest the entry belongs to
    /// - `item_id`: Entry to update
    /// - `editor`: The calling member
    /// - `dto`: Replacement entry data
    ///
    /// # Returns
    /// - `Ok(RankItemDto)`: The updated entry with its author revealed
    /// - `Err(AppError)`: Permission, validation, or database error
    pub async fn update(
        &self,
        party_rank_id: i32,
        item_id: i32,
        editor: &User,
        dto: UpdateRankItemDto,
    ) -> Result<RankItemDto, AppError> {
        let item_repo = RankItemRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;
        let item = self.require_item(&party_rank, item_id).await?;
        self.require_editable(&party_rank, &item, editor).await?;

        let media_kind = Self::validate_entry(
            &party_rank,
            &dto.name,
            &dto.media_kind,
            &dto.media_url,
            &dto.comment,
            dto.start_seconds,
        )?;

        let updated = item_repo
            .update(UpdateRankItemParam {
                id: item.id,
                name: dto.name.trim().to_string(),
                comment: dto.comment,
                media_kind,
                media_url: dto.media_url,
                start_seconds: dto.start_seconds,
            })
            .await?;

        // Edit permission implies the editor may see the author.
        let author = user_repo
            .find_by_id(updated.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item author not found".to_string()))?;

        Ok(updated.into_dto(Some(author.username)))
    }

    /// Deletes an entry, along with its ratings and favorite marks.
    ///
    /// Follows the same permission window as `update`.
    ///
    /// # Arguments
    /// - `party_rank_id`: Contest the entry belongs to
    /// - `item_id`: Entry to delete
    /// - `editor`: The calling member
    ///
    /// # Returns
    /// - `Ok(())`: Entry removed
    /// - `Err(AppError)`: Permission or database error
    pub async fn delete(
        &self,
        party_rank_id: i32,
        item_id: i32,
        editor: &User,
    ) -> Result<(), AppError> {
        let item_repo = RankItemRepository::new(self.db);

        let party_rank = self.require_party_rank(party_rank_id).await?;
        let item = self.require_item(&party_rank, item_id).await?;
        self.require_editable(&party_rank, &item, editor).await?;

        item_repo.delete(item.id).await?;

        tracing::info!(
            "User {} deleted item {} from party rank {}",
            editor.id,
            item.id,
            party_rank.id
        );

        Ok(())
    }

    async fn require_party_rank(&self, party_rank_id: i32) -> Result<PartyRank, AppError> {
        PartyRankRepository::new(self.db)
            .get_by_id(party_rank_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Party rank {} not found", party_rank_id)))
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

        // Guard against cross-contest item ids in the path.
        if item.party_rank_id != party_rank.id {
            return Err(AppError::NotFound(format!(
                "Item {} not found in party rank {}",
                item_id, party_rank.id
            )));
        }

        Ok(item)
    }

    async fn is_moderator(&self, party_rank: &PartyRank, user_id: i32) -> Result<bool, AppError> {
        if party_rank.creator_id == user_id {
            return Ok(true);
        }

        Ok(PartyRankModeratorRepository::new(self.db)
            .is_moderator(party_rank.id, user_id)
            .await?)
    }

    /// Checks whether `editor` may modify `item` in the contest's current
    /// status. Moderators get registration and ongoing, authors only
    /// registration.
    async fn require_editable(
        &self,
        party_rank: &PartyRank,
        item: &RankItem,
        editor: &User,
    ) -> Result<(), AppError> {
        if self.is_moderator(party_rank, editor.id).await? {
            if matches!(
                party_rank.status,
                PartyRankStatus::Registration | PartyRankStatus::Ongoing
            ) {
                return Ok(());
            }
            return Err(AppError::Conflict(
                "Items can no longer be modified in this party rank".to_string(),
            ));
        }

        if item.author_id != editor.id {
            return Err(AppError::AuthErr(AuthError::AccessDenied(
                editor.id,
                format!("User is not allowed to modify item {}", item.id),
            )));
        }

        if party_rank.status != PartyRankStatus::Registration {
            return Err(AppError::Conflict(
                "Own items can only be modified while registration is open".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_entry(
        party_rank: &PartyRank,
        name: &str,
        media_kind: &str,
        media_url: &str,
        comment: &Option<String>,
        start_seconds: Option<i32>,
    ) -> Result<MediaKind, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Item name cannot be empty".to_string()));
        }

        let kind = MediaKind::parse(media_kind)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown media kind '{}'", media_kind)))?;

        let url = Url::parse(media_url)
            .map_err(|e| AppError::BadRequest(format!("Invalid media URL '{}': {}", media_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::BadRequest(
                "Media URL must use http or https".to_string(),
            ));
        }

        if kind == MediaKind::Youtube {
            let host = url.host_str().unwrap_or_default();
            if !YOUTUBE_HOSTS.contains(&host) {
                return Err(AppError::BadRequest(format!(
                    "'{}' is not a YouTube URL",
                    media_url
                )));
            }
        }

        if comment.is_some() && !party_rank.allow_comments {
            return Err(AppError::BadRequest(
                "Comments are disabled for this party rank".to_string(),
            ));
        }

        if start_seconds.is_some_and(|offset| offset < 0) {
            return Err(AppError::BadRequest(
                "start_seconds cannot be negative".to_string(),
            ));
        }

        Ok(kind)
    }
}
