//! Party rank domain models and parameters.
//!
//! Defines the contest domain model, its lifecycle status machine, and the
//! parameter types used by party rank operations.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::party_rank::{MemberProgressDto, PartyRankListItemDto},
    server::model::user::User,
};

/// Lifecycle state of a party rank.
///
/// Contests move strictly forward, one step at a time:
/// Registration -> Ongoing -> Rating -> Finished. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRankStatus {
    /// Members join and submit their entries.
    Registration,
    /// Submissions are closed; members watch/listen before rating. Ratings
    /// are already accepted in this phase.
    Ongoing,
    /// Dedicated rating phase before the reveal.
    Rating,
    /// Results are tallied and visible. Terminal.
    Finished,
}

impl PartyRankStatus {
    /// Parses the stored string form of the status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registration" => Some(Self::Registration),
            "ongoing" => Some(Self::Ongoing),
            "rating" => Some(Self::Rating),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }

    /// String form used in the database and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Ongoing => "ongoing",
            Self::Rating => "rating",
            Self::Finished => "finished",
        }
    }

    /// The only status this one may transition to, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Registration => Some(Self::Ongoing),
            Self::Ongoing => Some(Self::Rating),
            Self::Rating => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// Whether members may rate items in this status.
    pub fn accepts_ratings(&self) -> bool {
        matches!(self, Self::Ongoing | Self::Rating)
    }
}

/// Party rank contest with lifecycle, submission rules, and deadlines.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyRank {
    /// Unique identifier for the contest.
    pub id: i32,
    /// Database id of the creating user.
    pub creator_id: i32,
    /// Contest name.
    pub name: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Current lifecycle status.
    pub status: PartyRankStatus,
    /// How many items each member may submit.
    pub items_per_member: i32,
    /// Whether submissions may carry a comment.
    pub allow_comments: bool,
    /// Whether author names are revealed with the results.
    pub show_authors_on_results: bool,
    /// Optional deadline for the registration phase.
    pub deadline_submissions: Option<DateTime<Utc>>,
    /// Optional deadline for the rating phase.
    pub deadline_ratings: Option<DateTime<Utc>>,
    /// Stamped when the contest enters `Finished`.
    pub finished_at: Option<DateTime<Utc>>,
    /// Timestamp when the contest was created.
    pub created_at: DateTime<Utc>,
}

impl PartyRank {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PartyRank)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored status string is not a known status
    pub fn from_entity(entity: entity::party_rank::Model) -> Result<Self, DbErr> {
        let status = PartyRankStatus::parse(&entity.status)
            .ok_or_else(|| DbErr::Custom(format!("Unknown party rank status: {}", entity.status)))?;

        Ok(Self {
            id: entity.id,
            creator_id: entity.creator_id,
            name: entity.name,
            description: entity.description,
            status,
            items_per_member: entity.items_per_member,
            allow_comments: entity.allow_comments,
            show_authors_on_results: entity.show_authors_on_results,
            deadline_submissions: entity.deadline_submissions,
            deadline_ratings: entity.deadline_ratings,
            finished_at: entity.finished_at,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a new party rank.
#[derive(Debug, Clone)]
pub struct CreatePartyRankParam {
    /// Database id of the creating user.
    pub creator_id: i32,
    /// Contest name.
    pub name: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// How many items each member may submit.
    pub items_per_member: i32,
    /// Whether submissions may carry a comment.
    pub allow_comments: bool,
    /// Whether author names are revealed with the results.
    pub show_authors_on_results: bool,
    /// Optional deadline for the registration phase.
    pub deadline_submissions: Option<DateTime<Utc>>,
    /// Optional deadline for the rating phase.
    pub deadline_ratings: Option<DateTime<Utc>>,
}

/// Parameters for updating a party rank's editable fields.
///
/// Status, creator, and timestamps are never updated through this path.
#[derive(Debug, Clone)]
pub struct UpdatePartyRankParam {
    /// ID of the contest to update.
    pub id: i32,
    /// New contest name.
    pub name: String,
    /// New description (None clears it).
    pub description: Option<String>,
    /// New per-member submission cap.
    pub items_per_member: i32,
    /// New comment toggle.
    pub allow_comments: bool,
    /// New author reveal toggle.
    pub show_authors_on_results: bool,
    /// New registration deadline (None clears it).
    pub deadline_submissions: Option<DateTime<Utc>>,
    /// New rating deadline (None clears it).
    pub deadline_ratings: Option<DateTime<Utc>>,
}

/// Parameters for the paginated party rank listing.
#[derive(Debug, Clone)]
pub struct GetPartyRanksParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of contests per page.
    pub per_page: u64,
    /// Restrict to a single lifecycle status.
    pub status: Option<PartyRankStatus>,
    /// Restrict to contests created by this user.
    pub created_by: Option<i32>,
    /// Restrict to contests this user is a member of.
    pub member_of: Option<i32>,
}

/// Listing row: a contest plus its creator and aggregate counts.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyRankListItem {
    pub party_rank: PartyRank,
    pub creator_name: String,
    pub member_count: u64,
    pub item_count: u64,
}

impl PartyRankListItem {
    pub fn into_dto(self) -> PartyRankListItemDto {
        PartyRankListItemDto {
            id: self.party_rank.id,
            creator_id: self.party_rank.creator_id,
            creator_name: self.creator_name,
            name: self.party_rank.name,
            status: self.party_rank.status.as_str().to_string(),
            member_count: self.member_count,
            item_count: self.item_count,
            deadline_submissions: self.party_rank.deadline_submissions,
            deadline_ratings: self.party_rank.deadline_ratings,
            created_at: self.party_rank.created_at,
        }
    }
}

/// Contest membership row.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyRankMember {
    pub id: i32,
    pub party_rank_id: i32,
    pub user_id: i32,
    pub favorite_item_id: Option<i32>,
    pub joined_at: DateTime<Utc>,
}

impl PartyRankMember {
    pub fn from_entity(entity: entity::party_rank_member::Model) -> Self {
        Self {
            id: entity.id,
            party_rank_id: entity.party_rank_id,
            user_id: entity.user_id,
            favorite_item_id: entity.favorite_item_id,
            joined_at: entity.joined_at,
        }
    }
}

/// A member together with their rating progress, for the member grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberProgress {
    pub user: User,
    pub joined_at: DateTime<Utc>,
    /// Ratings the member has placed on items they did not author.
    pub rated_count: u64,
    /// Items in the contest the member did not author.
    pub eligible_count: u64,
    pub favorite_item_id: Option<i32>,
}

impl MemberProgress {
    pub fn into_dto(self) -> MemberProgressDto {
        MemberProgressDto {
            user: self.user.into_dto(),
            joined_at: self.joined_at,
            rated_count: self.rated_count,
            eligible_count: self.eligible_count,
            favorite_item_id: self.favorite_item_id,
        }
    }
}
