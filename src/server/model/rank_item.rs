//! Rank item domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::rank_item::RankItemDto;

/// The type of media an entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
    Image,
    /// A YouTube watch link rather than a direct media URL.
    Youtube,
}

impl MediaKind {
    /// Parses the stored string form of the media kind.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "image" => Some(Self::Image),
            "youtube" => Some(Self::Youtube),
            _ => None,
        }
    }

    /// String form used in the database and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Youtube => "youtube",
        }
    }
}

/// A submitted contest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RankItem {
    pub id: i32,
    pub party_rank_id: i32,
    pub author_id: i32,
    pub name: String,
    pub comment: Option<String>,
    pub media_kind: MediaKind,
    pub media_url: String,
    /// Playback offset in seconds for video/audio/youtube entries.
    pub start_seconds: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl RankItem {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(RankItem)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored media kind is not a known kind
    pub fn from_entity(entity: entity::rank_item::Model) -> Result<Self, DbErr> {
        let media_kind = MediaKind::parse(&entity.media_kind).ok_or_else(|| {
            DbErr::Custom(format!("Unknown media kind: {}", entity.media_kind))
        })?;

        Ok(Self {
            id: entity.id,
            party_rank_id: entity.party_rank_id,
            author_id: entity.author_id,
            name: entity.name,
            comment: entity.comment,
            media_kind,
            media_url: entity.media_url,
            start_seconds: entity.start_seconds,
            created_at: entity.created_at,
        })
    }

    /// Builds the API representation. Passing `None` for `author_name`
    /// strips the author fields so the entry stays anonymous.
    pub fn into_dto(self, author_name: Option<String>) -> RankItemDto {
        let author_id = author_name.as_ref().map(|_| self.author_id);

        RankItemDto {
            id: self.id,
            party_rank_id: self.party_rank_id,
            author_id,
            author_name,
            name: self.name,
            comment: self.comment,
            media_kind: self.media_kind.as_str().to_string(),
            media_url: self.media_url,
            start_seconds: self.start_seconds,
            created_at: self.created_at,
        }
    }
}

/// Parameters for submitting a new entry.
#[derive(Debug, Clone)]
pub struct CreateRankItemParam {
    pub party_rank_id: i32,
    pub author_id: i32,
    pub name: String,
    pub comment: Option<String>,
    pub media_kind: MediaKind,
    pub media_url: String,
    pub start_seconds: Option<i32>,
}

/// Parameters for editing an entry's fields.
#[derive(Debug, Clone)]
pub struct UpdateRankItemParam {
    pub id: i32,
    pub name: String,
    pub comment: Option<String>,
    pub media_kind: MediaKind,
    pub media_url: String,
    pub start_seconds: Option<i32>,
}
