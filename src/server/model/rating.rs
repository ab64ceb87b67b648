//! Rating domain model.

use chrono::{DateTime, Utc};

/// A single member's rating of a single item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRating {
    pub id: i32,
    pub item_id: i32,
    pub user_id: i32,
    /// Half-step value between 0.5 and 10.0 inclusive.
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

impl ItemRating {
    pub fn from_entity(entity: entity::item_rating::Model) -> Self {
        Self {
            id: entity.id,
            item_id: entity.item_id,
            user_id: entity.user_id,
            value: entity.value,
            created_at: entity.created_at,
        }
    }
}

/// Validates that a rating value sits on the allowed half-step scale.
pub fn is_valid_rating(value: f64) -> bool {
    (0.5..=10.0).contains(&value) && (value * 2.0).fract() == 0.0
}
