//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a party rank together with its creator.
///
/// This is a convenience method that creates:
/// 1. User (as party rank creator)
/// 2. Party rank owned by that user
/// 3. Membership entry for the creator
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, party_rank))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_party_rank_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::party_rank::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let party_rank = crate::factory::party_rank::create_party_rank(db, user.id).await?;
    crate::factory::party_rank_member::create_member(db, party_rank.id, user.id).await?;

    Ok((user, party_rank))
}

/// Creates a party rank with the requested number of members.
///
/// The first returned user is the creator. Every user (creator included) gets
/// a membership entry. Useful for rating and results tests that need several
/// participants.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_count` - Total number of members to create (must be at least 1)
///
/// # Returns
/// - `Ok((party_rank, users))` - Created party rank and its members in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_party_rank_with_members(
    db: &DatabaseConnection,
    member_count: usize,
) -> Result<(entity::party_rank::Model, Vec<entity::user::Model>), DbErr> {
    let (creator, party_rank) = create_party_rank_with_creator(db).await?;

    let mut users = vec![creator];
    for _ in 1..member_count {
        let user = crate::factory::user::create_user(db).await?;
        crate::factory::party_rank_member::create_member(db, party_rank.id, user.id).await?;
        users.push(user);
    }

    Ok((party_rank, users))
}
