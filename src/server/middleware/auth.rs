use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::{
        party_rank::PartyRankRepository, party_rank_member::PartyRankMemberRepository,
        party_rank_moderator::PartyRankModeratorRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{party_rank::PartyRank, user::User},
};

/// Access requirement checked against the logged-in user.
///
/// Each variant carries the party rank the requirement applies to. The creator
/// always satisfies `Moderator`; an explicit moderator entry is not needed.
pub enum Permission {
    /// User must be enrolled in the party rank.
    Member(i32),
    /// User must be the creator or hold a moderator entry.
    Moderator(i32),
    /// User must be the creator.
    Creator(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks the given permissions.
    ///
    /// With an empty permission slice this only requires a logged-in user.
    /// Permission checks against a party rank that does not exist fail with
    /// `AppError::NotFound` rather than an access error.
    ///
    /// # Returns
    /// - `Ok(User)`: The authenticated user satisfying every permission
    /// - `Err(AppError)`: Missing session, stale user, or failed check
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Member(party_rank_id) => {
                    let member_repo = PartyRankMemberRepository::new(self.db);

                    self.require_party_rank(*party_rank_id).await?;
                    if member_repo
                        .find_membership(*party_rank_id, user.id)
                        .await?
                        .is_none()
                    {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "User is not a member of party rank {}",
                                party_rank_id
                            ),
                        )
                        .into());
                    }
                }
                Permission::Moderator(party_rank_id) => {
                    let moderator_repo = PartyRankModeratorRepository::new(self.db);

                    let party_rank = self.require_party_rank(*party_rank_id).await?;
                    if party_rank.creator_id != user.id
                        && !moderator_repo.is_moderator(*party_rank_id, user.id).await?
                    {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "User is not a moderator of party rank {}",
                                party_rank_id
                            ),
                        )
                        .into());
                    }
                }
                Permission::Creator(party_rank_id) => {
                    let party_rank = self.require_party_rank(*party_rank_id).await?;
                    if party_rank.creator_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "User is not the creator of party rank {}",
                                party_rank_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    async fn require_party_rank(&self, party_rank_id: i32) -> Result<PartyRank, AppError> {
        PartyRankRepository::new(self.db)
            .get_by_id(party_rank_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Party rank {} not found",
                party_rank_id
            )))
    }
}
