//! Discord OAuth2 login flow.
//!
//! This module provides the `DiscordAuthService` for authenticating users through
//! Discord's OAuth2 flow. It generates authorization URLs with CSRF protection,
//! exchanges authorization codes for access tokens, and resolves the token into
//! an application user record.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Service for Discord OAuth2 authentication.
///
/// Acts as the orchestration layer between the OAuth2 client, Discord's identity
/// API, and the user repository. Each successful callback upserts the user so
/// their username and avatar stay current.
pub struct DiscordAuthService<'a> {
    /// Database connection for user operations.
    db: &'a DatabaseConnection,
    /// HTTP client for Discord API requests.
    http_client: &'a reqwest::Client,
    /// OAuth2 client for the Discord authentication flow.
    oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    /// Creates a new DiscordAuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `oauth_client` - Reference to the configured OAuth2 client
    ///
    /// # Returns
    /// - `DiscordAuthService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Creates an authorization URL that redirects users to Discord's OAuth2
    /// consent screen. Only the `identify` scope is requested; the application
    /// never needs guild or member data from the logging-in user.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and authenticates the user.
    ///
    /// Exchanges the authorization code for an access token, fetches the user's
    /// Discord profile, and creates or refreshes their user record.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from the Discord callback
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with current profile data
    /// - `Err(AppError::AuthErr)` - OAuth2 token exchange failed
    /// - `Err(AppError::ReqwestErr)` - Failed to fetch the profile from Discord
    /// - `Err(AppError::DbErr)` - Database error during the user upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let discord_user = self.fetch_discord_user(token.access_token().secret()).await?;

        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get().to_string(),
                username: discord_user.name.clone(),
                avatar_url: discord_user.avatar_url(),
            })
            .await?;

        tracing::info!("User {} logged in via Discord", user.username);

        Ok(user)
    }

    /// Retrieves the Discord user's profile using the provided access token.
    ///
    /// Fetches the authenticated user's profile including their ID, username,
    /// and avatar via Discord's "@me" endpoint.
    ///
    /// # Arguments
    /// - `access_token` - OAuth2 access token for the authenticated user
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - Successfully retrieved user profile
    /// - `Err(AppError::ReqwestErr)` - HTTP request failed or response parsing failed
    async fn fetch_discord_user(&self, access_token: &str) -> Result<DiscordUser, AppError> {
        let user_info = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
