use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        discord::{DiscordGuildChannelDto, DiscordGuildDto, LinkChannelDto, PartyRankChannelDto},
    },
    server::{
        data::party_rank::PartyRankRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{
            discord::{DiscordGuildService, PartyRankChannelService},
            notification::PartyRankNotificationService,
        },
        state::AppState,
    },
};

/// Tag for grouping Discord endpoints in OpenAPI documentation
pub static DISCORD_TAG: &str = "discord";

/// List the Discord guilds the bot is in.
///
/// Backs the first step of the channel-link picker.
#[utoipa::path(
    get,
    path = "/api/discord/guilds",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved guilds", body = Vec<DiscordGuildDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = DiscordGuildService::new(&state.db);
    let guilds = service.get_guilds().await?;

    Ok((StatusCode::OK, Json(guilds)))
}

/// List a synced guild's text channels.
#[utoipa::path(
    get,
    path = "/api/discord/guilds/{guild_id}/channels",
    tag = DISCORD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved channels", body = Vec<DiscordGuildChannelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Guild not synced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_channels(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = DiscordGuildService::new(&state.db);
    let channels = service.get_channels(guild_id).await?;

    Ok((StatusCode::OK, Json(channels)))
}

/// Link a Discord channel to a party rank.
///
/// The linked channel receives all future announcements for the contest and
/// gets a one-time confirmation post.
///
/// # Access Control
/// - `Moderator` - Creator or a moderator of the contest
///
/// # Returns
/// - `201 Created` - The created link
/// - `400 Bad Request` - Channel not synced or in another guild
/// - `409 Conflict` - Channel already linked to this contest
#[utoipa::path(
    post,
    path = "/api/party-ranks/{party_rank_id}/channels",
    tag = DISCORD_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    request_body = LinkChannelDto,
    responses(
        (status = 201, description = "Successfully linked channel", body = PartyRankChannelDto),
        (status = 400, description = "Channel not synced or in another guild", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 409, description = "Channel already linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn link_channel(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
    Json(payload): Json<LinkChannelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator(party_rank_id)])
        .await?;

    let service = PartyRankChannelService::new(&state.db);
    let link = service
        .link(party_rank_id, payload.guild_id, payload.channel_id)
        .await?;

    // The guard already proved the contest exists.
    if let Some(party_rank) = PartyRankRepository::new(&state.db)
        .get_by_id(party_rank_id)
        .await?
    {
        let notifications = PartyRankNotificationService::new(
            &state.db,
            state.discord_http.clone(),
            state.app_url.clone(),
        );
        notifications
            .post_link_confirmation(&party_rank, link.channel_id)
            .await?;
    }

    Ok((StatusCode::CREATED, Json(link)))
}

/// List a party rank's channel links.
///
/// # Access Control
/// - `Member` - Caller must be enrolled in the contest
#[utoipa::path(
    get,
    path = "/api/party-ranks/{party_rank_id}/channels",
    tag = DISCORD_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved links", body = Vec<PartyRankChannelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_channel_links(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = PartyRankChannelService::new(&state.db);
    let links = service.list(party_rank_id).await?;

    Ok((StatusCode::OK, Json(links)))
}

/// Remove a channel link.
///
/// # Access Control
/// - `Moderator` - Creator or a moderator of the contest
#[utoipa::path(
    delete,
    path = "/api/party-ranks/{party_rank_id}/channels/{link_id}",
    tag = DISCORD_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID"),
        ("link_id" = i32, Path, description = "Channel link ID")
    ),
    responses(
        (status = 204, description = "Successfully removed link"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Party rank or link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlink_channel(
    State(state): State<AppState>,
    session: Session,
    Path((party_rank_id, link_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator(party_rank_id)])
        .await?;

    let service = PartyRankChannelService::new(&state.db);
    service.unlink(party_rank_id, link_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
