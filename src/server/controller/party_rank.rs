use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        party_rank::{
            AddModeratorDto, CreatePartyRankDto, MemberProgressDto, PaginatedPartyRanksDto,
            PartyRankDto, UpdatePartyRankDto, UpdateStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::party_rank::{GetPartyRanksParam, PartyRankStatus},
        service::{
            notification::PartyRankNotificationService, party_rank::PartyRankService,
        },
        state::AppState,
    },
};

/// Tag for grouping party rank endpoints in OpenAPI documentation
pub static PARTY_RANK_TAG: &str = "party_rank";

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Restrict to a single lifecycle status.
    pub status: Option<String>,
    /// Only contests created by the caller.
    #[serde(default)]
    pub mine: bool,
    /// Only contests the caller is a member of.
    #[serde(default)]
    pub member: bool,
}

fn default_entries() -> u64 {
    10
}

/// Create a new party rank.
///
/// Opens a new contest in `registration` with the caller as creator and
/// first member.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `201 Created` - The created contest
/// - `400 Bad Request` - Invalid name, quota, or deadline
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/party-ranks",
    tag = PARTY_RANK_TAG,
    request_body = CreatePartyRankDto,
    responses(
        (status = 201, description = "Successfully created party rank", body = PartyRankDto),
        (status = 400, description = "Invalid contest data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_party_rank(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePartyRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = PartyRankService::new(&state.db);
    let party_rank = service.create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(party_rank)))
}

/// Get a paginated list of party ranks.
///
/// Supports filtering by status and by the caller's involvement. The `mine`
/// flag restricts to contests the caller created; `member` to contests they
/// joined.
///
/// # Returns
/// - `200 OK` - One page of contests with totals
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/party-ranks",
    tag = PARTY_RANK_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("status" = Option<String>, Query, description = "Filter by lifecycle status"),
        ("mine" = Option<bool>, Query, description = "Only contests created by the caller"),
        ("member" = Option<bool>, Query, description = "Only contests the caller joined")
    ),
    responses(
        (status = 200, description = "Successfully retrieved party ranks", body = PaginatedPartyRanksDto),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_party_ranks(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = params
        .status
        .as_deref()
        .map(|value| {
            PartyRankStatus::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", value)))
        })
        .transpose()?;

    let service = PartyRankService::new(&state.db);
    let page = service
        .list(GetPartyRanksParam {
            page: params.page,
            per_page: params.entries,
            status,
            created_by: params.mine.then_some(user.id),
            member_of: params.member.then_some(user.id),
        })
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a party rank's details.
///
/// # Returns
/// - `200 OK` - Contest details with counts and caller flags
/// - `404 Not Found` - No such contest
#[utoipa::path(
    get,
    path = "/api/party-ranks/{party_rank_id}",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved party rank", body = PartyRankDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_party_rank(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = PartyRankService::new(&state.db);
    let party_rank = service.get_details(party_rank_id, Some(&user)).await?;

    Ok((StatusCode::OK, Json(party_rank)))
}

/// Update a party rank's editable fields.
///
/// # Access Control
/// - `Moderator` - Creator or a moderator of the contest
///
/// # Returns
/// - `200 OK` - The updated contest
/// - `409 Conflict` - Contest already finished
#[utoipa::path(
    put,
    path = "/api/party-ranks/{party_rank_id}",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    request_body = UpdatePartyRankDto,
    responses(
        (status = 200, description = "Successfully updated party rank", body = PartyRankDto),
        (status = 400, description = "Invalid contest data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 409, description = "Contest already finished", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_party_rank(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
    Json(payload): Json<UpdatePartyRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator(party_rank_id)])
        .await?;

    let service = PartyRankService::new(&state.db);
    let party_rank = service.update(party_rank_id, &user, payload).await?;

    Ok((StatusCode::OK, Json(party_rank)))
}

/// Delete a party rank.
///
/// # Access Control
/// - `Creator` - Only the contest creator
///
/// # Returns
/// - `204 No Content` - Contest and all dependent rows removed
#[utoipa::path(
    delete,
    path = "/api/party-ranks/{party_rank_id}",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted party rank"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the creator", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_party_rank(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Creator(party_rank_id)])
        .await?;

    let service = PartyRankService::new(&state.db);
    service.delete(party_rank_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Advance a party rank to the next lifecycle status.
///
/// The transition is announced in every linked Discord channel; reaching
/// `finished` also posts the results podium.
///
/// # Access Control
/// - `Moderator` - Creator or a moderator of the contest
///
/// # Returns
/// - `200 OK` - The contest after the transition
/// - `409 Conflict` - Not the single next step, or no items submitted yet
#[utoipa::path(
    post,
    path = "/api/party-ranks/{party_rank_id}/status",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Successfully advanced party rank", body = PartyRankDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a moderator", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator(party_rank_id)])
        .await?;

    let service = PartyRankService::new(&state.db);
    let party_rank = service.change_status(party_rank_id, &payload.status).await?;

    let notifications = PartyRankNotificationService::new(
        &state.db,
        state.discord_http.clone(),
        state.app_url.clone(),
    );
    notifications.announce_status(&party_rank).await?;
    if party_rank.status == PartyRankStatus::Finished {
        notifications.post_results(&party_rank).await?;
    }

    let details = service.get_details(party_rank_id, Some(&user)).await?;

    Ok((StatusCode::OK, Json(details)))
}

/// Join a party rank.
///
/// # Returns
/// - `204 No Content` - Caller enrolled
/// - `409 Conflict` - Contest finished or caller already a member
#[utoipa::path(
    post,
    path = "/api/party-ranks/{party_rank_id}/join",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 204, description = "Successfully joined party rank"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 409, description = "Contest finished or already joined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_party_rank(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = PartyRankService::new(&state.db);
    service.join(party_rank_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Leave a party rank during registration.
///
/// The caller's submissions and ratings go with them.
///
/// # Returns
/// - `204 No Content` - Membership removed
/// - `409 Conflict` - Caller is the creator, or registration already closed
#[utoipa::path(
    delete,
    path = "/api/party-ranks/{party_rank_id}/leave",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 204, description = "Successfully left party rank"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 409, description = "Creator cannot leave, or registration closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_party_rank(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = PartyRankService::new(&state.db);
    service.leave(party_rank_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a party rank's members with their rating progress.
///
/// # Access Control
/// - `Member` - Caller must be enrolled in the contest
#[utoipa::path(
    get,
    path = "/api/party-ranks/{party_rank_id}/members",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<MemberProgressDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = PartyRankService::new(&state.db);
    let members = service.members_with_progress(party_rank_id).await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Grant a member moderator rights.
///
/// # Access Control
/// - `Creator` - Only the contest creator
#[utoipa::path(
    post,
    path = "/api/party-ranks/{party_rank_id}/moderators",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    request_body = AddModeratorDto,
    responses(
        (status = 204, description = "Successfully added moderator"),
        (status = 400, description = "Target is not a member, or is the creator", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the creator", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 409, description = "Target is already a moderator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_moderator(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
    Json(payload): Json<AddModeratorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Creator(party_rank_id)])
        .await?;

    let service = PartyRankService::new(&state.db);
    service.add_moderator(party_rank_id, payload.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Revoke a member's moderator rights.
///
/// # Access Control
/// - `Creator` - Only the contest creator
#[utoipa::path(
    delete,
    path = "/api/party-ranks/{party_rank_id}/moderators/{user_id}",
    tag = PARTY_RANK_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID"),
        ("user_id" = i32, Path, description = "Member whose moderator entry to remove")
    ),
    responses(
        (status = 204, description = "Successfully removed moderator"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the creator", body = ErrorDto),
        (status = 404, description = "Party rank or moderator entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_moderator(
    State(state): State<AppState>,
    session: Session,
    Path((party_rank_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Creator(party_rank_id)])
        .await?;

    let service = PartyRankService::new(&state.db);
    service.remove_moderator(party_rank_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
