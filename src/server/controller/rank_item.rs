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
        rank_item::{CreateRankItemDto, RankItemDto, UpdateRankItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::rank_item::RankItemService,
        state::AppState,
    },
};

/// Tag for grouping rank item endpoints in OpenAPI documentation
pub static RANK_ITEM_TAG: &str = "rank_item";

/// Submit an entry to a party rank.
///
/// Only open during `registration`, and only up to the contest's per-member
/// quota. The response shows the caller as author; other members see the
/// entry anonymized.
///
/// # Access Control
/// - `Member` - Caller must be enrolled in the contest
///
/// # Returns
/// - `201 Created` - The submitted entry
/// - `409 Conflict` - Submissions closed or quota reached
#[utoipa::path(
    post,
    path = "/api/party-ranks/{party_rank_id}/items",
    tag = RANK_ITEM_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    request_body = CreateRankItemDto,
    responses(
        (status = 201, description = "Successfully submitted entry", body = RankItemDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 409, description = "Submissions closed or quota reached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rank_item(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
    Json(payload): Json<CreateRankItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RankItemService::new(&state.db);
    let item = service.submit(party_rank_id, &user, payload).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// List a party rank's entries.
///
/// Author fields are present only for moderators, or for everyone once the
/// contest finished with author reveal enabled.
///
/// # Access Control
/// - `Member` - Caller must be enrolled in the contest
#[utoipa::path(
    get,
    path = "/api/party-ranks/{party_rank_id}/items",
    tag = RANK_ITEM_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved entries", body = Vec<RankItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rank_items(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RankItemService::new(&state.db);
    let items = service.list(party_rank_id, &user).await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Edit a submitted entry.
///
/// Authors may edit their own entries while registration is open; moderators
/// may edit any entry until the contest finishes.
#[utoipa::path(
    put,
    path = "/api/party-ranks/{party_rank_id}/items/{item_id}",
    tag = RANK_ITEM_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID"),
        ("item_id" = i32, Path, description = "Entry ID")
    ),
    request_body = UpdateRankItemDto,
    responses(
        (status = 200, description = "Successfully updated entry", body = RankItemDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not edit this entry", body = ErrorDto),
        (status = 404, description = "Party rank or entry not found", body = ErrorDto),
        (status = 409, description = "Entry can no longer be edited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rank_item(
    State(state): State<AppState>,
    session: Session,
    Path((party_rank_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateRankItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RankItemService::new(&state.db);
    let item = service.update(party_rank_id, item_id, &user, payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Remove a submitted entry.
///
/// Same rules as editing: authors during registration, moderators until the
/// contest finishes.
#[utoipa::path(
    delete,
    path = "/api/party-ranks/{party_rank_id}/items/{item_id}",
    tag = RANK_ITEM_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID"),
        ("item_id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted entry"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not delete this entry", body = ErrorDto),
        (status = 404, description = "Party rank or entry not found", body = ErrorDto),
        (status = 409, description = "Entry can no longer be deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rank_item(
    State(state): State<AppState>,
    session: Session,
    Path((party_rank_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RankItemService::new(&state.db);
    service.delete(party_rank_id, item_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
