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
        rating::{ItemRatingDto, MyRatingsDto, RateItemDto, RatingQueueDto, SetFavoriteDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::rating::RatingService,
        state::AppState,
    },
};

/// Tag for grouping rating endpoints in OpenAPI documentation
pub static RATING_TAG: &str = "rating";

/// Get the caller's personal rating queue.
///
/// Entries the caller did not author, shuffled in an order that is stable
/// per member but different between members, each with the caller's current
/// rating if one exists.
///
/// # Access Control
/// - `Member` - Caller must be enrolled in the contest
///
/// # Returns
/// - `200 OK` - The shuffled queue
/// - `409 Conflict` - Contest does not accept ratings right now
#[utoipa::path(
    get,
    path = "/api/party-ranks/{party_rank_id}/queue",
    tag = RATING_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved rating queue", body = RatingQueueDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 409, description = "Contest does not accept ratings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_queue(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RatingService::new(&state.db);
    let queue = service.queue(party_rank_id, &user).await?;

    Ok((StatusCode::OK, Json(queue)))
}

/// Rate an entry, or change an existing rating.
///
/// Values run from 0.5 to 10.0 in half steps. Members cannot rate their own
/// entries.
///
/// # Access Control
/// - `Member` - Caller must be enrolled in the contest
#[utoipa::path(
    put,
    path = "/api/party-ranks/{party_rank_id}/items/{item_id}/rating",
    tag = RATING_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID"),
        ("item_id" = i32, Path, description = "Entry ID")
    ),
    request_body = RateItemDto,
    responses(
        (status = 200, description = "Successfully rated entry", body = ItemRatingDto),
        (status = 400, description = "Own entry, or value off the half-step scale", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank or entry not found", body = ErrorDto),
        (status = 409, description = "Contest does not accept ratings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rate_item(
    State(state): State<AppState>,
    session: Session,
    Path((party_rank_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<RateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RatingService::new(&state.db);
    let rating = service.rate(party_rank_id, item_id, &user, payload).await?;

    Ok((StatusCode::OK, Json(rating)))
}

/// Withdraw the caller's rating of an entry.
#[utoipa::path(
    delete,
    path = "/api/party-ranks/{party_rank_id}/items/{item_id}/rating",
    tag = RATING_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID"),
        ("item_id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 204, description = "Successfully withdrew rating"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "No rating to withdraw", body = ErrorDto),
        (status = 409, description = "Contest does not accept ratings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unrate_item(
    State(state): State<AppState>,
    session: Session,
    Path((party_rank_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RatingService::new(&state.db);
    service.unrate(party_rank_id, item_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get all of the caller's ratings for a contest, plus their favorite.
#[utoipa::path(
    get,
    path = "/api/party-ranks/{party_rank_id}/ratings",
    tag = RATING_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved ratings", body = MyRatingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_ratings(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RatingService::new(&state.db);
    let ratings = service.my_ratings(party_rank_id, &user).await?;

    Ok((StatusCode::OK, Json(ratings)))
}

/// Set or clear the caller's favorite entry.
///
/// A null `item_id` clears the current favorite. The favorite cannot be one
/// of the caller's own entries.
#[utoipa::path(
    put,
    path = "/api/party-ranks/{party_rank_id}/favorite",
    tag = RATING_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    request_body = SetFavoriteDto,
    responses(
        (status = 200, description = "Successfully set favorite", body = MyRatingsDto),
        (status = 400, description = "Picked their own entry", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Party rank or entry not found", body = ErrorDto),
        (status = 409, description = "Contest does not accept ratings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
    Json(payload): Json<SetFavoriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = RatingService::new(&state.db);
    let ratings = service.set_favorite(party_rank_id, &user, payload).await?;

    Ok((StatusCode::OK, Json(ratings)))
}
