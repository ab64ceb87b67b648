use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, results::PartyRankResultsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::results::ResultsService,
        state::AppState,
    },
};

/// Tag for grouping results endpoints in OpenAPI documentation
pub static RESULTS_TAG: &str = "results";

/// Get a party rank's tallied results.
///
/// Members see the standings once the contest finished; moderators may peek
/// at the live standings in any status. Items come back in leaderboard order
/// together with the reveal order for the results slideshow.
///
/// # Access Control
/// - `Member` - Caller must be enrolled in the contest
///
/// # Returns
/// - `200 OK` - Ranked items plus the reveal order
/// - `403 Forbidden` - Contest not finished and caller is no moderator
#[utoipa::path(
    get,
    path = "/api/party-ranks/{party_rank_id}/results",
    tag = RESULTS_TAG,
    params(
        ("party_rank_id" = i32, Path, description = "Party rank ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved results", body = PartyRankResultsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Results not visible yet", body = ErrorDto),
        (status = 404, description = "Party rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_results(
    State(state): State<AppState>,
    session: Session,
    Path(party_rank_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Member(party_rank_id)])
        .await?;

    let service = ResultsService::new(&state.db);
    let results = service.results(party_rank_id, &user).await?;

    Ok((StatusCode::OK, Json(results)))
}
