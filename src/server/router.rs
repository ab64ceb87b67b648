//! HTTP route table.
//!
//! Builds the API router from the annotated controllers, mounts the Swagger
//! UI, serves uploaded media statically, and rate-limits the auth endpoints.
//! Session and trace layers are applied by the caller during startup.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth, discord,
        discord::DISCORD_TAG,
        media,
        media::MEDIA_TAG,
        party_rank,
        party_rank::PARTY_RANK_TAG,
        rank_item,
        rank_item::RANK_ITEM_TAG,
        rating,
        rating::RATING_TAG,
        results,
        results::RESULTS_TAG,
    },
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Party Rank API",
        description = "Contest lifecycle, submissions, ratings, results, and Discord integration"
    ),
    tags(
        (name = PARTY_RANK_TAG, description = "Contest lifecycle and membership"),
        (name = RANK_ITEM_TAG, description = "Entry submission and editing"),
        (name = RATING_TAG, description = "Rating queue and scores"),
        (name = RESULTS_TAG, description = "Tallied results"),
        (name = MEDIA_TAG, description = "Uploaded media"),
        (name = DISCORD_TAG, description = "Discord guilds and channel links")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// # Arguments
/// - `config` - Validated application configuration
///
/// # Returns
/// - `Ok(Router<AppState>)` - The assembled router
/// - `Err(AppError::InternalError)` - Invalid rate limiter configuration
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (api_router, api) = api_router(config).split_for_parts();

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Ok(Router::new()
        .merge(api_router)
        .merge(auth_router()?)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .nest_service("/media", ServeDir::new(&config.uploads_dir))
        .layer(cors))
}

/// The documented API route table, one `routes!` group per path.
fn api_router(config: &Config) -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            party_rank::create_party_rank,
            party_rank::get_party_ranks
        ))
        .routes(routes!(
            party_rank::get_party_rank,
            party_rank::update_party_rank,
            party_rank::delete_party_rank
        ))
        .routes(routes!(party_rank::update_status))
        .routes(routes!(party_rank::join_party_rank))
        .routes(routes!(party_rank::leave_party_rank))
        .routes(routes!(party_rank::get_members))
        .routes(routes!(party_rank::add_moderator))
        .routes(routes!(party_rank::remove_moderator))
        .routes(routes!(
            rank_item::create_rank_item,
            rank_item::get_rank_items
        ))
        .routes(routes!(
            rank_item::update_rank_item,
            rank_item::delete_rank_item
        ))
        .routes(routes!(rating::get_queue))
        .routes(routes!(rating::rate_item, rating::unrate_item))
        .routes(routes!(rating::get_my_ratings))
        .routes(routes!(rating::set_favorite))
        .routes(routes!(results::get_results))
        .routes(routes!(
            discord::link_channel,
            discord::get_channel_links
        ))
        .routes(routes!(discord::unlink_channel))
        .routes(routes!(discord::get_guilds))
        .routes(routes!(discord::get_guild_channels))
        .merge(media_router(config))
}

/// Media routes carry their own body limit so uploads up to the configured
/// maximum pass while the rest of the API keeps axum's 2 MB default.
fn media_router(config: &Config) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(media::upload_media, media::get_media))
        .routes(routes!(media::delete_media))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
}

/// Auth routes sit behind a rate limiter; login and callback drive the OAuth
/// round trip and are the only endpoints reachable without a session.
fn auth_router() -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(5)
        .finish()
        .ok_or_else(|| {
            AppError::InternalError("Invalid rate limiter configuration".to_string())
        })?;

    Ok(Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .layer(GovernorLayer {
            config: Arc::new(governor_config),
        }))
}
