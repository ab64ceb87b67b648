use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::party_rank::PartyRankRepository,
    error::AppError,
    model::party_rank::{PartyRank, PartyRankStatus},
    service::{notification::PartyRankNotificationService, party_rank::PartyRankService},
};

/// How far before a rating deadline the reminder goes out.
fn reminder_lead() -> Duration {
    Duration::hours(1)
}

/// Starts the deadline scheduler
///
/// This scheduler runs every minute and checks for:
/// - Contests in registration whose submission deadline has passed
/// - Contests in rating whose rating deadline has passed
/// - Contests whose rating deadline falls inside the reminder window
///
/// Deadline transitions go through the same status service as manual ones,
/// so the item-count gate and the finished timestamp apply either way.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for sending announcements
/// - `app_url`: Application URL for embed links
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    app_url: String,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_http = discord_http.clone();
    let job_app_url = app_url.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();
        let app_url = job_app_url.clone();

        Box::pin(async move {
            if let Err(e) = process_deadlines(&db, http, app_url).await {
                tracing::error!("Error processing party rank deadlines: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Deadline scheduler started");

    Ok(())
}

/// Processes expired deadlines and due reminders
async fn process_deadlines(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    app_url: String,
) -> Result<(), AppError> {
    let now = Utc::now();

    // Process expired submission deadlines
    if let Err(e) = process_due_submissions(db, discord_http.clone(), app_url.clone(), now).await {
        tracing::error!("Error processing submission deadlines: {}", e);
    }

    // Process expired rating deadlines
    if let Err(e) = process_due_ratings(db, discord_http.clone(), app_url.clone(), now).await {
        tracing::error!("Error processing rating deadlines: {}", e);
    }

    // Process reminder window
    if let Err(e) = process_reminders(db, discord_http, app_url, now).await {
        tracing::error!("Error processing rating reminders: {}", e);
    }

    Ok(())
}

/// Moves contests with an expired submission deadline into `ongoing`.
///
/// A contest with no submitted items stays in registration; the status
/// service rejects the transition and the deadline simply idles until a
/// moderator resolves it.
async fn process_due_submissions(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    app_url: String,
    now: chrono::DateTime<Utc>,
) -> Result<(), AppError> {
    let repo = PartyRankRepository::new(db);
    let service = PartyRankService::new(db);

    for party_rank in repo.find_due_submissions(now).await? {
        tracing::info!(
            "Submission deadline passed for party rank {} ({})",
            party_rank.id,
            party_rank.name
        );

        match service
            .change_status(party_rank.id, PartyRankStatus::Ongoing.as_str())
            .await
        {
            Ok(updated) => {
                announce(db, discord_http.clone(), app_url.clone(), &updated).await;
            }
            Err(e) => {
                tracing::warn!(
                    "Could not close submissions for party rank {}: {}",
                    party_rank.id,
                    e
                );
            }
        }
    }

    Ok(())
}

/// Finishes contests with an expired rating deadline and posts their results.
async fn process_due_ratings(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    app_url: String,
    now: chrono::DateTime<Utc>,
) -> Result<(), AppError> {
    let repo = PartyRankRepository::new(db);
    let service = PartyRankService::new(db);

    for party_rank in repo.find_due_ratings(now).await? {
        tracing::info!(
            "Rating deadline passed for party rank {} ({})",
            party_rank.id,
            party_rank.name
        );

        match service
            .change_status(party_rank.id, PartyRankStatus::Finished.as_str())
            .await
        {
            Ok(updated) => {
                announce(db, discord_http.clone(), app_url.clone(), &updated).await;

                let notification_service = PartyRankNotificationService::new(
                    db,
                    discord_http.clone(),
                    app_url.clone(),
                );
                if let Err(e) = notification_service.post_results(&updated).await {
                    tracing::error!(
                        "Failed to post results for party rank {}: {}",
                        updated.id,
                        e
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Could not finish party rank {}: {}",
                    party_rank.id,
                    e
                );
            }
        }
    }

    Ok(())
}

/// Posts reminders for contests whose rating deadline is inside the lead
/// window. The per-channel message records keep this to one reminder even
/// though the window spans many scheduler runs.
async fn process_reminders(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    app_url: String,
    now: chrono::DateTime<Utc>,
) -> Result<(), AppError> {
    let repo = PartyRankRepository::new(db);

    for party_rank in repo.find_rating_ending_within(now, reminder_lead()).await? {
        let notification_service =
            PartyRankNotificationService::new(db, discord_http.clone(), app_url.clone());

        if let Err(e) = notification_service.post_rating_reminder(&party_rank).await {
            tracing::error!(
                "Failed to post rating reminder for party rank {}: {}",
                party_rank.id,
                e
            );
        }
    }

    Ok(())
}

/// Announces a status transition, logging instead of failing the sweep.
async fn announce(
    db: &DatabaseConnection,
    discord_http: Arc<Http>,
    app_url: String,
    party_rank: &PartyRank,
) {
    let notification_service = PartyRankNotificationService::new(db, discord_http, app_url);

    if let Err(e) = notification_service.announce_status(party_rank).await {
        tracing::error!(
            "Failed to announce status change for party rank {}: {}",
            party_rank.id,
            e
        );
    }
}
