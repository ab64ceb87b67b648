mod model;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{bot, config::Config, error::AppError, scheduler, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    tracing::info!("Starting server");

    // Initialize Discord bot and extract its HTTP client for the
    // notification service and the scheduler
    let bot_client = bot::start::init_bot(&config, db.clone()).await?;
    let discord_http = bot::start::bot_http(&bot_client);

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Start deadline scheduler
    let scheduler_db = db.clone();
    let scheduler_http = discord_http.clone();
    let scheduler_app_url = config.app_url.clone();
    tokio::spawn(async move {
        if let Err(e) =
            scheduler::deadlines::start_scheduler(scheduler_db, scheduler_http, scheduler_app_url)
                .await
        {
            tracing::error!("Deadline scheduler error: {}", e);
        }
    });

    let app = server::router::router(&config)?
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            discord_http,
            config.app_url.clone(),
            config.uploads_dir.clone(),
        ))
        .layer(session);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
