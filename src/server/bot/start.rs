//! Discord bot client construction and startup.

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::server::bot::handler::Handler;
use crate::server::config::Config;
use crate::server::error::AppError;

/// Builds the Discord bot client.
///
/// The returned client is not yet connected; `start_bot` drives it. The
/// client's HTTP handle can be cloned out beforehand and shared with the
/// notification service and the scheduler.
///
/// # Arguments
/// - `config` - Application configuration carrying the bot token
/// - `db` - Database connection for the event handlers
///
/// # Returns
/// - `Ok(Client)` - Configured client ready to start
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    // Only guild and channel events are mirrored; no privileged intents
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db))
        .await?;

    Ok(client)
}

/// The bot's HTTP handle, shared with the notification service.
pub fn bot_http(client: &Client) -> Arc<Http> {
    client.http.clone()
}

/// Starts the Discord bot in a blocking manner
///
/// This function starts the Discord bot client. It should be called from
/// within a tokio::spawn task since it will block until the bot shuts down.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
