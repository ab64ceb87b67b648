//! Discord bot integration for guild and channel mirroring.
//!
//! This module provides the Discord bot side of the application. The bot keeps
//! a database mirror of the guilds it is in and their text channels, which the
//! REST API reads when moderators link channels to a party rank. It never
//! reads messages or member lists.
//!
//! The bot is initialized during server startup and runs in a separate tokio
//! task to avoid blocking the HTTP server. The bot's HTTP client is shared
//! with the notification service and scheduler so announcements go out over
//! the same connection.
//!
//! # Gateway Intents
//!
//! The bot requires only the `GUILDS` intent, which covers guild create and
//! delete events plus channel create, update, and delete events. No
//! privileged intents are needed.

pub mod handler;
pub mod start;
