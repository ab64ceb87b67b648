//! HTTP request handlers.
//!
//! Controllers extract and validate request data, run the auth guard, and
//! delegate to the service layer. Response bodies are the DTOs from
//! `crate::model`; errors convert through `AppError::into_response`.

pub mod auth;
pub mod discord;
pub mod media;
pub mod party_rank;
pub mod rank_item;
pub mod rating;
pub mod results;
