//! Data transfer objects for the REST API.
//!
//! These types define the JSON shapes exchanged with clients. They are converted
//! from domain models at the controller boundary and derive `ToSchema` for the
//! generated OpenAPI documentation.

pub mod api;
pub mod discord;
pub mod media;
pub mod party_rank;
pub mod rank_item;
pub mod rating;
pub mod results;
pub mod user;
