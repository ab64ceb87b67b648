//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Lifecycle Rules**: Enforcing the contest status machine and its gates

pub mod discord;
pub mod media;
pub mod notification;
pub mod oauth;
pub mod party_rank;
pub mod rank_item;
pub mod rating;
pub mod results;
