//! Party rank factory for creating test party rank entities.
//!
//! This module provides factory methods for creating party rank entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test party ranks with customizable fields.
///
/// Provides a builder pattern for creating party rank entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::party_rank::PartyRankFactory;
///
/// let party_rank = PartyRankFactory::new(&db, creator.id)
///     .name("Best 80s Synth Tracks")
///     .status("rating")
///     .items_per_member(3)
///     .build()
///     .await?;
/// ```
pub struct PartyRankFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    name: String,
    description: Option<String>,
    status: String,
    items_per_member: i32,
    allow_comments: bool,
    show_authors_on_results: bool,
    deadline_submissions: Option<chrono::DateTime<Utc>>,
    deadline_ratings: Option<chrono::DateTime<Utc>>,
    finished_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> PartyRankFactory<'a> {
    /// Creates a new PartyRankFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Party Rank {id}"` where id is auto-incremented
    /// - description: `Some("Test party rank description")`
    /// - status: `"registration"`
    /// - items_per_member: `1`
    /// - allow_comments: `true`
    /// - show_authors_on_results: `false`
    /// - deadlines: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `creator_id` - User ID of the party rank creator
    ///
    /// # Returns
    /// - `PartyRankFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            name: format!("Party Rank {}", id),
            description: Some("Test party rank description".to_string()),
            status: "registration".to_string(),
            items_per_member: 1,
            allow_comments: true,
            show_authors_on_results: false,
            deadline_submissions: None,
            deadline_ratings: None,
            finished_at: None,
        }
    }

    /// Sets the party rank name.
    ///
    /// # Arguments
    /// - `name` - Display name for the party rank
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the party rank description.
    ///
    /// # Arguments
    /// - `description` - Optional description text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the lifecycle status.
    ///
    /// # Arguments
    /// - `status` - One of `"registration"`, `"ongoing"`, `"rating"`, `"finished"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the number of items each member may submit.
    ///
    /// # Arguments
    /// - `items_per_member` - Submission quota per member
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn items_per_member(mut self, items_per_member: i32) -> Self {
        self.items_per_member = items_per_member;
        self
    }

    /// Sets whether item comments are allowed.
    ///
    /// # Arguments
    /// - `allow_comments` - Whether members may attach comments to items
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn allow_comments(mut self, allow_comments: bool) -> Self {
        self.allow_comments = allow_comments;
        self
    }

    /// Sets whether item authors are revealed on the results view.
    ///
    /// # Arguments
    /// - `show_authors` - Whether authors are shown alongside results
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn show_authors_on_results(mut self, show_authors: bool) -> Self {
        self.show_authors_on_results = show_authors;
        self
    }

    /// Sets the submission deadline.
    ///
    /// # Arguments
    /// - `deadline` - Optional cutoff for item submissions
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn deadline_submissions(mut self, deadline: Option<chrono::DateTime<Utc>>) -> Self {
        self.deadline_submissions = deadline;
        self
    }

    /// Sets the rating deadline.
    ///
    /// # Arguments
    /// - `deadline` - Optional cutoff for submitting ratings
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn deadline_ratings(mut self, deadline: Option<chrono::DateTime<Utc>>) -> Self {
        self.deadline_ratings = deadline;
        self
    }

    /// Sets the finish timestamp.
    ///
    /// # Arguments
    /// - `finished_at` - Optional time the party rank was finished
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn finished_at(mut self, finished_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.finished_at = finished_at;
        self
    }

    /// Builds and inserts the party rank entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::party_rank::Model)` - Created party rank entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::party_rank::Model, DbErr> {
        let now = Utc::now();
        entity::party_rank::ActiveModel {
            id: ActiveValue::NotSet,
            creator_id: ActiveValue::Set(self.creator_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            items_per_member: ActiveValue::Set(self.items_per_member),
            allow_comments: ActiveValue::Set(self.allow_comments),
            show_authors_on_results: ActiveValue::Set(self.show_authors_on_results),
            deadline_submissions: ActiveValue::Set(self.deadline_submissions),
            deadline_ratings: ActiveValue::Set(self.deadline_ratings),
            finished_at: ActiveValue::Set(self.finished_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a party rank with default values for the specified creator.
///
/// Shorthand for `PartyRankFactory::new(db, creator_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `creator_id` - User ID of the party rank creator
///
/// # Returns
/// - `Ok(entity::party_rank::Model)` - Created party rank entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let party_rank = create_party_rank(&db, user.id).await?;
/// ```
pub async fn create_party_rank(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::party_rank::Model, DbErr> {
    PartyRankFactory::new(db, creator_id).build().await
}
