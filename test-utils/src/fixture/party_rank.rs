//! Party rank fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating party rank entity models without database
//! insertion. Useful for unit testing status transition and permission logic.

use chrono::Utc;
use entity::party_rank;

/// Default test party rank name.
pub const DEFAULT_NAME: &str = "Test Party Rank";

/// Default lifecycle status.
pub const DEFAULT_STATUS: &str = "registration";

/// Default submission quota per member.
pub const DEFAULT_ITEMS_PER_MEMBER: i32 = 1;

/// Creates a party rank entity model with default values.
///
/// # Returns
/// - `party_rank::Model` - In-memory party rank entity
pub fn entity() -> party_rank::Model {
    entity_builder().build()
}

/// Creates a party rank entity builder for customization.
///
/// # Returns
/// - `PartyRankEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let party_rank = fixture::party_rank::entity_builder()
///     .status("rating")
///     .items_per_member(3)
///     .build();
/// ```
pub fn entity_builder() -> PartyRankEntityBuilder {
    PartyRankEntityBuilder::default()
}

/// Builder for creating customized party rank entity models.
pub struct PartyRankEntityBuilder {
    id: i32,
    creator_id: i32,
    name: String,
    status: String,
    items_per_member: i32,
    allow_comments: bool,
    show_authors_on_results: bool,
    deadline_submissions: Option<chrono::DateTime<Utc>>,
    deadline_ratings: Option<chrono::DateTime<Utc>>,
    finished_at: Option<chrono::DateTime<Utc>>,
}

impl Default for PartyRankEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            creator_id: 1,
            name: DEFAULT_NAME.to_string(),
            status: DEFAULT_STATUS.to_string(),
            items_per_member: DEFAULT_ITEMS_PER_MEMBER,
            allow_comments: true,
            show_authors_on_results: false,
            deadline_submissions: None,
            deadline_ratings: None,
            finished_at: None,
        }
    }
}

impl PartyRankEntityBuilder {
    /// Sets the party rank ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the creator's user ID.
    pub fn creator_id(mut self, creator_id: i32) -> Self {
        self.creator_id = creator_id;
        self
    }

    /// Sets the party rank name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the submission quota per member.
    pub fn items_per_member(mut self, items_per_member: i32) -> Self {
        self.items_per_member = items_per_member;
        self
    }

    /// Sets whether item comments are allowed.
    pub fn allow_comments(mut self, allow_comments: bool) -> Self {
        self.allow_comments = allow_comments;
        self
    }

    /// Sets whether authors are revealed on results.
    pub fn show_authors_on_results(mut self, show_authors: bool) -> Self {
        self.show_authors_on_results = show_authors;
        self
    }

    /// Sets the submission deadline.
    pub fn deadline_submissions(mut self, deadline: Option<chrono::DateTime<Utc>>) -> Self {
        self.deadline_submissions = deadline;
        self
    }

    /// Sets the rating deadline.
    pub fn deadline_ratings(mut self, deadline: Option<chrono::DateTime<Utc>>) -> Self {
        self.deadline_ratings = deadline;
        self
    }

    /// Sets the finish timestamp.
    pub fn finished_at(mut self, finished_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.finished_at = finished_at;
        self
    }

    /// Builds and returns the party rank entity model.
    pub fn build(self) -> party_rank::Model {
        let now = Utc::now();
        party_rank::Model {
            id: self.id,
            creator_id: self.creator_id,
            name: self.name,
            description: None,
            status: self.status,
            items_per_member: self.items_per_member,
            allow_comments: self.allow_comments,
            show_authors_on_results: self.show_authors_on_results,
            deadline_submissions: self.deadline_submissions,
            deadline_ratings: self.deadline_ratings,
            finished_at: self.finished_at,
            created_at: now,
            updated_at: now,
        }
    }
}
