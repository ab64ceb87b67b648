//! Rating deadline reminders.

use crate::server::{
    error::AppError,
    model::{discord::MessageKind, party_rank::PartyRank},
    service::notification::builder,
};

use super::PartyRankNotificationService;

impl<'a> PartyRankNotificationService<'a> {
    /// Posts a rating deadline reminder into all linked channels.
    ///
    /// A contest without a rating deadline gets no reminder. The dedup record
    /// limits this to one reminder per channel even though the scheduler
    /// keeps firing every minute inside the reminder window.
    ///
    /// # Arguments
    /// - `party_rank` - Contest in its rating phase
    ///
    /// # Returns
    /// - `Ok(())` - Reminder handled for every linked channel
    /// - `Err(AppError)` - Database error or embed building failure
    pub async fn post_rating_reminder(&self, party_rank: &PartyRank) -> Result<(), AppError> {
        let Some(deadline) = party_rank.deadline_ratings else {
            return Ok(());
        };

        let url = self.party_rank_url(party_rank.id);
        let embed = builder::base_embed(party_rank, &url, builder::COLOR_REMINDER)?
            .field(
                "Reminder",
                "Rating closes soon. Get your scores in before the deadline!",
                false,
            )
            .field("Rating Deadline", builder::deadline_markup(deadline), false);

        self.post_to_linked_channels(party_rank.id, MessageKind::Reminder, &embed)
            .await
    }
}
