//! Status transition announcements.
//!
//! Posted into every linked channel when a contest moves to a new phase.
//! Registration has no announcement; channels get linked during it.

use serenity::all::CreateEmbed;

use crate::server::{
    error::AppError,
    model::{
        discord::MessageKind,
        party_rank::{PartyRank, PartyRankStatus},
    },
    service::notification::builder,
};

use super::PartyRankNotificationService;

impl<'a> PartyRankNotificationService<'a> {
    /// Announces a contest's current status in all linked channels.
    ///
    /// Picks the message kind matching the status, so each transition is
    /// announced at most once per channel. Calling this for a contest still
    /// in registration is a no-op.
    ///
    /// # Arguments
    /// - `party_rank` - Contest after the transition
    ///
    /// # Returns
    /// - `Ok(())` - Announcement handled for every linked channel
    /// - `Err(AppError)` - Database error or embed building failure
    pub async fn announce_status(&self, party_rank: &PartyRank) -> Result<(), AppError> {
        let Some(kind) = MessageKind::for_status(party_rank.status) else {
            return Ok(());
        };

        let embed = self.build_status_embed(party_rank)?;

        self.post_to_linked_channels(party_rank.id, kind, &embed)
            .await
    }

    fn build_status_embed(&self, party_rank: &PartyRank) -> Result<CreateEmbed, AppError> {
        let url = self.party_rank_url(party_rank.id);

        let (color, headline) = match party_rank.status {
            PartyRankStatus::Registration => (builder::COLOR_ONGOING, ""),
            PartyRankStatus::Ongoing => (
                builder::COLOR_ONGOING,
                "Submissions are closed. Time to watch the entries!",
            ),
            PartyRankStatus::Rating => (
                builder::COLOR_RATING,
                "Rating is open. Score every entry before the deadline!",
            ),
            PartyRankStatus::Finished => (
                builder::COLOR_FINISHED,
                "The party rank has finished. Results are in!",
            ),
        };

        let mut embed = builder::base_embed(party_rank, &url, color)?
            .field("Status", headline, false);

        if party_rank.status == PartyRankStatus::Rating {
            if let Some(deadline) = party_rank.deadline_ratings {
                embed = embed.field(
                    "Rating Deadline",
                    builder::deadline_markup(deadline),
                    false,
                );
            }
        }

        Ok(embed)
    }
}
