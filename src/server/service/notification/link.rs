//! Channel link confirmations.

use crate::server::{
    data::discord::PartyRankMessageRepository,
    error::AppError,
    model::{discord::MessageKind, party_rank::PartyRank},
    service::notification::builder,
};

use super::PartyRankNotificationService;

impl<'a> PartyRankNotificationService<'a> {
    /// Posts a confirmation into a channel that was just linked to a contest.
    ///
    /// Goes to the one channel only, not to every link, and is recorded so
    /// relinking the same channel later stays silent.
    ///
    /// # Arguments
    /// - `party_rank` - Contest the channel was linked to
    /// - `channel_id` - The freshly linked channel
    ///
    /// # Returns
    /// - `Ok(())` - Confirmation handled (posted, skipped, or logged)
    /// - `Err(AppError)` - Database error or embed building failure
    pub async fn post_link_confirmation(
        &self,
        party_rank: &PartyRank,
        channel_id: u64,
    ) -> Result<(), AppError> {
        let message_repo = PartyRankMessageRepository::new(self.db);

        if message_repo
            .exists(party_rank.id, channel_id, MessageKind::Link)
            .await?
        {
            return Ok(());
        }

        let url = self.party_rank_url(party_rank.id);
        let embed = builder::base_embed(party_rank, &url, builder::COLOR_LINK)?.field(
            "Linked",
            "This channel now receives announcements for the party rank above.",
            false,
        );

        self.post_to_channel(party_rank.id, channel_id, MessageKind::Link, &embed)
            .await
    }
}
