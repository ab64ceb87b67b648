//! The results podium post.

use std::collections::HashMap;

use crate::server::{
    data::{
        item_rating::ItemRatingRepository, party_rank_member::PartyRankMemberRepository,
        rank_item::RankItemRepository,
    },
    error::AppError,
    model::{discord::MessageKind, party_rank::PartyRank, rank_item::RankItem},
    service::{notification::builder, results::tally},
};

use super::PartyRankNotificationService;

impl<'a> PartyRankNotificationService<'a> {
    /// Posts the results podium into all linked channels.
    ///
    /// Tallies the final standings and posts the top three with a link to the
    /// full results page. Meant to be called once the contest has finished;
    /// the dedup record keeps repeat calls from reposting.
    ///
    /// # Arguments
    /// - `party_rank` - The finished contest
    ///
    /// # Returns
    /// - `Ok(())` - Podium handled for every linked channel
    /// - `Err(AppError)` - Database error or embed building failure
    pub async fn post_results(&self, party_rank: &PartyRank) -> Result<(), AppError> {
        let item_repo = RankItemRepository::new(self.db);
        let rating_repo = ItemRatingRepository::new(self.db);
        let member_repo = PartyRankMemberRepository::new(self.db);

        let items: Vec<RankItem> = item_repo
            .get_by_party_rank_with_authors(party_rank.id)
            .await?
            .into_iter()
            .map(|(item, _)| item)
            .collect();
        let ratings = rating_repo
            .get_for_party_rank_with_users(party_rank.id)
            .await?;
        let favorites: Vec<i32> = member_repo
            .get_by_party_rank(party_rank.id)
            .await?
            .into_iter()
            .filter_map(|(member, _)| member.favorite_item_id)
            .collect();

        let results = tally(party_rank, items, &ratings, &favorites);

        let favorite_counts: HashMap<i32, u64> = results
            .items
            .iter()
            .map(|ranked| (ranked.item.id, ranked.favorite_count))
            .collect();
        let crowd_favorite = favorite_counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .max_by_key(|(_, &count)| count)
            .and_then(|(&item_id, _)| {
                results
                    .items
                    .iter()
                    .find(|ranked| ranked.item.id == item_id)
            });

        let url = self.party_rank_url(party_rank.id);
        let mut embed = builder::base_embed(party_rank, &url, builder::COLOR_RESULTS)?
            .field("Podium", builder::format_podium(&results.items), false);

        if let Some(favorite) = crowd_favorite {
            embed = embed.field(
                "Crowd Favorite",
                format!(
                    "\u{2764} **{}** ({} favorites)",
                    favorite.item.name, favorite.favorite_count
                ),
                false,
            );
        }

        embed = embed.field(
            "Full Results",
            format!("See the complete standings at {}", url),
            false,
        );

        self.post_to_linked_channels(party_rank.id, MessageKind::Results, &embed)
            .await
    }
}
