pub use super::discord_guild::Entity as DiscordGuild;
pub use super::discord_guild_channel::Entity as DiscordGuildChannel;
pub use super::item_rating::Entity as ItemRating;
pub use super::media_file::Entity as MediaFile;
pub use super::party_rank::Entity as PartyRank;
pub use super::party_rank_channel::Entity as PartyRankChannel;
pub use super::party_rank_member::Entity as PartyRankMember;
pub use super::party_rank_message::Entity as PartyRankMessage;
pub use super::party_rank_moderator::Entity as PartyRankModerator;
pub use super::rank_item::Entity as RankItem;
pub use super::user::Entity as User;
