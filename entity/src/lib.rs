pub mod prelude;

pub mod discord_guild;
pub mod discord_guild_channel;
pub mod item_rating;
pub mod media_file;
pub mod party_rank;
pub mod party_rank_channel;
pub mod party_rank_member;
pub mod party_rank_message;
pub mod party_rank_moderator;
pub mod rank_item;
pub mod user;
