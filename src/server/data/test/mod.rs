mod item_rating;
mod media_file;
mod party_rank;
mod party_rank_member;
mod party_rank_moderator;
mod rank_item;
mod user;
